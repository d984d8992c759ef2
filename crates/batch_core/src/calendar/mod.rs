//! Holiday calendars and business-day conventions.
//!
//! This module provides:
//! - [`BusinessDayConvention`]: date-roll conventions with wire-code
//!   resolution
//! - [`BankHolidays`]: holiday-calendar identifiers with wire-code
//!   resolution
//! - [`HolidayCalendar`]: a resolved calendar supporting business-day
//!   checks and adjustments

mod convention;
mod holidays;

pub use convention::BusinessDayConvention;
pub use holidays::{BankHolidays, HolidayCalendar};
