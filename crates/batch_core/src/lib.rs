//! # batch_core: Foundation Types for Portfolio Batching
//!
//! Bottom layer of the quantbatch workspace, providing the value types the
//! grouping and market-data layers are built on:
//! - Currency codes with ISO 4217 numeric resolution (`types::currency`)
//! - Date and day-count types (`types::time`)
//! - Holiday calendars and business-day conventions (`calendar`)
//! - Error types: `DateError`, `CurrencyError`, `CalendarError`
//!   (`types::error`)
//!
//! ## Layering
//!
//! batch_core has no dependencies on other quantbatch crates, with minimal
//! external dependencies:
//! - num-traits: generic year-fraction helpers
//! - chrono: date arithmetic
//! - thiserror: structured errors
//! - serde: serialisation support (optional, default-on)
//!
//! ## Usage Examples
//!
//! ```rust
//! use batch_core::calendar::{BankHolidays, BusinessDayConvention};
//! use batch_core::types::{Currency, Date, DayCount};
//!
//! // Resolve raw wire codes the way an upstream decoder hands them over.
//! let currency = Currency::from_numeric(840).unwrap();
//! assert_eq!(currency, Currency::USD);
//!
//! let convention = BusinessDayConvention::from_code(3).unwrap();
//! assert_eq!(convention, BusinessDayConvention::ModifiedFollowing);
//!
//! // Adjust a date with a resolved calendar.
//! let calendar = BankHolidays::UnitedStates.resolve();
//! let date = Date::from_ymd(2024, 7, 6).unwrap(); // Saturday
//! let adjusted = calendar.adjust(date, convention);
//! assert_eq!(adjusted, Date::from_ymd(2024, 7, 8).unwrap());
//!
//! // Year fractions for surface nodes.
//! let start = Date::from_ymd(2023, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 1, 1).unwrap();
//! let yf = DayCount::Act365Fixed.year_fraction(start, end);
//! assert!((yf - 1.0).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod calendar;
pub mod types;

pub use calendar::{BankHolidays, BusinessDayConvention, HolidayCalendar};
pub use types::{CalendarError, Currency, CurrencyError, Date, DateError, DayCount};
