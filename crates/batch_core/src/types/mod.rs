//! Core value types: currencies, dates, day counts, and their errors.

pub mod currency;
pub mod error;
pub mod time;

pub use currency::Currency;
pub use error::{CalendarError, CurrencyError, DateError};
pub use time::{Date, DayCount};
