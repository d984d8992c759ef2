//! Error types for the foundation layer.
//!
//! This module provides:
//! - `DateError`: Errors from date construction and parsing
//! - `CurrencyError`: Errors from currency resolution
//! - `CalendarError`: Errors from calendar and convention resolution

use thiserror::Error;

/// Date-related errors.
///
/// # Examples
/// ```
/// use batch_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse a date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

/// Currency resolution errors.
///
/// # Examples
/// ```
/// use batch_core::types::CurrencyError;
///
/// let err = CurrencyError::UnknownCurrency("XYZ".to_string());
/// assert_eq!(format!("{}", err), "Unknown currency: XYZ");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Unknown ISO 4217 alphabetic code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Unknown ISO 4217 numeric code.
    #[error("Unknown ISO 4217 numeric code: {0}")]
    UnknownNumericCode(u16),
}

/// Calendar and business-day-convention resolution errors.
///
/// Raised when a raw wire code cannot be mapped to a known holiday
/// calendar or adjustment convention.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Unknown bank-holidays calendar code.
    #[error("Unknown bank holidays code: {code}")]
    UnknownCalendar {
        /// The unresolvable wire code
        code: u32,
    },

    /// Unknown business-day-convention code.
    #[error("Unknown business day convention code: {code}")]
    UnknownConvention {
        /// The unresolvable wire code
        code: u32,
    },
}
