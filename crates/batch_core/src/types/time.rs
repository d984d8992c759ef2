//! Time types and day-count conventions.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `DayCount`: Day-count conventions for year-fraction calculations
//!
//! # Examples
//!
//! ```
//! use batch_core::types::time::{Date, DayCount};
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 7, 1).unwrap();
//!
//! assert_eq!(end - start, 182);
//!
//! let yf = DayCount::Act360.year_fraction(start, end);
//! assert!((yf - 182.0 / 360.0).abs() < 1e-12);
//! ```

use chrono::{Datelike, NaiveDate, Weekday};
use num_traits::Float;
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides construction from (year, month, day) triples as handed over by
/// the record decoder, ISO 8601 parsing, and the small amount of date
/// arithmetic the calendar layer needs.
///
/// # Examples
///
/// ```
/// use batch_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a date from year, month, and day components.
    ///
    /// # Examples
    ///
    /// ```
    /// use batch_core::types::time::Date;
    ///
    /// let leap = Date::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(leap.day(), 29);
    ///
    /// let invalid = Date::from_ymd(2023, 2, 29);
    /// assert!(invalid.is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from an ISO 8601 string (YYYY-MM-DD).
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the underlying NaiveDate for access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns true if the date falls on a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Returns the next calendar day.
    ///
    /// Saturates at the maximum representable date.
    pub fn next_day(self) -> Self {
        Date(self.0.succ_opt().unwrap_or(self.0))
    }

    /// Returns the previous calendar day.
    ///
    /// Saturates at the minimum representable date.
    pub fn prev_day(self) -> Self {
        Date(self.0.pred_opt().unwrap_or(self.0))
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of calendar days from `rhs` to `self`.
    fn sub(self, rhs: Self) -> i64 {
        (self.0 - rhs.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Day-count convention for year-fraction calculations.
///
/// Carried as metadata on volatility-surface nodes; the batching layer
/// checks it for uniformity and converts node expiries to year fractions
/// with it, but performs no other date arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayCount {
    /// Actual/360 - actual days divided by 360
    Act360,
    /// Actual/365 Fixed - actual days divided by 365
    #[default]
    Act365Fixed,
    /// 30/360 Bond Basis
    Thirty360,
}

impl DayCount {
    /// Calculates the year fraction between two dates.
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        let days = (end - start) as f64;
        match self {
            DayCount::Act360 => days / 360.0,
            DayCount::Act365Fixed => days / 365.0,
            DayCount::Thirty360 => thirty_360_fraction(start, end),
        }
    }

    /// Calculates the year fraction as a generic float type.
    pub fn year_fraction_generic<T: Float>(&self, start: Date, end: Date) -> T {
        T::from(self.year_fraction(start, end)).unwrap_or_else(T::zero)
    }

    /// Returns the convention name.
    pub fn name(&self) -> &'static str {
        match self {
            DayCount::Act360 => "ACT/360",
            DayCount::Act365Fixed => "ACT/365",
            DayCount::Thirty360 => "30/360",
        }
    }
}

impl fmt::Display for DayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn thirty_360_fraction(start: Date, end: Date) -> f64 {
    let (y1, m1, d1) = (start.year(), start.month() as i32, start.day() as i32);
    let (y2, m2, d2) = (end.year(), end.month() as i32, end.day() as i32);

    let d1_adj = d1.min(30);
    let d2_adj = if d1_adj == 30 { d2.min(30) } else { d2 };

    let days = 360 * (y2 - y1) + 30 * (m2 - m1) + (d2_adj - d1_adj);
    days as f64 / 360.0
}
