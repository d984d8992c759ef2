//! Holiday-calendar identifiers and resolved calendars.

use std::collections::BTreeSet;
use std::fmt;

use super::convention::BusinessDayConvention;
use crate::types::error::CalendarError;
use crate::types::time::Date;

/// Years covered by the seeded fixed-date holiday sets.
const SEED_YEARS: std::ops::RangeInclusive<i32> = 2020..=2035;

/// Holiday-calendar identifier.
///
/// Identifies which bank-holiday set applies to an instrument. Records
/// carry these as raw wire codes; [`BankHolidays::from_code`] resolves
/// them at ingestion and [`BankHolidays::resolve`] produces the concrete
/// [`HolidayCalendar`].
///
/// Two instruments may only share a batch when their calendar identifiers
/// match, so this enum is part of the grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BankHolidays {
    /// Weekends only, no bank holidays
    WeekendOnly,
    /// United States bank holidays
    UnitedStates,
    /// United Kingdom bank holidays
    UnitedKingdom,
    /// Japan bank holidays
    Japan,
    /// TARGET (eurozone) bank holidays
    Target,
}

impl BankHolidays {
    /// Returns the wire code for this calendar identifier.
    pub fn code(&self) -> u32 {
        match self {
            BankHolidays::WeekendOnly => 1,
            BankHolidays::UnitedStates => 2,
            BankHolidays::UnitedKingdom => 3,
            BankHolidays::Japan => 4,
            BankHolidays::Target => 5,
        }
    }

    /// Resolves a raw wire code to a calendar identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use batch_core::calendar::BankHolidays;
    ///
    /// assert_eq!(BankHolidays::from_code(2).unwrap(), BankHolidays::UnitedStates);
    /// assert!(BankHolidays::from_code(0).is_err());
    /// ```
    pub fn from_code(code: u32) -> Result<Self, CalendarError> {
        match code {
            1 => Ok(BankHolidays::WeekendOnly),
            2 => Ok(BankHolidays::UnitedStates),
            3 => Ok(BankHolidays::UnitedKingdom),
            4 => Ok(BankHolidays::Japan),
            5 => Ok(BankHolidays::Target),
            _ => Err(CalendarError::UnknownCalendar { code }),
        }
    }

    /// Returns the calendar name.
    pub fn name(&self) -> &'static str {
        match self {
            BankHolidays::WeekendOnly => "Weekend Only",
            BankHolidays::UnitedStates => "United States",
            BankHolidays::UnitedKingdom => "United Kingdom",
            BankHolidays::Japan => "Japan",
            BankHolidays::Target => "TARGET",
        }
    }

    /// Resolves this identifier to a concrete holiday calendar.
    ///
    /// The holiday sets are seeded with the fixed-date holidays of each
    /// region over a bounded year range; full calendar generation
    /// (floating holidays, observance rules) lives with the market-data
    /// collaborator that owns the calendar feed.
    pub fn resolve(&self) -> HolidayCalendar {
        let fixed: &[(u32, u32)] = match self {
            BankHolidays::WeekendOnly => &[],
            BankHolidays::UnitedStates => &[(1, 1), (7, 4), (12, 25)],
            BankHolidays::UnitedKingdom => &[(1, 1), (12, 25), (12, 26)],
            BankHolidays::Japan => &[(1, 1), (2, 11), (5, 3)],
            BankHolidays::Target => &[(1, 1), (5, 1), (12, 25), (12, 26)],
        };

        let mut holidays = BTreeSet::new();
        for year in SEED_YEARS {
            for &(month, day) in fixed {
                if let Ok(date) = Date::from_ymd(year, month, day) {
                    holidays.insert(date);
                }
            }
        }

        HolidayCalendar {
            region: *self,
            holidays,
        }
    }
}

impl fmt::Display for BankHolidays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A resolved holiday calendar.
///
/// Combines the weekend rule with an explicit holiday-date set and
/// provides the business-day checks and date-roll adjustments the
/// batching layer stores alongside each batch. The grouping layer treats
/// the calendar as opaque group metadata; only the downstream numeric
/// consumers interpret it.
///
/// # Examples
///
/// ```
/// use batch_core::calendar::{BankHolidays, BusinessDayConvention};
/// use batch_core::types::Date;
///
/// let calendar = BankHolidays::UnitedStates.resolve();
///
/// // 2024-07-04 is a seeded US holiday (Thursday)
/// let independence_day = Date::from_ymd(2024, 7, 4).unwrap();
/// assert!(!calendar.is_business_day(independence_day));
///
/// let adjusted = calendar.adjust(independence_day, BusinessDayConvention::Following);
/// assert_eq!(adjusted, Date::from_ymd(2024, 7, 5).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayCalendar {
    region: BankHolidays,
    holidays: BTreeSet<Date>,
}

impl HolidayCalendar {
    /// Returns the calendar identifier this calendar was resolved from.
    pub fn region(&self) -> BankHolidays {
        self.region
    }

    /// Returns true if the date is a seeded holiday.
    pub fn is_holiday(&self, date: Date) -> bool {
        self.holidays.contains(&date)
    }

    /// Returns true if the date is a business day.
    pub fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend() && !self.is_holiday(date)
    }

    /// Returns the next business day on or after the given date.
    pub fn following(&self, mut date: Date) -> Date {
        while !self.is_business_day(date) {
            date = date.next_day();
        }
        date
    }

    /// Returns the previous business day on or before the given date.
    pub fn preceding(&self, mut date: Date) -> Date {
        while !self.is_business_day(date) {
            date = date.prev_day();
        }
        date
    }

    /// Applies the modified-following adjustment.
    ///
    /// Rolls forward, unless that crosses a month boundary, in which case
    /// rolls backward instead.
    pub fn modified_following(&self, date: Date) -> Date {
        let following = self.following(date);
        if following.month() != date.month() {
            self.preceding(date)
        } else {
            following
        }
    }

    /// Applies the modified-preceding adjustment.
    ///
    /// Rolls backward, unless that crosses a month boundary, in which case
    /// rolls forward instead.
    pub fn modified_preceding(&self, date: Date) -> Date {
        let preceding = self.preceding(date);
        if preceding.month() != date.month() {
            self.following(date)
        } else {
            preceding
        }
    }

    /// Adjusts a date according to the given business-day convention.
    pub fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        match convention {
            BusinessDayConvention::Unadjusted => date,
            BusinessDayConvention::Following => self.following(date),
            BusinessDayConvention::ModifiedFollowing => self.modified_following(date),
            BusinessDayConvention::Preceding => self.preceding(date),
            BusinessDayConvention::ModifiedPreceding => self.modified_preceding(date),
        }
    }

    /// Adds (or subtracts) a number of business days.
    pub fn add_business_days(&self, mut date: Date, days: i32) -> Date {
        if days == 0 {
            return self.following(date);
        }

        let forward = days > 0;
        let mut remaining = days.abs();
        while remaining > 0 {
            date = if forward {
                date.next_day()
            } else {
                date.prev_day()
            };
            if self.is_business_day(date) {
                remaining -= 1;
            }
        }
        date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_code_roundtrip() {
        for calendar in [
            BankHolidays::WeekendOnly,
            BankHolidays::UnitedStates,
            BankHolidays::UnitedKingdom,
            BankHolidays::Japan,
            BankHolidays::Target,
        ] {
            assert_eq!(BankHolidays::from_code(calendar.code()).unwrap(), calendar);
        }
    }

    #[test]
    fn test_from_code_unknown() {
        assert_eq!(
            BankHolidays::from_code(0),
            Err(CalendarError::UnknownCalendar { code: 0 })
        );
    }

    #[test]
    fn test_name_and_display() {
        assert_eq!(BankHolidays::Target.name(), "TARGET");
        assert_eq!(format!("{}", BankHolidays::Japan), "Japan");
    }

    #[test]
    fn test_weekend_only_has_no_holidays() {
        let calendar = BankHolidays::WeekendOnly.resolve();
        assert!(!calendar.is_holiday(date(2024, 12, 25)));
        assert!(calendar.is_business_day(date(2024, 12, 25))); // Wednesday
    }

    #[test]
    fn test_us_holiday_membership() {
        let calendar = BankHolidays::UnitedStates.resolve();
        assert!(calendar.is_holiday(date(2024, 7, 4)));
        assert!(!calendar.is_holiday(date(2024, 7, 5)));
        assert!(!calendar.is_business_day(date(2024, 7, 4)));
    }

    #[test]
    fn test_following_over_weekend() {
        let calendar = BankHolidays::WeekendOnly.resolve();
        // Saturday rolls to Monday
        assert_eq!(calendar.following(date(2024, 7, 6)), date(2024, 7, 8));
        // Business day stays put
        assert_eq!(calendar.following(date(2024, 7, 8)), date(2024, 7, 8));
    }

    #[test]
    fn test_following_over_holiday() {
        let calendar = BankHolidays::UnitedKingdom.resolve();
        // 2024-12-25 (Wed) and 12-26 (Thu) are holidays, so roll to Friday
        assert_eq!(calendar.following(date(2024, 12, 25)), date(2024, 12, 27));
    }

    #[test]
    fn test_preceding() {
        let calendar = BankHolidays::WeekendOnly.resolve();
        // Sunday rolls back to Friday
        assert_eq!(calendar.preceding(date(2024, 7, 7)), date(2024, 7, 5));
    }

    #[test]
    fn test_modified_following_month_cross() {
        let calendar = BankHolidays::WeekendOnly.resolve();
        // Saturday 2024-08-31: following lands in September, so roll back
        assert_eq!(
            calendar.modified_following(date(2024, 8, 31)),
            date(2024, 8, 30)
        );
        // Saturday 2024-07-06: no month cross, plain following
        assert_eq!(
            calendar.modified_following(date(2024, 7, 6)),
            date(2024, 7, 8)
        );
    }

    #[test]
    fn test_modified_preceding_month_cross() {
        let calendar = BankHolidays::WeekendOnly.resolve();
        // Sunday 2024-09-01: preceding lands in August, so roll forward
        assert_eq!(
            calendar.modified_preceding(date(2024, 9, 1)),
            date(2024, 9, 2)
        );
    }

    #[test]
    fn test_adjust_dispatch() {
        let calendar = BankHolidays::WeekendOnly.resolve();
        let saturday = date(2024, 7, 6);
        assert_eq!(
            calendar.adjust(saturday, BusinessDayConvention::Unadjusted),
            saturday
        );
        assert_eq!(
            calendar.adjust(saturday, BusinessDayConvention::Following),
            date(2024, 7, 8)
        );
        assert_eq!(
            calendar.adjust(saturday, BusinessDayConvention::Preceding),
            date(2024, 7, 5)
        );
    }

    #[test]
    fn test_add_business_days() {
        let calendar = BankHolidays::UnitedStates.resolve();
        // Wednesday 2024-07-03 + 1 business day skips the July 4th holiday
        assert_eq!(
            calendar.add_business_days(date(2024, 7, 3), 1),
            date(2024, 7, 5)
        );
        // Friday + 1 business day = Monday
        assert_eq!(
            calendar.add_business_days(date(2024, 7, 5), 1),
            date(2024, 7, 8)
        );
        // Monday - 1 business day = Friday
        assert_eq!(
            calendar.add_business_days(date(2024, 7, 8), -1),
            date(2024, 7, 5)
        );
    }

    #[test]
    fn test_resolved_calendars_compare_equal() {
        let a = BankHolidays::Japan.resolve();
        let b = BankHolidays::Japan.resolve();
        assert_eq!(a, b);
        assert_ne!(a, BankHolidays::Target.resolve());
    }

    #[test]
    fn test_region() {
        assert_eq!(
            BankHolidays::Target.resolve().region(),
            BankHolidays::Target
        );
    }
}
