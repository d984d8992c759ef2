//! Business-day adjustment conventions.

use std::fmt;

use crate::types::error::CalendarError;

/// Business-day adjustment convention.
///
/// Defines how dates falling on non-business days are rolled. The wire
/// codes match the upstream record encoding and are resolved at
/// ingestion via [`BusinessDayConvention::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BusinessDayConvention {
    /// No adjustment
    Unadjusted,
    /// Move to the next business day
    #[default]
    Following,
    /// Move to the next business day, unless that crosses a month boundary
    ModifiedFollowing,
    /// Move to the previous business day
    Preceding,
    /// Move to the previous business day, unless that crosses a month boundary
    ModifiedPreceding,
}

impl BusinessDayConvention {
    /// Returns the wire code for this convention.
    pub fn code(&self) -> u32 {
        match self {
            BusinessDayConvention::Unadjusted => 1,
            BusinessDayConvention::Following => 2,
            BusinessDayConvention::ModifiedFollowing => 3,
            BusinessDayConvention::Preceding => 4,
            BusinessDayConvention::ModifiedPreceding => 5,
        }
    }

    /// Resolves a raw wire code to a convention.
    ///
    /// # Examples
    ///
    /// ```
    /// use batch_core::calendar::BusinessDayConvention;
    ///
    /// let conv = BusinessDayConvention::from_code(2).unwrap();
    /// assert_eq!(conv, BusinessDayConvention::Following);
    /// assert!(BusinessDayConvention::from_code(0).is_err());
    /// ```
    pub fn from_code(code: u32) -> Result<Self, CalendarError> {
        match code {
            1 => Ok(BusinessDayConvention::Unadjusted),
            2 => Ok(BusinessDayConvention::Following),
            3 => Ok(BusinessDayConvention::ModifiedFollowing),
            4 => Ok(BusinessDayConvention::Preceding),
            5 => Ok(BusinessDayConvention::ModifiedPreceding),
            _ => Err(CalendarError::UnknownConvention { code }),
        }
    }

    /// Returns the convention name.
    pub fn name(&self) -> &'static str {
        match self {
            BusinessDayConvention::Unadjusted => "Unadjusted",
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
        }
    }
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
