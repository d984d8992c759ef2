//! Currency types for batched instrument processing.
//!
//! This module provides ISO 4217 currency codes with both alphabetic and
//! numeric resolution, so records arriving from an upstream decoder with
//! raw numeric codes can be mapped to typed values at ingestion.
//!
//! # Examples
//!
//! ```
//! use batch_core::types::currency::Currency;
//!
//! let usd = Currency::USD;
//! assert_eq!(usd.code(), "USD");
//! assert_eq!(usd.numeric(), 840);
//!
//! let gbp = Currency::from_numeric(826).unwrap();
//! assert_eq!(gbp, Currency::GBP);
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::CurrencyError;

/// ISO 4217 currency codes for the major trading currencies.
///
/// Carries both the three-letter alphabetic code and the numeric code used
/// on wire formats, so a decoder collaborator can hand over raw integers
/// and have them resolved here.
///
/// # Examples
///
/// ```
/// use batch_core::types::currency::Currency;
///
/// // Alphabetic code
/// assert_eq!(Currency::EUR.code(), "EUR");
///
/// // Numeric wire code
/// assert_eq!(Currency::EUR.numeric(), 978);
///
/// // Parse from string (case-insensitive)
/// let jpy: Currency = "jpy".parse().unwrap();
/// assert_eq!(jpy, Currency::JPY);
/// ```
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Currency {
    /// United States Dollar (ISO 4217: USD / 840)
    USD,

    /// Euro (ISO 4217: EUR / 978)
    EUR,

    /// British Pound Sterling (ISO 4217: GBP / 826)
    GBP,

    /// Japanese Yen (ISO 4217: JPY / 392)
    JPY,

    /// Swiss Franc (ISO 4217: CHF / 756)
    CHF,
}

impl Currency {
    /// Returns the ISO 4217 three-letter currency code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
        }
    }

    /// Returns the ISO 4217 numeric currency code.
    pub fn numeric(&self) -> u16 {
        match self {
            Currency::USD => 840,
            Currency::EUR => 978,
            Currency::GBP => 826,
            Currency::JPY => 392,
            Currency::CHF => 756,
        }
    }

    /// Resolves an ISO 4217 numeric code to a currency.
    ///
    /// # Examples
    ///
    /// ```
    /// use batch_core::types::currency::Currency;
    ///
    /// assert_eq!(Currency::from_numeric(840).unwrap(), Currency::USD);
    /// assert!(Currency::from_numeric(0).is_err());
    /// ```
    pub fn from_numeric(code: u16) -> Result<Self, CurrencyError> {
        match code {
            840 => Ok(Currency::USD),
            978 => Ok(Currency::EUR),
            826 => Ok(Currency::GBP),
            392 => Ok(Currency::JPY),
            756 => Ok(Currency::CHF),
            _ => Err(CurrencyError::UnknownNumericCode(code)),
        }
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    /// Parses an ISO 4217 alphabetic code (case-insensitive).
    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            "CHF" => Ok(Currency::CHF),
            _ => Err(CurrencyError::UnknownCurrency(s.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    /// Formats as ISO 4217 alphabetic code.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
