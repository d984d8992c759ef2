//! American equity option records.
//!
//! The upstream decoder hands records over in a raw, wire-shaped form:
//! numeric currency/calendar/convention codes, an optional
//! (year, month, day) expiry triple, and decimal fields already converted
//! to floating point. [`AmericanOptionRecord::from_raw`] resolves and
//! validates that form at ingestion; anything malformed fails there and
//! never reaches a batch.

use batch_core::calendar::{BankHolidays, BusinessDayConvention};
use batch_core::types::{Currency, Date};

use crate::error::RecordError;
use crate::fingerprint::{Fingerprint, GroupingKey};

/// Result-attribution metadata carried through batching.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordMeta {
    /// Instrument name (unique identifier for result attribution)
    pub name: String,
    /// Instrument type tag
    pub instrument_type: String,
}

/// A decoder-shaped raw option record.
///
/// Mirrors the upstream wire layout: scalar flags and counts are always
/// present (with their wire defaults), while codes, the expiry triple and
/// the numeric fields must be validated before use.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawOptionRecord {
    /// ISO 4217 numeric currency code
    pub currency_code: u16,
    /// Holiday-calendar wire code
    pub bank_holidays_code: u32,
    /// Business-day-convention wire code
    pub business_day_convention_code: u32,
    /// Expiry date as (year, month, day)
    pub expiry_date: Option<(i32, u32, u32)>,
    /// Equity underlier identifier
    pub equity: String,
    /// Contract amount, already converted from the wire decimal
    pub contract_amount: Option<f64>,
    /// Strike, already converted from the wire decimal
    pub strike: Option<f64>,
    /// Call flag (false means put)
    pub is_call_option: bool,
    /// Settlement lag in business days
    pub settlement_days: u32,
    /// Short-position flag
    pub short_position: bool,
    /// Instrument name
    pub name: String,
    /// Instrument type tag
    pub instrument_type: String,
}

/// A validated American equity option record.
///
/// Immutable input to the grouping layer; every field has been resolved
/// from its wire form at ingestion.
///
/// # Examples
///
/// ```
/// use batch_engine::{AmericanOptionRecord, RawOptionRecord};
///
/// let raw = RawOptionRecord {
///     currency_code: 840,
///     bank_holidays_code: 2,
///     business_day_convention_code: 2,
///     expiry_date: Some((2025, 6, 20)),
///     equity: "GOOG".to_string(),
///     contract_amount: Some(1_000_000.0),
///     strike: Some(150.0),
///     is_call_option: true,
///     name: "OPT-1".to_string(),
///     instrument_type: "AmericanEquityOption".to_string(),
///     ..RawOptionRecord::default()
/// };
///
/// let record = AmericanOptionRecord::from_raw(raw).unwrap();
/// assert_eq!(record.equity, "GOOG");
/// assert_eq!(record.expiry_date.year(), 2025);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmericanOptionRecord {
    /// Settlement currency
    pub currency: Currency,
    /// Holiday-calendar identifier (part of the grouping key)
    pub bank_holidays: BankHolidays,
    /// Business-day convention (part of the grouping key)
    pub business_day_convention: BusinessDayConvention,
    /// Option expiry date
    pub expiry_date: Date,
    /// Equity underlier identifier
    pub equity: String,
    /// Contract amount
    pub contract_amount: f64,
    /// Strike
    pub strike: f64,
    /// Call flag (false means put)
    pub is_call_option: bool,
    /// Settlement lag in business days
    pub settlement_days: u32,
    /// Short-position flag
    pub short_position: bool,
    /// Result-attribution metadata
    pub meta: RecordMeta,
}

impl AmericanOptionRecord {
    /// Validates a raw record and resolves its wire codes.
    ///
    /// # Errors
    ///
    /// - [`RecordError::MissingField`] for an absent expiry triple, empty
    ///   equity, missing numeric field, or empty name
    /// - [`RecordError::Currency`] / [`RecordError::Calendar`] for
    ///   unresolvable wire codes
    /// - [`RecordError::Date`] for an invalid expiry triple
    pub fn from_raw(raw: RawOptionRecord) -> Result<Self, RecordError> {
        let currency = Currency::from_numeric(raw.currency_code)?;
        let bank_holidays = BankHolidays::from_code(raw.bank_holidays_code)?;
        let business_day_convention =
            BusinessDayConvention::from_code(raw.business_day_convention_code)?;

        let (year, month, day) = raw
            .expiry_date
            .ok_or(RecordError::MissingField {
                field: "expiry_date",
            })?;
        let expiry_date = Date::from_ymd(year, month, day)?;

        if raw.equity.is_empty() {
            return Err(RecordError::MissingField { field: "equity" });
        }
        let contract_amount = raw.contract_amount.ok_or(RecordError::MissingField {
            field: "contract_amount",
        })?;
        let strike = raw.strike.ok_or(RecordError::MissingField { field: "strike" })?;
        if raw.name.is_empty() {
            return Err(RecordError::MissingField { field: "name" });
        }

        Ok(Self {
            currency,
            bank_holidays,
            business_day_convention,
            expiry_date,
            equity: raw.equity,
            contract_amount,
            strike,
            is_call_option: raw.is_call_option,
            settlement_days: raw.settlement_days,
            short_position: raw.short_position,
            meta: RecordMeta {
                name: raw.name,
                instrument_type: raw.instrument_type,
            },
        })
    }

    /// Returns the ordered grouping-attribute tuple for this record.
    pub fn grouping_key(&self) -> GroupingKey {
        GroupingKey {
            bank_holidays: self.bank_holidays,
            business_day_convention: self.business_day_convention,
        }
    }

    /// Returns the batch fingerprint for this record.
    pub fn fingerprint(&self) -> Fingerprint {
        self.grouping_key().fingerprint()
    }
}
