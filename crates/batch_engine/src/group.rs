//! Fingerprint grouping into field-of-arrays batches.
//!
//! A single pass over the record list partitions it into one
//! [`OptionBatch`] per fingerprint. Within a batch, every per-record
//! field lives in its own vector, appended in input order, so index `i`
//! of every vector refers to the same source record and the whole batch
//! can be handed to vectorised numeric code as-is.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;

use batch_core::calendar::{BankHolidays, BusinessDayConvention, HolidayCalendar};
use batch_core::types::{Currency, Date};

use crate::config::BatchConfig;
use crate::error::GroupError;
use crate::fingerprint::Fingerprint;
use crate::record::{AmericanOptionRecord, RecordMeta};

/// A field-of-arrays batch of records sharing one fingerprint.
///
/// Group-level attributes (currency, resolved calendar, convention) are
/// captured from the first record; per-record fields are parallel
/// vectors in insertion order.
///
/// # Examples
///
/// ```
/// use batch_engine::{group_records, AmericanOptionRecord, RawOptionRecord};
///
/// let raw = RawOptionRecord {
///     currency_code: 840,
///     bank_holidays_code: 2,
///     business_day_convention_code: 2,
///     expiry_date: Some((2025, 6, 20)),
///     equity: "GOOG".to_string(),
///     contract_amount: Some(1.0),
///     strike: Some(150.0),
///     name: "OPT-1".to_string(),
///     ..RawOptionRecord::default()
/// };
/// let record = AmericanOptionRecord::from_raw(raw).unwrap();
///
/// let groups = group_records(std::slice::from_ref(&record), None).unwrap();
/// let batch = groups.get(&record.fingerprint()).unwrap();
/// assert_eq!(batch.len(), 1);
/// assert_eq!(batch.strikes(), &[150.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OptionBatch {
    currency: Currency,
    bank_holidays: BankHolidays,
    calendar: HolidayCalendar,
    business_day_convention: BusinessDayConvention,
    short_positions: Vec<bool>,
    expiry_dates: Vec<Date>,
    equities: Vec<String>,
    contract_amounts: Vec<f64>,
    strikes: Vec<f64>,
    is_call_options: Vec<bool>,
    settlement_days: Vec<u32>,
    labels: Vec<RecordMeta>,
}

impl OptionBatch {
    /// Creates a batch seeded with one record, capturing its group-level
    /// attributes and resolving its calendar.
    fn seeded(record: &AmericanOptionRecord) -> Self {
        let mut batch = Self {
            currency: record.currency,
            bank_holidays: record.bank_holidays,
            calendar: record.bank_holidays.resolve(),
            business_day_convention: record.business_day_convention,
            short_positions: Vec::new(),
            expiry_dates: Vec::new(),
            equities: Vec::new(),
            contract_amounts: Vec::new(),
            strikes: Vec::new(),
            is_call_options: Vec::new(),
            settlement_days: Vec::new(),
            labels: Vec::new(),
        };
        batch.push_fields(record);
        batch
    }

    /// Appends a record after checking it against the captured
    /// group-level attributes.
    ///
    /// A digest match must imply attribute equality; any disagreement is
    /// surfaced rather than silently keeping the first value.
    fn append(
        &mut self,
        record: &AmericanOptionRecord,
        fingerprint: Fingerprint,
    ) -> Result<(), GroupError> {
        if record.bank_holidays != self.bank_holidays {
            return Err(GroupError::GroupAttributeMismatch {
                fingerprint,
                field: "bank_holidays",
            });
        }
        if record.business_day_convention != self.business_day_convention {
            return Err(GroupError::GroupAttributeMismatch {
                fingerprint,
                field: "business_day_convention",
            });
        }
        if record.currency != self.currency {
            return Err(GroupError::GroupAttributeMismatch {
                fingerprint,
                field: "currency",
            });
        }
        self.push_fields(record);
        Ok(())
    }

    fn push_fields(&mut self, record: &AmericanOptionRecord) {
        self.short_positions.push(record.short_position);
        self.expiry_dates.push(record.expiry_date);
        self.equities.push(record.equity.clone());
        self.contract_amounts.push(record.contract_amount);
        self.strikes.push(record.strike);
        self.is_call_options.push(record.is_call_option);
        self.settlement_days.push(record.settlement_days);
        self.labels.push(record.meta.clone());
    }

    /// Returns the shared settlement currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the shared holiday-calendar identifier.
    pub fn bank_holidays(&self) -> BankHolidays {
        self.bank_holidays
    }

    /// Returns the shared resolved holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Returns the shared business-day convention.
    pub fn business_day_convention(&self) -> BusinessDayConvention {
        self.business_day_convention
    }

    /// Returns the number of records in the batch.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if the batch holds no records.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the short-position flags in insertion order.
    pub fn short_positions(&self) -> &[bool] {
        &self.short_positions
    }

    /// Returns the expiry dates in insertion order.
    pub fn expiry_dates(&self) -> &[Date] {
        &self.expiry_dates
    }

    /// Returns the equity underlier identifiers in insertion order.
    pub fn equities(&self) -> &[String] {
        &self.equities
    }

    /// Returns the contract amounts in insertion order.
    pub fn contract_amounts(&self) -> &[f64] {
        &self.contract_amounts
    }

    /// Returns the strikes in insertion order.
    pub fn strikes(&self) -> &[f64] {
        &self.strikes
    }

    /// Returns the call flags in insertion order.
    pub fn is_call_options(&self) -> &[bool] {
        &self.is_call_options
    }

    /// Returns the settlement lags in insertion order.
    pub fn settlement_days(&self) -> &[u32] {
        &self.settlement_days
    }

    /// Returns the result-attribution labels in insertion order.
    pub fn labels(&self) -> &[RecordMeta] {
        &self.labels
    }

    /// Returns true if every per-record vector has the same length.
    ///
    /// Holds by construction; a false return indicates an implementation
    /// bug, not bad input.
    pub fn is_aligned(&self) -> bool {
        let n = self.labels.len();
        self.short_positions.len() == n
            && self.expiry_dates.len() == n
            && self.equities.len() == n
            && self.contract_amounts.len() == n
            && self.strikes.len() == n
            && self.is_call_options.len() == n
            && self.settlement_days.len() == n
    }
}

/// Partitions records into field-of-arrays batches keyed by fingerprint.
///
/// A single sequential pass: the first record of each fingerprint
/// captures the group-level attributes and every later record is
/// appended in input order, so intra-batch order equals input order.
/// Empty input yields an empty map.
///
/// The `config` parameter is accepted for forward compatibility with
/// grouping-key extensions; no keys are consumed yet.
///
/// # Errors
///
/// [`GroupError::GroupAttributeMismatch`] if a record's attributes
/// disagree with its batch's captured values.
pub fn group_records(
    records: &[AmericanOptionRecord],
    _config: Option<&BatchConfig>,
) -> Result<HashMap<Fingerprint, OptionBatch>, GroupError> {
    let mut groups: HashMap<Fingerprint, OptionBatch> = HashMap::new();

    for record in records {
        let fingerprint = record.fingerprint();
        match groups.entry(fingerprint) {
            Entry::Occupied(mut occupied) => occupied.get_mut().append(record, fingerprint)?,
            Entry::Vacant(vacant) => {
                vacant.insert(OptionBatch::seeded(record));
            }
        }
    }

    debug!(
        records = records.len(),
        groups = groups.len(),
        "grouped option records"
    );
    Ok(groups)
}

/// Partitions records into reference lists keyed by fingerprint.
///
/// Lighter companion to [`group_records`] for callers that need the raw
/// records of each equivalence class rather than the field-of-arrays
/// layout. Intra-group order equals input order.
pub fn group_refs(
    records: &[AmericanOptionRecord],
) -> HashMap<Fingerprint, Vec<&AmericanOptionRecord>> {
    let mut groups: HashMap<Fingerprint, Vec<&AmericanOptionRecord>> = HashMap::new();
    for record in records {
        groups.entry(record.fingerprint()).or_default().push(record);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RawOptionRecord;

    fn record(
        calendar_code: u32,
        convention_code: u32,
        equity: &str,
        name: &str,
    ) -> AmericanOptionRecord {
        AmericanOptionRecord::from_raw(RawOptionRecord {
            currency_code: 840,
            bank_holidays_code: calendar_code,
            business_day_convention_code: convention_code,
            expiry_date: Some((2025, 6, 20)),
            equity: equity.to_string(),
            contract_amount: Some(1_000_000.0),
            strike: Some(150.0),
            name: name.to_string(),
            instrument_type: "AmericanEquityOption".to_string(),
            ..RawOptionRecord::default()
        })
        .unwrap()
    }

    #[test]
    fn test_empty_input_yields_empty_map() {
        let groups = group_records(&[], None).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_two_configs_two_batches() {
        // (US, Following) x3 and (UK, ModifiedFollowing) x2
        let records = vec![
            record(2, 2, "GOOG", "A"),
            record(3, 3, "VOD", "B"),
            record(2, 2, "MSFT", "C"),
            record(2, 2, "GOOG", "D"),
            record(3, 3, "BP", "E"),
        ];
        let groups = group_records(&records, None).unwrap();
        assert_eq!(groups.len(), 2);

        let us = groups.get(&records[0].fingerprint()).unwrap();
        assert_eq!(us.len(), 3);
        assert_eq!(us.equities(), &["GOOG", "MSFT", "GOOG"]);
        assert_eq!(us.currency(), Currency::USD);
        assert_eq!(us.bank_holidays(), BankHolidays::UnitedStates);
        assert_eq!(
            us.business_day_convention(),
            BusinessDayConvention::Following
        );
        assert_eq!(us.calendar(), &BankHolidays::UnitedStates.resolve());

        let uk = groups.get(&records[1].fingerprint()).unwrap();
        assert_eq!(uk.len(), 2);
        assert_eq!(uk.equities(), &["VOD", "BP"]);
    }

    #[test]
    fn test_batch_arrays_stay_aligned() {
        let records = vec![
            record(2, 2, "GOOG", "A"),
            record(2, 2, "MSFT", "B"),
            record(2, 2, "AAPL", "C"),
        ];
        let groups = group_records(&records, None).unwrap();
        let batch = groups.values().next().unwrap();

        assert!(batch.is_aligned());
        // Index i of every array refers to the same source record; the
        // unique names act as markers.
        for (i, label) in batch.labels().iter().enumerate() {
            let source = records.iter().find(|r| r.meta.name == label.name).unwrap();
            assert_eq!(batch.equities()[i], source.equity);
            assert_eq!(batch.strikes()[i], source.strike);
            assert_eq!(batch.expiry_dates()[i], source.expiry_date);
            assert_eq!(batch.settlement_days()[i], source.settlement_days);
            assert_eq!(batch.is_call_options()[i], source.is_call_option);
            assert_eq!(batch.short_positions()[i], source.short_position);
            assert_eq!(batch.contract_amounts()[i], source.contract_amount);
        }
    }

    #[test]
    fn test_order_preserved_under_interleaving_permutation() {
        let records = vec![
            record(2, 2, "GOOG", "A"),
            record(3, 3, "VOD", "B"),
            record(2, 2, "MSFT", "C"),
            record(3, 3, "BP", "D"),
        ];
        // Permute across fingerprints but keep per-fingerprint order.
        let permuted = vec![
            records[1].clone(),
            records[0].clone(),
            records[2].clone(),
            records[3].clone(),
        ];

        let groups = group_records(&records, None).unwrap();
        let groups_permuted = group_records(&permuted, None).unwrap();

        for (fingerprint, batch) in &groups {
            let other = groups_permuted.get(fingerprint).unwrap();
            assert_eq!(batch.equities(), other.equities());
            assert_eq!(batch.strikes(), other.strikes());
            assert_eq!(batch.labels(), other.labels());
        }
    }

    #[test]
    fn test_currency_mismatch_in_bucket_fails_loudly() {
        let usd = record(2, 2, "GOOG", "A");
        let mut eur = record(2, 2, "SAP", "B");
        eur.currency = Currency::EUR;

        let result = group_records(&[usd.clone(), eur], None);
        assert_eq!(
            result,
            Err(GroupError::GroupAttributeMismatch {
                fingerprint: usd.fingerprint(),
                field: "currency",
            })
        );
    }

    #[test]
    fn test_group_refs_partitions_in_order() {
        let records = vec![
            record(2, 2, "GOOG", "A"),
            record(3, 3, "VOD", "B"),
            record(2, 2, "MSFT", "C"),
        ];
        let groups = group_refs(&records);
        assert_eq!(groups.len(), 2);

        let us = groups.get(&records[0].fingerprint()).unwrap();
        assert_eq!(us.len(), 2);
        assert_eq!(us[0].meta.name, "A");
        assert_eq!(us[1].meta.name, "C");
    }

    #[test]
    fn test_config_parameter_is_inert() {
        let records = vec![record(2, 2, "GOOG", "A")];
        let config = BatchConfig::default();
        let with_config = group_records(&records, Some(&config)).unwrap();
        let without = group_records(&records, None).unwrap();
        assert_eq!(with_config.len(), without.len());
    }
}
