//! End-to-end tests for the grouping and reference-data batching
//! pipeline: raw ingestion, fingerprint grouping, mask dedup, and the
//! gathered volatility surface.

use batch_core::calendar::{BankHolidays, BusinessDayConvention};
use batch_core::types::{Date, DayCount};
use batch_engine::{
    equity_mask, group_records, vol_surface_for_batch, vol_surfaces_for_batches,
    AmericanOptionRecord, RawOptionRecord,
};
use batch_market::{BatchedVolSurface, KeyMask, MarketDataError, SurfaceEntry, VolSurfaceMap};

fn raw(calendar_code: u32, convention_code: u32, equity: &str, name: &str) -> RawOptionRecord {
    RawOptionRecord {
        currency_code: 840,
        bank_holidays_code: calendar_code,
        business_day_convention_code: convention_code,
        expiry_date: Some((2025, 6, 20)),
        equity: equity.to_string(),
        contract_amount: Some(1_000_000.0),
        strike: Some(150.0),
        is_call_option: true,
        settlement_days: 2,
        short_position: false,
        name: name.to_string(),
        instrument_type: "AmericanEquityOption".to_string(),
    }
}

fn record(calendar_code: u32, convention_code: u32, equity: &str, name: &str) -> AmericanOptionRecord {
    AmericanOptionRecord::from_raw(raw(calendar_code, convention_code, equity, name)).unwrap()
}

fn market() -> VolSurfaceMap<f64> {
    let near = Date::from_ymd(2025, 3, 20).unwrap();
    let far = Date::from_ymd(2025, 6, 20).unwrap();
    let mut market = VolSurfaceMap::new(Date::from_ymd(2024, 1, 2).unwrap());
    for (key, vol) in [("GOOG", 0.25), ("MSFT", 0.20), ("VOD", 0.30), ("BP", 0.28)] {
        market.insert(
            key,
            SurfaceEntry::new(
                vec![near, far],
                vec![100.0, 102.0],
                vec![vol, vol + 0.01],
                DayCount::Act365Fixed,
            )
            .unwrap(),
        );
    }
    market
}

#[test]
fn two_configurations_produce_two_ordered_batches() {
    // (US, Following) x3 interleaved with (UK, ModifiedFollowing) x2.
    let records = vec![
        record(2, 2, "GOOG", "A"),
        record(3, 3, "VOD", "B"),
        record(2, 2, "MSFT", "C"),
        record(3, 3, "BP", "D"),
        record(2, 2, "GOOG", "E"),
    ];

    let groups = group_records(&records, None).unwrap();
    assert_eq!(groups.len(), 2);

    let us = groups.get(&records[0].fingerprint()).unwrap();
    assert_eq!(us.len(), 3);
    assert_eq!(us.bank_holidays(), BankHolidays::UnitedStates);
    assert_eq!(us.business_day_convention(), BusinessDayConvention::Following);
    assert_eq!(us.equities(), &["GOOG", "MSFT", "GOOG"]);
    let names: Vec<&str> = us.labels().iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["A", "C", "E"]);

    let uk = groups.get(&records[1].fingerprint()).unwrap();
    assert_eq!(uk.len(), 2);
    assert_eq!(uk.equities(), &["VOD", "BP"]);
    assert!(us.is_aligned() && uk.is_aligned());
}

#[test]
fn dedup_and_mask_example() {
    let keys = vec!["GOOG".to_string(), "MSFT".to_string(), "GOOG".to_string()];
    let mask = KeyMask::from_keys(&keys);
    assert_eq!(mask.unique_keys(), &["GOOG", "MSFT"]);
    assert_eq!(mask.mask(), &[0, 1, 0]);
}

#[test]
fn batch_mask_round_trips_through_gathered_surface() {
    let records = vec![
        record(2, 2, "GOOG", "A"),
        record(2, 2, "MSFT", "B"),
        record(2, 2, "GOOG", "C"),
    ];
    let groups = group_records(&records, None).unwrap();
    let batch = groups.values().next().unwrap();

    let mask = equity_mask(batch);
    for (i, equity) in batch.equities().iter().enumerate() {
        assert_eq!(&mask.unique_keys()[mask.mask()[i]], equity);
    }

    let surface = vol_surface_for_batch(batch, &market()).unwrap();
    assert_eq!(surface.len(), 3);
    assert_eq!(surface.valuation_date(), Date::from_ymd(2024, 1, 2).unwrap());

    // GOOG rows (0 and 2) are identical; MSFT row differs.
    assert_eq!(surface.volatilities()[0], vec![0.25, 0.26]);
    assert_eq!(surface.volatilities()[2], surface.volatilities()[0]);
    assert_eq!(surface.volatilities()[1], vec![0.20, 0.21]);
    assert_eq!(surface.strikes()[0], surface.strikes()[1]);

    // Year fractions run from the valuation date, not any instrument.
    let fractions = surface.expiry_year_fractions();
    assert!(fractions[0][0] > 1.0 && fractions[0][0] < fractions[0][1]);
}

#[test]
fn missing_underlier_fails_the_whole_batch() {
    let records = vec![record(2, 2, "GOOG", "A"), record(2, 2, "NOVOL", "B")];
    let groups = group_records(&records, None).unwrap();
    let batch = groups.values().next().unwrap();

    let result: Result<BatchedVolSurface<f64>, _> = vol_surface_for_batch(batch, &market());
    assert_eq!(
        result,
        Err(MarketDataError::MissingReferenceData {
            key: "NOVOL".to_string()
        })
    );
}

#[test]
fn parallel_fan_out_serves_every_batch() {
    let records = vec![
        record(2, 2, "GOOG", "A"),
        record(3, 3, "VOD", "B"),
        record(2, 2, "MSFT", "C"),
        record(3, 3, "BP", "D"),
    ];
    let groups = group_records(&records, None).unwrap();
    let surfaces = vol_surfaces_for_batches::<f64, _>(&groups, &market()).unwrap();

    assert_eq!(surfaces.len(), groups.len());
    for (fingerprint, batch) in &groups {
        assert_eq!(surfaces.get(fingerprint).unwrap().len(), batch.len());
    }
}

#[test]
fn malformed_records_fail_at_ingestion() {
    let mut missing_strike = raw(2, 2, "GOOG", "A");
    missing_strike.strike = None;
    assert!(AmericanOptionRecord::from_raw(missing_strike).is_err());

    let unknown_calendar = raw(9, 2, "GOOG", "A");
    assert!(AmericanOptionRecord::from_raw(unknown_calendar).is_err());
}

#[test]
fn empty_portfolio_is_a_no_op() {
    let groups = group_records(&[], None).unwrap();
    assert!(groups.is_empty());

    let surfaces = vol_surfaces_for_batches::<f64, _>(&groups, &market()).unwrap();
    assert!(surfaces.is_empty());
}
