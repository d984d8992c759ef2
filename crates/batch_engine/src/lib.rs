//! # batch_engine: Portfolio Batching & Grouping
//!
//! Top layer of the quantbatch workspace. Turns a flat list of
//! heterogeneous American-equity-option records into dense, uniform
//! batches that can be priced against shared reference data without
//! per-instrument branching:
//!
//! - `record/`      - decoder-shaped ingestion into typed records
//! - `fingerprint/` - structural digests of the grouping attributes
//! - `group/`       - field-of-arrays batches, one per fingerprint
//! - `pipeline/`    - per-batch reference-data gathering, rayon fan-out
//! - `config/`      - explicit (currently empty) batching configuration
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            batch_engine (L3)            │
//! │  records → fingerprints → OptionBatch   │
//! │  batches → masks → gathered surfaces    │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │            batch_market (L2)            │
//! │  KeyMask, VolatilityProvider,           │
//! │  BatchedVolSurface                      │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │             batch_core (L1)             │
//! │  Currency, Date, calendars, conventions │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use batch_core::types::{Date, DayCount};
//! use batch_engine::{group_records, vol_surface_for_batch};
//! use batch_engine::{AmericanOptionRecord, RawOptionRecord};
//! use batch_market::{BatchedVolSurface, SurfaceEntry, VolSurfaceMap};
//!
//! // Two US/Following records and one UK/ModifiedFollowing record.
//! let raws = [
//!     (2, 2, "GOOG", "OPT-1"),
//!     (2, 2, "MSFT", "OPT-2"),
//!     (3, 3, "VOD", "OPT-3"),
//! ];
//! let records: Vec<AmericanOptionRecord> = raws
//!     .into_iter()
//!     .map(|(cal, conv, equity, name)| {
//!         AmericanOptionRecord::from_raw(RawOptionRecord {
//!             currency_code: 840,
//!             bank_holidays_code: cal,
//!             business_day_convention_code: conv,
//!             expiry_date: Some((2025, 6, 20)),
//!             equity: equity.to_string(),
//!             contract_amount: Some(1.0),
//!             strike: Some(100.0),
//!             name: name.to_string(),
//!             ..RawOptionRecord::default()
//!         })
//!         .unwrap()
//!     })
//!     .collect();
//!
//! let groups = group_records(&records, None).unwrap();
//! assert_eq!(groups.len(), 2);
//!
//! // One batched surface per group.
//! let expiry = Date::from_ymd(2025, 6, 20).unwrap();
//! let mut market = VolSurfaceMap::new(Date::from_ymd(2024, 1, 2).unwrap());
//! for (key, vol) in [("GOOG", 0.25), ("MSFT", 0.20), ("VOD", 0.30)] {
//!     market.insert(
//!         key,
//!         SurfaceEntry::new(vec![expiry], vec![100.0], vec![vol], DayCount::Act365Fixed).unwrap(),
//!     );
//! }
//! for batch in groups.values() {
//!     let surface: BatchedVolSurface<f64> = vol_surface_for_batch(batch, &market).unwrap();
//!     assert_eq!(surface.len(), batch.len());
//! }
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod fingerprint;
pub mod group;
pub mod pipeline;
pub mod record;

pub use config::BatchConfig;
pub use error::{GroupError, RecordError};
pub use fingerprint::{Fingerprint, GroupingKey, FINGERPRINT_LEN};
pub use group::{group_records, group_refs, OptionBatch};
pub use pipeline::{equity_mask, vol_surface_for_batch, vol_surfaces_for_batches};
pub use record::{AmericanOptionRecord, RawOptionRecord, RecordMeta};
