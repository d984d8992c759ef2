//! # batch_market: Reference-Data Batching
//!
//! Market-data layer of the quantbatch workspace. Lets a single batched
//! reference-data query serve many instruments that reference different
//! named volatility surfaces, without per-instrument branching:
//!
//! - [`KeyMask`]: deduplicates an ordered key list into
//!   (unique keys, integer mask) and gathers aligned rows through the mask
//! - [`VolatilityProvider`]: the read-only reference-data interface
//! - [`VolSurfaceMap`]: HashMap-backed in-memory provider
//! - [`BatchedVolSurface`]: per-instrument aligned surface nodes produced
//!   by one provider query plus a mask gather
//!
//! ## Example
//!
//! ```
//! use batch_core::types::{Date, DayCount};
//! use batch_market::{BatchedVolSurface, KeyMask, SurfaceEntry, VolSurfaceMap};
//!
//! let valuation = Date::from_ymd(2024, 1, 2).unwrap();
//! let expiry = Date::from_ymd(2024, 7, 2).unwrap();
//!
//! let mut market = VolSurfaceMap::new(valuation);
//! market.insert(
//!     "GOOG",
//!     SurfaceEntry::new(vec![expiry], vec![100.0], vec![0.25], DayCount::Act365Fixed).unwrap(),
//! );
//! market.insert(
//!     "MSFT",
//!     SurfaceEntry::new(vec![expiry], vec![300.0], vec![0.20], DayCount::Act365Fixed).unwrap(),
//! );
//!
//! let keys = vec!["GOOG".to_string(), "MSFT".to_string(), "GOOG".to_string()];
//! let mask = KeyMask::from_keys(&keys);
//! assert_eq!(mask.mask(), &[0, 1, 0]);
//!
//! let surface = BatchedVolSurface::gather(&market, &mask).unwrap();
//! assert_eq!(surface.len(), 3);
//! assert_eq!(surface.volatilities()[2], vec![0.25]); // third row is GOOG again
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod mask;
pub mod surface;

pub use error::MarketDataError;
pub use mask::KeyMask;
pub use surface::{BatchedVolSurface, SurfaceEntry, SurfaceNodes, VolSurfaceMap, VolatilityProvider};
