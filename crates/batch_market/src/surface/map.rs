//! HashMap-backed in-memory volatility provider.

use std::collections::HashMap;

use batch_core::types::Date;
use num_traits::Float;

use super::nodes::{SurfaceEntry, SurfaceNodes};
use super::traits::VolatilityProvider;
use crate::error::MarketDataError;

/// In-memory container of named volatility surfaces.
///
/// Stores one [`SurfaceEntry`] per reference-data key against a single
/// valuation date, and serves [`VolatilityProvider`] queries from it.
/// Answers are produced in sorted key order, this store's canonical
/// order, regardless of the requested order.
///
/// # Example
///
/// ```
/// use batch_core::types::{Date, DayCount};
/// use batch_market::{SurfaceEntry, VolSurfaceMap};
///
/// let mut market = VolSurfaceMap::new(Date::from_ymd(2024, 1, 2).unwrap());
/// market.insert(
///     "GOOG",
///     SurfaceEntry::new(
///         vec![Date::from_ymd(2024, 7, 2).unwrap()],
///         vec![100.0],
///         vec![0.25],
///         DayCount::Act365Fixed,
///     ).unwrap(),
/// );
///
/// assert!(market.contains("GOOG"));
/// assert_eq!(market.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct VolSurfaceMap<T> {
    valuation_date: Date,
    entries: HashMap<String, SurfaceEntry<T>>,
}

impl<T: Float> VolSurfaceMap<T> {
    /// Creates an empty surface map for the given valuation date.
    pub fn new(valuation_date: Date) -> Self {
        Self {
            valuation_date,
            entries: HashMap::new(),
        }
    }

    /// Inserts (or replaces) the surface entry for a key.
    pub fn insert(&mut self, key: impl Into<String>, entry: SurfaceEntry<T>) {
        self.entries.insert(key.into(), entry);
    }

    /// Returns true if a surface is stored for the key.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of stored surfaces.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no surfaces are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Float> VolatilityProvider<T> for VolSurfaceMap<T> {
    fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    fn node_values_for(&self, keys: &[String]) -> Result<SurfaceNodes<T>, MarketDataError> {
        // Canonical order: sorted, deduplicated. Callers re-align by key.
        let mut requested: Vec<&String> = keys.iter().collect();
        requested.sort();
        requested.dedup();

        let mut out_keys = Vec::with_capacity(requested.len());
        let mut out_entries = Vec::with_capacity(requested.len());
        for key in requested {
            let entry = self
                .entries
                .get(key)
                .ok_or_else(|| MarketDataError::MissingReferenceData { key: key.clone() })?;
            out_keys.push(key.clone());
            out_entries.push(entry.clone());
        }

        SurfaceNodes::new(out_keys, out_entries)
    }
}
