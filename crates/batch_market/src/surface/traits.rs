//! Reference-data provider trait.

use batch_core::types::Date;
use num_traits::Float;

use super::nodes::SurfaceNodes;
use crate::error::MarketDataError;

/// Read-only volatility reference-data provider.
///
/// The batching layer issues one query per batch for the distinct keys it
/// needs and re-aligns the answer itself, so implementations are free to
/// return nodes in their own canonical key order.
///
/// # Contract
///
/// - `node_values_for(keys)` returns one [`SurfaceNodes`] entry per
///   distinct requested key, or
///   [`MarketDataError::MissingReferenceData`] naming the first key it
///   cannot serve
/// - queries are side-effect free; concurrent queries for different key
///   sets are safe
///
/// # Example
///
/// ```
/// use batch_core::types::{Date, DayCount};
/// use batch_market::{SurfaceEntry, VolSurfaceMap, VolatilityProvider};
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
/// let nodes = market.node_values_for(&["GOOG".to_string()]).unwrap();
/// assert_eq!(nodes.keys(), &["GOOG"]);
/// ```
pub trait VolatilityProvider<T: Float> {
    /// Returns the valuation date of the market snapshot.
    fn valuation_date(&self) -> Date;

    /// Returns quoted surface nodes for the given keys, in the
    /// provider's own canonical order.
    fn node_values_for(&self, keys: &[String]) -> Result<SurfaceNodes<T>, MarketDataError>;
}
