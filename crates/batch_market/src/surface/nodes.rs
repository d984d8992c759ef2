//! Quoted volatility-surface nodes.

use batch_core::types::{Date, DayCount};
use num_traits::Float;

use crate::error::MarketDataError;

/// One underlier's quoted volatility nodes.
///
/// Holds the parallel (expiry, strike, volatility) node arrays for a
/// single reference-data key, together with the day-count convention the
/// quotes were marked under.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Examples
///
/// ```
/// use batch_core::types::{Date, DayCount};
/// use batch_market::SurfaceEntry;
///
/// let expiry = Date::from_ymd(2024, 7, 2).unwrap();
/// let entry = SurfaceEntry::new(
///     vec![expiry],
///     vec![100.0],
///     vec![0.25],
///     DayCount::Act365Fixed,
/// ).unwrap();
/// assert_eq!(entry.node_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceEntry<T> {
    expiries: Vec<Date>,
    strikes: Vec<T>,
    volatilities: Vec<T>,
    day_count: DayCount,
}

impl<T: Float> SurfaceEntry<T> {
    /// Constructs a surface entry from parallel node arrays.
    ///
    /// # Errors
    ///
    /// - [`MarketDataError::NodeShape`] if the arrays disagree in length
    /// - [`MarketDataError::InvalidVolatility`] if a quoted volatility is
    ///   not positive
    pub fn new(
        expiries: Vec<Date>,
        strikes: Vec<T>,
        volatilities: Vec<T>,
        day_count: DayCount,
    ) -> Result<Self, MarketDataError> {
        if strikes.len() != expiries.len() {
            return Err(MarketDataError::NodeShape {
                field: "strikes",
                got: strikes.len(),
                need: expiries.len(),
            });
        }
        if volatilities.len() != expiries.len() {
            return Err(MarketDataError::NodeShape {
                field: "volatilities",
                got: volatilities.len(),
                need: expiries.len(),
            });
        }
        for &vol in &volatilities {
            if vol <= T::zero() {
                return Err(MarketDataError::InvalidVolatility {
                    vol: vol.to_f64().unwrap_or(0.0),
                });
            }
        }

        Ok(Self {
            expiries,
            strikes,
            volatilities,
            day_count,
        })
    }

    /// Returns the node expiry dates.
    pub fn expiries(&self) -> &[Date] {
        &self.expiries
    }

    /// Returns the node strikes.
    pub fn strikes(&self) -> &[T] {
        &self.strikes
    }

    /// Returns the node volatilities.
    pub fn volatilities(&self) -> &[T] {
        &self.volatilities
    }

    /// Returns the day-count convention of the quotes.
    pub fn day_count(&self) -> DayCount {
        self.day_count
    }

    /// Returns the number of quoted nodes.
    pub fn node_count(&self) -> usize {
        self.expiries.len()
    }
}

/// A provider's answer for a set of reference-data keys.
///
/// Keys appear in the provider's own canonical order, which need not
/// match the requested order; consumers re-align by key before
/// gathering.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceNodes<T> {
    keys: Vec<String>,
    entries: Vec<SurfaceEntry<T>>,
}

impl<T: Float> SurfaceNodes<T> {
    /// Constructs a node set from keys and their aligned entries.
    ///
    /// # Errors
    ///
    /// [`MarketDataError::NodeShape`] if `entries` is not aligned with
    /// `keys`.
    pub fn new(keys: Vec<String>, entries: Vec<SurfaceEntry<T>>) -> Result<Self, MarketDataError> {
        if entries.len() != keys.len() {
            return Err(MarketDataError::NodeShape {
                field: "entries",
                got: entries.len(),
                need: keys.len(),
            });
        }
        Ok(Self { keys, entries })
    }

    /// Returns the keys in the provider's canonical order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Returns the entries aligned with [`SurfaceNodes::keys`].
    pub fn entries(&self) -> &[SurfaceEntry<T>] {
        &self.entries
    }

    /// Looks up the entry for a key, independent of answer order.
    pub fn entry(&self, key: &str) -> Option<&SurfaceEntry<T>> {
        self.keys
            .iter()
            .position(|k| k == key)
            .map(|i| &self.entries[i])
    }
}
