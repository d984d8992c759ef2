//! Per-instrument aligned volatility surface built by a mask gather.

use batch_core::types::{Date, DayCount};
use num_traits::Float;

use super::traits::VolatilityProvider;
use crate::error::MarketDataError;
use crate::mask::KeyMask;

/// A batched volatility surface aligned to one instrument batch.
///
/// Produced from a single provider query: the provider is asked once for
/// the distinct keys, its answer is re-aligned from the provider's
/// canonical key order, and each instrument's row is then gathered
/// through the integer mask. Row `i` of every field belongs to
/// instrument `i` of the batch.
///
/// The valuation date is carried from the market snapshot, not from any
/// instrument. All gathered keys must agree on the day-count convention;
/// a disagreement fails the whole gather rather than silently picking
/// one.
///
/// # Examples
///
/// ```
/// use batch_core::types::{Date, DayCount};
/// use batch_market::{BatchedVolSurface, KeyMask, SurfaceEntry, VolSurfaceMap};
///
/// let mut market = VolSurfaceMap::new(Date::from_ymd(2024, 1, 2).unwrap());
/// let expiry = Date::from_ymd(2024, 7, 2).unwrap();
/// market.insert(
///     "GOOG",
///     SurfaceEntry::new(vec![expiry], vec![100.0], vec![0.25], DayCount::Act365Fixed).unwrap(),
/// );
///
/// let keys = vec!["GOOG".to_string(), "GOOG".to_string()];
/// let mask = KeyMask::from_keys(&keys);
/// let surface = BatchedVolSurface::gather(&market, &mask).unwrap();
///
/// assert_eq!(surface.len(), 2);
/// assert_eq!(surface.strikes()[0], surface.strikes()[1]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BatchedVolSurface<T> {
    valuation_date: Date,
    expiries: Vec<Vec<Date>>,
    strikes: Vec<Vec<T>>,
    volatilities: Vec<Vec<T>>,
    day_count: DayCount,
}

impl<T: Float> BatchedVolSurface<T> {
    /// Gathers a batched surface from a provider through a key mask.
    ///
    /// # Errors
    ///
    /// - [`MarketDataError::MissingReferenceData`] if the provider cannot
    ///   serve a key, or omits one from its answer
    /// - [`MarketDataError::MixedDayCount`] if the gathered keys disagree
    ///   on the day-count convention
    /// - [`MarketDataError::Misaligned`] / [`MarketDataError::MaskOutOfRange`]
    ///   on gather invariant violations (implementation bugs)
    pub fn gather<P>(provider: &P, mask: &KeyMask<String>) -> Result<Self, MarketDataError>
    where
        P: VolatilityProvider<T> + ?Sized,
    {
        let valuation_date = provider.valuation_date();

        if mask.is_empty() {
            return Ok(Self {
                valuation_date,
                expiries: Vec::new(),
                strikes: Vec::new(),
                volatilities: Vec::new(),
                day_count: DayCount::default(),
            });
        }

        let nodes = provider.node_values_for(mask.unique_keys())?;

        // Re-align the answer to unique-key order; the provider's own
        // canonical order is not trusted.
        let mut aligned = Vec::with_capacity(mask.num_unique());
        for key in mask.unique_keys() {
            let entry = nodes
                .entry(key)
                .ok_or_else(|| MarketDataError::MissingReferenceData { key: key.clone() })?;
            aligned.push(entry);
        }

        let day_count = aligned[0].day_count();
        for entry in &aligned {
            if entry.day_count() != day_count {
                return Err(MarketDataError::MixedDayCount {
                    expected: day_count,
                    found: entry.day_count(),
                });
            }
        }

        let expiry_rows: Vec<Vec<Date>> = aligned.iter().map(|e| e.expiries().to_vec()).collect();
        let strike_rows: Vec<Vec<T>> = aligned.iter().map(|e| e.strikes().to_vec()).collect();
        let vol_rows: Vec<Vec<T>> = aligned.iter().map(|e| e.volatilities().to_vec()).collect();

        Ok(Self {
            valuation_date,
            expiries: mask.gather(&expiry_rows)?,
            strikes: mask.gather(&strike_rows)?,
            volatilities: mask.gather(&vol_rows)?,
            day_count,
        })
    }

    /// Returns the number of instrument rows.
    pub fn len(&self) -> usize {
        self.expiries.len()
    }

    /// Returns true if the surface holds no instrument rows.
    pub fn is_empty(&self) -> bool {
        self.expiries.is_empty()
    }

    /// Returns the valuation date of the market snapshot.
    pub fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    /// Returns the day-count convention shared by all gathered keys.
    pub fn day_count(&self) -> DayCount {
        self.day_count
    }

    /// Returns the per-instrument node expiry rows.
    pub fn expiries(&self) -> &[Vec<Date>] {
        &self.expiries
    }

    /// Returns the per-instrument node strike rows.
    pub fn strikes(&self) -> &[Vec<T>] {
        &self.strikes
    }

    /// Returns the per-instrument node volatility rows.
    pub fn volatilities(&self) -> &[Vec<T>] {
        &self.volatilities
    }

    /// Converts node expiries to year fractions from the valuation date,
    /// using the surface's day-count convention.
    pub fn expiry_year_fractions(&self) -> Vec<Vec<T>> {
        self.expiries
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&expiry| {
                        self.day_count
                            .year_fraction_generic(self.valuation_date, expiry)
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::map::VolSurfaceMap;
    use crate::surface::nodes::SurfaceEntry;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn entry(strike: f64, vol: f64, day_count: DayCount) -> SurfaceEntry<f64> {
        SurfaceEntry::new(
            vec![date(2024, 7, 2), date(2025, 7, 2)],
            vec![strike, strike * 1.05],
            vec![vol, vol + 0.01],
            day_count,
        )
        .unwrap()
    }

    fn sample_market() -> VolSurfaceMap<f64> {
        let mut market = VolSurfaceMap::new(date(2024, 1, 2));
        market.insert("GOOG", entry(100.0, 0.25, DayCount::Act365Fixed));
        market.insert("MSFT", entry(300.0, 0.20, DayCount::Act365Fixed));
        market
    }

    #[test]
    fn test_gather_aligns_rows_to_instruments() {
        let market = sample_market();
        let keys = vec![
            "GOOG".to_string(),
            "MSFT".to_string(),
            "GOOG".to_string(),
        ];
        let mask = KeyMask::from_keys(&keys);
        let surface = BatchedVolSurface::gather(&market, &mask).unwrap();

        assert_eq!(surface.len(), 3);
        assert_eq!(surface.valuation_date(), date(2024, 1, 2));
        assert_eq!(surface.day_count(), DayCount::Act365Fixed);

        // Rows 0 and 2 are GOOG, row 1 is MSFT.
        assert_eq!(surface.strikes()[0], vec![100.0, 105.0]);
        assert_eq!(surface.strikes()[1], vec![300.0, 315.0]);
        assert_eq!(surface.strikes()[2], surface.strikes()[0]);
        assert_eq!(surface.volatilities()[1], vec![0.20, 0.21]);
        assert_eq!(surface.expiries()[0], surface.expiries()[1]);
    }

    #[test]
    fn test_gather_realigns_provider_canonical_order() {
        // "ZZZZ" sorts after "AAAA", so the store answers in the
        // opposite of first-occurrence order.
        let mut market = VolSurfaceMap::new(date(2024, 1, 2));
        market.insert("ZZZZ", entry(50.0, 0.30, DayCount::Act365Fixed));
        market.insert("AAAA", entry(10.0, 0.40, DayCount::Act365Fixed));

        let keys = vec!["ZZZZ".to_string(), "AAAA".to_string()];
        let mask = KeyMask::from_keys(&keys);
        let surface = BatchedVolSurface::gather(&market, &mask).unwrap();

        assert_eq!(surface.strikes()[0], vec![50.0, 52.5]);
        assert_eq!(surface.strikes()[1], vec![10.0, 10.5]);
    }

    #[test]
    fn test_gather_missing_key_fails_whole_batch() {
        let market = sample_market();
        let keys = vec!["GOOG".to_string(), "AAPL".to_string()];
        let mask = KeyMask::from_keys(&keys);
        let result = BatchedVolSurface::gather(&market, &mask);
        assert_eq!(
            result,
            Err(MarketDataError::MissingReferenceData {
                key: "AAPL".to_string()
            })
        );
    }

    #[test]
    fn test_gather_mixed_day_count_fails() {
        let mut market = VolSurfaceMap::new(date(2024, 1, 2));
        market.insert("GOOG", entry(100.0, 0.25, DayCount::Act365Fixed));
        market.insert("MSFT", entry(300.0, 0.20, DayCount::Act360));

        let keys = vec!["GOOG".to_string(), "MSFT".to_string()];
        let mask = KeyMask::from_keys(&keys);
        let result = BatchedVolSurface::gather(&market, &mask);
        assert_eq!(
            result,
            Err(MarketDataError::MixedDayCount {
                expected: DayCount::Act365Fixed,
                found: DayCount::Act360
            })
        );
    }

    #[test]
    fn test_gather_empty_mask() {
        let market = sample_market();
        let mask = KeyMask::<String>::from_keys(&[]);
        let surface = BatchedVolSurface::gather(&market, &mask).unwrap();
        assert!(surface.is_empty());
        assert_eq!(surface.valuation_date(), date(2024, 1, 2));
    }

    #[test]
    fn test_expiry_year_fractions() {
        let market = sample_market();
        let keys = vec!["GOOG".to_string()];
        let mask = KeyMask::from_keys(&keys);
        let surface = BatchedVolSurface::gather(&market, &mask).unwrap();

        let fractions = surface.expiry_year_fractions();
        assert_eq!(fractions.len(), 1);
        // 2024-01-02 to 2024-07-02 is 182 days; to 2025-07-02 is 547 days.
        assert_relative_eq!(fractions[0][0], 182.0 / 365.0, epsilon = 1e-12);
        assert_relative_eq!(fractions[0][1], 547.0 / 365.0, epsilon = 1e-12);
    }
}
