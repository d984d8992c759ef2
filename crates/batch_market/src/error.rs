//! Market data error types.
//!
//! Structured error handling for reference-data lookups and the
//! mask/gather operations that align batched data to instruments.

use batch_core::types::DayCount;
use thiserror::Error;

/// Reference-data and gather errors.
///
/// # Variants
///
/// - `MissingReferenceData`: no surface data for a requested key; the
///   whole batch containing the key fails
/// - `MixedDayCount`: keys gathered into one surface disagree on the
///   day-count convention
/// - `Misaligned` / `MaskOutOfRange`: gather invariant violations;
///   indicate an implementation bug rather than bad input
/// - `NodeShape`: parallel node arrays with inconsistent lengths
/// - `InvalidVolatility`: non-positive quoted volatility
///
/// # Examples
///
/// ```
/// use batch_market::MarketDataError;
///
/// let err = MarketDataError::MissingReferenceData { key: "GOOG".to_string() };
/// assert_eq!(format!("{}", err), "No reference data for key: GOOG");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// The provider has no entry for a requested key.
    #[error("No reference data for key: {key}")]
    MissingReferenceData {
        /// The key that could not be served
        key: String,
    },

    /// Keys gathered into one surface carry different day counts.
    #[error("Mixed day counts in one gather: expected {expected}, found {found}")]
    MixedDayCount {
        /// Day count of the first gathered key
        expected: DayCount,
        /// The disagreeing day count
        found: DayCount,
    },

    /// Row count does not match the unique-key count of the mask.
    #[error("Gather rows misaligned: got {got} rows, need {need}")]
    Misaligned {
        /// Number of rows supplied
        got: usize,
        /// Number of rows required
        need: usize,
    },

    /// Mask entry indexes past the available rows.
    #[error("Mask index {index} out of range for {len} rows")]
    MaskOutOfRange {
        /// The offending mask entry
        index: usize,
        /// Number of rows available
        len: usize,
    },

    /// Parallel node arrays have inconsistent lengths.
    #[error("Surface nodes misaligned: {field} has {got} entries, need {need}")]
    NodeShape {
        /// Name of the misaligned field
        field: &'static str,
        /// Number of entries supplied
        got: usize,
        /// Number of entries required
        need: usize,
    },

    /// Quoted volatility is not positive.
    #[error("Invalid volatility: {vol}")]
    InvalidVolatility {
        /// The offending value
        vol: f64,
    },
}
