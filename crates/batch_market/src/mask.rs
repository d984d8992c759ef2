//! Key deduplication and integer-mask gathering.
//!
//! A portfolio batch typically references a handful of distinct
//! underliers many times over. [`KeyMask`] extracts the distinct keys
//! once and remembers, per instrument, which unique key it points at, so
//! a single reference-data query can be fanned back out to all
//! instruments with plain index gathering.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::MarketDataError;

/// Deduplicated keys plus the integer mask mapping each input position
/// to its unique key.
///
/// Invariants:
/// - `unique_keys()` holds the distinct input keys in first-occurrence
///   order
/// - `unique_keys()[mask()[i]] == keys[i]` for every input position `i`
/// - every mask entry is a valid index into any row set aligned with
///   `unique_keys()`
///
/// # Examples
///
/// ```
/// use batch_market::KeyMask;
///
/// let keys = ["GOOG", "MSFT", "GOOG"];
/// let mask = KeyMask::from_keys(&keys);
///
/// assert_eq!(mask.unique_keys(), &["GOOG", "MSFT"]);
/// assert_eq!(mask.mask(), &[0, 1, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMask<K> {
    unique: Vec<K>,
    mask: Vec<usize>,
}

impl<K: Eq + Hash + Clone> KeyMask<K> {
    /// Builds the unique-key list and mask from an ordered key sequence.
    ///
    /// Duplicates are allowed; an empty input yields empty outputs.
    pub fn from_keys(keys: &[K]) -> Self {
        let mut unique = Vec::new();
        let mut mask = Vec::with_capacity(keys.len());
        let mut positions: HashMap<K, usize> = HashMap::new();

        for key in keys {
            let next = unique.len();
            let index = *positions.entry(key.clone()).or_insert(next);
            if index == next {
                unique.push(key.clone());
            }
            mask.push(index);
        }

        Self { unique, mask }
    }
}

impl<K> KeyMask<K> {
    /// Returns the distinct keys in first-occurrence order.
    pub fn unique_keys(&self) -> &[K] {
        &self.unique
    }

    /// Returns the integer mask, one entry per input key.
    pub fn mask(&self) -> &[usize] {
        &self.mask
    }

    /// Returns the number of input keys.
    pub fn len(&self) -> usize {
        self.mask.len()
    }

    /// Returns true if the input key sequence was empty.
    pub fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }

    /// Returns the number of distinct keys.
    pub fn num_unique(&self) -> usize {
        self.unique.len()
    }

    /// Returns true if the input contained no duplicates.
    pub fn is_identity(&self) -> bool {
        self.mask.iter().enumerate().all(|(i, &m)| i == m)
    }

    /// Gathers one row per input position from rows aligned with the
    /// unique keys: `out[i] = rows[mask[i]]`.
    ///
    /// # Errors
    ///
    /// - [`MarketDataError::Misaligned`] if `rows` is not aligned with
    ///   the unique-key list
    /// - [`MarketDataError::MaskOutOfRange`] if a mask entry indexes past
    ///   the rows (unreachable for masks built by [`KeyMask::from_keys`])
    pub fn gather<T: Clone>(&self, rows: &[T]) -> Result<Vec<T>, MarketDataError> {
        if rows.len() != self.unique.len() {
            return Err(MarketDataError::Misaligned {
                got: rows.len(),
                need: self.unique.len(),
            });
        }

        let mut out = Vec::with_capacity(self.mask.len());
        for &index in &self.mask {
            let row = rows.get(index).ok_or(MarketDataError::MaskOutOfRange {
                index,
                len: rows.len(),
            })?;
            out.push(row.clone());
        }
        Ok(out)
    }
}
