//! Error types for record ingestion and grouping.

use thiserror::Error;

use batch_core::types::{CalendarError, CurrencyError, DateError};

use crate::fingerprint::Fingerprint;

/// Record ingestion errors.
///
/// Raised while converting a decoder-shaped raw record into a typed
/// [`crate::record::AmericanOptionRecord`]. Ingestion fails immediately;
/// a malformed record is never deferred into a batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A required field is absent or empty.
    #[error("Record is missing required field: {field}")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },

    /// Currency code could not be resolved.
    #[error(transparent)]
    Currency(#[from] CurrencyError),

    /// Calendar or convention code could not be resolved.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Expiry date components are invalid.
    #[error(transparent)]
    Date(#[from] DateError),
}

/// Grouping errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    /// A record's grouping attributes disagree with the values captured
    /// by its batch. A digest match must imply matching attributes, so
    /// this is either a fingerprint collision or a violated
    /// constant-within-group assumption; both fail loudly.
    #[error("Fingerprint collision in batch {fingerprint}: {field} differs from the captured group value")]
    GroupAttributeMismatch {
        /// The batch fingerprint
        fingerprint: Fingerprint,
        /// The disagreeing attribute
        field: &'static str,
    },
}
