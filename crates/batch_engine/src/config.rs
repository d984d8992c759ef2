//! Batching configuration.

/// Configuration for record grouping and batching.
///
/// Threaded through [`crate::group::group_records`] by reference so the
/// grouping key can grow new dimensions (e.g., exercise style or extra
/// conventions) without changing call sites. No configuration keys are
/// consumed yet.
///
/// # Examples
///
/// ```
/// use batch_engine::BatchConfig;
///
/// let config = BatchConfig::default();
/// assert_eq!(config, BatchConfig::default());
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchConfig {}
