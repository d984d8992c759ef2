//! Structural fingerprints for batch grouping.
//!
//! Two instruments may share a batch exactly when their non-numeric
//! configuration matches, so the batch key is a digest of that
//! configuration and nothing else. Numeric fields (strike, notional,
//! dates) are excluded by construction: numerically different but
//! structurally identical instruments must land in the same batch.

use std::fmt;

use batch_core::calendar::{BankHolidays, BusinessDayConvention};

/// Width of a [`Fingerprint`] in bytes.
pub const FINGERPRINT_LEN: usize = 16;

/// Domain tag for the grouping-key digest. Versioned so a change to the
/// key layout changes every fingerprint.
const DOMAIN: &[u8] = b"quantbatch.option_grouping_key.v1";

/// Deterministic 128-bit digest of an instrument's grouping attributes.
///
/// Stable across processes and machines for the same logical input, and
/// usable directly as a map key.
///
/// # Examples
///
/// ```
/// use batch_core::calendar::{BankHolidays, BusinessDayConvention};
/// use batch_engine::GroupingKey;
///
/// let key = GroupingKey {
///     bank_holidays: BankHolidays::UnitedStates,
///     business_day_convention: BusinessDayConvention::Following,
/// };
/// assert_eq!(key.fingerprint(), key.fingerprint());
/// assert_eq!(format!("{}", key.fingerprint()).len(), 32); // hex
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint([u8; FINGERPRINT_LEN]);

impl Fingerprint {
    /// Returns the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; FINGERPRINT_LEN] {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    /// Formats as lowercase hex.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self)
    }
}

/// The ordered tuple of attributes that determine batch membership.
///
/// Built explicitly from exactly the attributes that decide whether two
/// records may share a batch; callers cannot accidentally fold numeric
/// fields into the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupingKey {
    /// Holiday-calendar identifier
    pub bank_holidays: BankHolidays,
    /// Business-day convention
    pub business_day_convention: BusinessDayConvention,
}

impl GroupingKey {
    /// Computes the fingerprint of this grouping key.
    ///
    /// The serialisation is injective: a length-prefixed domain tag
    /// followed by the fixed-width wire codes of each attribute in key
    /// order, digested with blake3 and truncated to
    /// [`FINGERPRINT_LEN`] bytes. Pure function, no side effects.
    pub fn fingerprint(&self) -> Fingerprint {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(DOMAIN.len() as u32).to_le_bytes());
        hasher.update(DOMAIN);
        // Attribute order is part of the digest contract.
        hasher.update(&self.bank_holidays.code().to_le_bytes());
        hasher.update(&self.business_day_convention.code().to_le_bytes());

        let digest = hasher.finalize();
        let mut bytes = [0u8; FINGERPRINT_LEN];
        bytes.copy_from_slice(&digest.as_bytes()[..FINGERPRINT_LEN]);
        Fingerprint(bytes)
    }
}
