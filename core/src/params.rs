use serde::{Deserialize, Serialize};

use crate::error::{RecoveryError, RecoveryResult};

/// Validate the relation between threshold and share counts: `1 <= k <= n`.
pub fn validate_threshold_config(required: usize, total: usize) -> bool {
    (1..=total).contains(&required)
}

/// The `keys` section as written: `{ "n": .., "k": .. }`, not yet checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct ThresholdKeys {
    pub n: usize,
    pub k: usize,
}

/// Declared share counts: `n` shares exist and any `k` of them determine
/// the polynomial. Always satisfies `1 <= k <= n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ThresholdKeys")]
pub struct Threshold {
    #[serde(rename = "n")]
    total: usize,
    #[serde(rename = "k")]
    required: usize,
}

impl Threshold {
    pub fn new(required: usize, total: usize) -> RecoveryResult<Self> {
        if !validate_threshold_config(required, total) {
            return Err(RecoveryError::InvalidThreshold(required, total));
        }
        Ok(Threshold { total, required })
    }

    /// Number of declared shares, `n`.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of points consumed by interpolation, `k`.
    #[inline]
    pub fn required(&self) -> usize {
        self.required
    }

    /// Degree of the polynomial the shares were sampled from.
    pub fn degree(&self) -> usize {
        self.required - 1
    }
}

impl TryFrom<ThresholdKeys> for Threshold {
    type Error = RecoveryError;

    fn try_from(keys: ThresholdKeys) -> RecoveryResult<Self> {
        Threshold::new(keys.k, keys.n)
    }
}
