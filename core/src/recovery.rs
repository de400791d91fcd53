use math::prelude::{interpolate_constant, Point};
use num_bigint::BigInt;

use crate::error::{RecoveryError, RecoveryResult};
use crate::params::Threshold;
use crate::share::ShareRecord;

/// Recovers the constant term of a degree `k - 1` polynomial from `k` of
/// its `n` declared shares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SecretRecovery {
    threshold: Threshold,
}

impl SecretRecovery {
    /// Create a recovery for the provided threshold/share-count configuration.
    pub fn new(required: usize, total: usize) -> RecoveryResult<Self> {
        Ok(SecretRecovery {
            threshold: Threshold::new(required, total)?,
        })
    }

    pub fn from_threshold(threshold: Threshold) -> Self {
        SecretRecovery { threshold }
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Decode the shares with index `1..=n` and keep the first `k` by index.
    ///
    /// Missing indices are skipped. A share that fails to decode aborts the
    /// selection.
    pub fn select_points(
        &self,
        records: &[ShareRecord],
    ) -> RecoveryResult<Vec<Point>> {
        let total = self.threshold.total() as u64;
        let required = self.threshold.required();

        let mut candidates: Vec<&ShareRecord> = records.iter().collect();
        candidates.sort_by_key(|record| record.index);

        let mut points = Vec::with_capacity(candidates.len());
        for record in candidates {
            if record.index > total {
                tracing::debug!(
                    index = record.index,
                    total,
                    "skipping share beyond declared count"
                );
                continue;
            }
            let point = record.decode()?;
            tracing::debug!(
                index = record.index,
                base = %record.base,
                digits = record.value.len(),
                "decoded share"
            );
            points.push(point);
        }

        if points.len() < required {
            return Err(RecoveryError::InsufficientPoints {
                required,
                available: points.len(),
            });
        }

        points.truncate(required);
        Ok(points)
    }

    /// Recover the constant term from the first `k` decodable shares.
    pub fn recover(&self, records: &[ShareRecord]) -> RecoveryResult<BigInt> {
        let points = self.select_points(records)?;
        let secret = interpolate_constant(&points, self.threshold.required())?;
        tracing::info!(
            shares = points.len(),
            degree = self.threshold.degree(),
            "recovered constant term"
        );
        Ok(secret)
    }
}
