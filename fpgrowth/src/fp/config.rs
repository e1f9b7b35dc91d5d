use super::error::{MiningError, MiningResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinerConfig {
    /// Fraction of transactions an item must appear in, in (0, 1].
    pub min_support: f64,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self { min_support: 0.5 }
    }
}

impl MinerConfig {
    pub fn new(min_support: f64) -> Self {
        Self { min_support }
    }

    pub fn with_min_support(mut self, min_support: f64) -> Self {
        self.min_support = min_support;
        self
    }

    pub fn validate(&self) -> MiningResult<()> {
        if self.min_support.is_nan() || self.min_support <= 0.0 || self.min_support > 1.0 {
            return Err(MiningError::InvalidThreshold {
                min_support: self.min_support,
            });
        }
        Ok(())
    }

    /// Resolves the ratio against a dataset size.
    pub fn threshold(&self, num_transactions: usize) -> MiningResult<SupportThreshold> {
        self.validate()?;
        Ok(SupportThreshold {
            ratio: self.min_support,
            count: self.min_support * num_transactions as f64,
        })
    }
}

/// Minimum support expressed as a fractional transaction count.
///
/// The count is never rounded: with 5 transactions and a ratio of 0.5 an
/// item needs 3 occurrences to clear 2.5.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SupportThreshold {
    pub ratio: f64,
    pub count: f64,
}

impl SupportThreshold {
    pub fn is_met(&self, count: usize) -> bool {
        count as f64 >= self.count
    }
}
