//! Resolved mining parameters.
//!
//! `MiningParams` is the flattened, non-optional view of the mining
//! configuration that the engine works with. Resolution happens once at
//! the boundary; everything downstream takes concrete values.

use affinity_core::config::MiningConfig;
use affinity_core::constants::{
    DEFAULT_FALLBACK_MIN_SUPPORT, DEFAULT_MAX_ITEMSET_SIZE, DEFAULT_MIN_LIFT, DEFAULT_ONLY_PAIRS,
    DEFAULT_PRIMARY_MIN_SUPPORT,
};
use affinity_core::errors::MiningError;

#[derive(Debug, Clone, PartialEq)]
pub struct MiningParams {
    /// Support threshold for the first mining attempt.
    pub primary_min_support: f64,
    /// Lower threshold for the single retry when the first attempt
    /// finds nothing.
    pub fallback_min_support: f64,
    /// Largest itemset size to mine.
    pub max_itemset_size: usize,
    /// Minimum lift a rule must reach to be kept.
    pub min_lift: f64,
    /// Restrict rules to single-item antecedent and consequent.
    pub only_pairs: bool,
}

impl Default for MiningParams {
    fn default() -> Self {
        Self {
            primary_min_support: DEFAULT_PRIMARY_MIN_SUPPORT,
            fallback_min_support: DEFAULT_FALLBACK_MIN_SUPPORT,
            max_itemset_size: DEFAULT_MAX_ITEMSET_SIZE,
            min_lift: DEFAULT_MIN_LIFT,
            only_pairs: DEFAULT_ONLY_PAIRS,
        }
    }
}

impl MiningParams {
    /// Resolve parameters from a mining configuration section, filling
    /// unset fields with defaults.
    pub fn from_config(config: &MiningConfig) -> Self {
        Self {
            primary_min_support: config.effective_primary_min_support(),
            fallback_min_support: config.effective_fallback_min_support(),
            max_itemset_size: config.effective_max_itemset_size(),
            min_lift: config.effective_min_lift(),
            only_pairs: config.effective_only_pairs(),
        }
    }

    /// Check the parameter ranges the engine relies on.
    ///
    /// Thresholds must lie in (0, 1], the fallback threshold must be
    /// strictly below the primary, lift must be non-negative, and the
    /// itemset size cap must be at least 1.
    pub fn validate(&self) -> Result<(), MiningError> {
        if !(self.primary_min_support > 0.0 && self.primary_min_support <= 1.0) {
            return Err(MiningError::InvalidParameter {
                field: "primary_min_support".to_string(),
                message: "must be in (0.0, 1.0]".to_string(),
            });
        }
        if !(self.fallback_min_support > 0.0 && self.fallback_min_support <= 1.0) {
            return Err(MiningError::InvalidParameter {
                field: "fallback_min_support".to_string(),
                message: "must be in (0.0, 1.0]".to_string(),
            });
        }
        if self.fallback_min_support >= self.primary_min_support {
            return Err(MiningError::InvalidParameter {
                field: "fallback_min_support".to_string(),
                message: "must be strictly below primary_min_support".to_string(),
            });
        }
        if self.min_lift < 0.0 {
            return Err(MiningError::InvalidParameter {
                field: "min_lift".to_string(),
                message: "must be non-negative".to_string(),
            });
        }
        if self.max_itemset_size == 0 {
            return Err(MiningError::InvalidParameter {
                field: "max_itemset_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
