//! Mining configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the mining subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MiningConfig {
    /// Primary minimum support threshold. Default: 0.01.
    pub primary_min_support: Option<f64>,
    /// Fallback minimum support threshold. Default: 0.005.
    pub fallback_min_support: Option<f64>,
    /// Maximum itemset size mined. Default: 2.
    pub max_itemset_size: Option<usize>,
    /// Minimum lift for a rule to be kept. Default: 1.0.
    pub min_lift: Option<f64>,
    /// Restrict rules to singleton -> singleton pairs. Default: true.
    pub only_pairs: Option<bool>,
}

impl MiningConfig {
    /// Returns the effective primary minimum support, defaulting to 0.01.
    pub fn effective_primary_min_support(&self) -> f64 {
        self.primary_min_support
            .unwrap_or(constants::DEFAULT_PRIMARY_MIN_SUPPORT)
    }

    /// Returns the effective fallback minimum support, defaulting to 0.005.
    pub fn effective_fallback_min_support(&self) -> f64 {
        self.fallback_min_support
            .unwrap_or(constants::DEFAULT_FALLBACK_MIN_SUPPORT)
    }

    /// Returns the effective maximum itemset size, defaulting to 2.
    pub fn effective_max_itemset_size(&self) -> usize {
        self.max_itemset_size
            .unwrap_or(constants::DEFAULT_MAX_ITEMSET_SIZE)
    }

    /// Returns the effective minimum lift, defaulting to 1.0.
    pub fn effective_min_lift(&self) -> f64 {
        self.min_lift.unwrap_or(constants::DEFAULT_MIN_LIFT)
    }

    /// Returns whether rules are restricted to pairs, defaulting to true.
    pub fn effective_only_pairs(&self) -> bool {
        self.only_pairs.unwrap_or(constants::DEFAULT_ONLY_PAIRS)
    }
}
