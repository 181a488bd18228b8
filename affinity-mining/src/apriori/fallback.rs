//! Adaptive support threshold: one retry at a lower threshold.
//!
//! Sparse datasets can come up empty at the primary support level. Rather
//! than failing, mining retries exactly once at the fallback threshold.
//! Empty at both thresholds is a valid terminal state, reported as an
//! outcome rather than an error.

use crate::apriori::itemset::FrequentItemsets;
use crate::apriori::miner::{mine, LevelStats};
use crate::encoder::TransactionMatrix;
use crate::params::MiningParams;

/// Mining output annotated with the threshold that produced it.
#[derive(Debug, Clone)]
pub struct ThresholdOutcome {
    pub itemsets: FrequentItemsets,
    pub level_stats: Vec<LevelStats>,
    /// The support threshold of the attempt that was kept.
    pub threshold_used: f64,
    /// True when the primary attempt found nothing and the retry ran.
    pub fallback_triggered: bool,
}

/// Mine at the primary threshold, retrying once at the fallback threshold
/// when the first attempt yields no frequent itemsets.
///
/// The kept attempt's level stats replace the discarded ones, so the
/// outcome always describes a single mining pass.
pub fn mine_with_fallback(matrix: &TransactionMatrix, params: &MiningParams) -> ThresholdOutcome {
    let primary = mine(matrix, params.primary_min_support, params.max_itemset_size);
    if !primary.itemsets.is_empty() {
        return ThresholdOutcome {
            itemsets: primary.itemsets,
            level_stats: primary.level_stats,
            threshold_used: params.primary_min_support,
            fallback_triggered: false,
        };
    }

    tracing::warn!(
        primary_support = params.primary_min_support,
        fallback_support = params.fallback_min_support,
        "no frequent itemsets at primary support, retrying at fallback"
    );

    let retry = mine(matrix, params.fallback_min_support, params.max_itemset_size);
    ThresholdOutcome {
        itemsets: retry.itemsets,
        level_stats: retry.level_stats,
        threshold_used: params.fallback_min_support,
        fallback_triggered: true,
    }
}
