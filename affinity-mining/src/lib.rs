//! affinity-mining: Frequent itemset and association rule engine
//!
//! The pipeline stages, each usable on its own:
//! - Encoder: raw label transactions into a packed boolean matrix
//! - Apriori: level-wise mining with prefix join and subset pruning
//! - Fallback: one retry at a lower support threshold when a run comes
//!   up empty
//! - Rules: antecedent/consequent enumeration with support, confidence
//!   and lift
//! - Ranking: stable lift-descending order plus the executive summary
//! - Pipeline: orchestration with events and structured logging

pub mod apriori;
pub mod encoder;
pub mod params;
pub mod pipeline;
pub mod ranking;
pub mod rules;

// Re-exports for convenience
pub use apriori::{
    mine, mine_with_fallback, FrequentItemsets, Itemset, LevelStats, MineResult, ThresholdOutcome,
};
pub use encoder::{encode, ItemUniverse, Transaction, TransactionBitset, TransactionMatrix};
pub use params::MiningParams;
pub use pipeline::{MiningOutcome, MiningPipeline};
pub use ranking::{rank, summarize, BusinessImpact, MiningSummary, RuleSet};
pub use rules::{generate, Rule};
