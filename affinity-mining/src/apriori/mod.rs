//! Level-wise frequent itemset mining.

pub mod fallback;
pub mod itemset;
pub mod miner;

pub use fallback::{mine_with_fallback, ThresholdOutcome};
pub use itemset::{FrequentItemsets, Itemset};
pub use miner::{mine, LevelStats, MineResult};
