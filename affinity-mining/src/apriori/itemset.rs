//! Canonical itemsets and the per-level frequent itemset collection.

use affinity_core::constants::ITEMSET_LABEL_SEPARATOR;
use affinity_core::types::collections::{BTreeMap, SmallVec4};
use affinity_core::types::ItemId;
use serde::{Deserialize, Serialize};

use crate::encoder::{ItemUniverse, TransactionBitset};

/// Sorted, duplicate-free set of item ids.
///
/// Canonical form means two itemsets with the same members compare equal
/// regardless of construction order, which is what makes them usable as
/// ordered map keys across mining levels.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Itemset(SmallVec4<ItemId>);

impl Itemset {
    /// Build an itemset from arbitrary ids, sorting and deduplicating.
    pub fn new<I: IntoIterator<Item = ItemId>>(ids: I) -> Self {
        let mut items: SmallVec4<ItemId> = ids.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self(items)
    }

    /// Single-item itemset.
    pub fn single(id: ItemId) -> Self {
        Self(SmallVec4::from_elem(id, 1))
    }

    /// Build from ids already in strictly ascending order.
    pub fn from_sorted(items: SmallVec4<ItemId>) -> Self {
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        Self(items)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Member ids in ascending order.
    pub fn items(&self) -> &[ItemId] {
        &self.0
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.0.binary_search(&id).is_ok()
    }

    /// Bitset mask with exactly this itemset's bits set.
    pub fn to_mask(&self, universe_size: usize) -> TransactionBitset {
        let mut mask = TransactionBitset::new(universe_size);
        for id in &self.0 {
            mask.set(*id);
        }
        mask
    }

    /// Human-readable rendering, labels joined in id order.
    pub fn render_labels(&self, universe: &ItemUniverse) -> String {
        self.0
            .iter()
            .map(|id| universe.label(*id))
            .collect::<Vec<_>>()
            .join(ITEMSET_LABEL_SEPARATOR)
    }

    /// Join two k-itemsets sharing their first k-1 items into a (k+1)-itemset.
    ///
    /// Returns `None` unless the prefixes match and `other`'s last item sorts
    /// after `self`'s, so each candidate is generated exactly once when
    /// joining over keys in ascending order.
    pub fn join(&self, other: &Itemset) -> Option<Itemset> {
        let k = self.0.len();
        if k == 0 || other.0.len() != k {
            return None;
        }
        if self.0[..k - 1] != other.0[..k - 1] || self.0[k - 1] >= other.0[k - 1] {
            return None;
        }
        let mut items = self.0.clone();
        items.push(other.0[k - 1]);
        Some(Itemset(items))
    }

    /// All subsets obtained by dropping one item, in drop-position order.
    pub fn k_minus_one_subsets(&self) -> Vec<Itemset> {
        (0..self.0.len())
            .map(|drop| {
                let items = self
                    .0
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != drop)
                    .map(|(_, id)| *id)
                    .collect();
                Itemset(items)
            })
            .collect()
    }
}

/// Frequent itemsets grouped by level, each mapped to its relative support.
///
/// Level k holds itemsets of exactly k items. Ordered maps keep every
/// traversal over a level deterministic.
#[derive(Debug, Clone, Default)]
pub struct FrequentItemsets {
    levels: Vec<BTreeMap<Itemset, f64>>,
}

impl FrequentItemsets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next level. Levels must be pushed in order from 1 up.
    pub fn push_level(&mut self, level: BTreeMap<Itemset, f64>) {
        self.levels.push(level);
    }

    /// Itemsets of exactly `k` items, if that level was mined.
    pub fn level(&self, k: usize) -> Option<&BTreeMap<Itemset, f64>> {
        if k == 0 {
            return None;
        }
        self.levels.get(k - 1)
    }

    /// All mined levels, level 1 first.
    pub fn levels(&self) -> &[BTreeMap<Itemset, f64>] {
        &self.levels
    }

    /// Relative support of `itemset`, if it was kept as frequent.
    pub fn support_of(&self, itemset: &Itemset) -> Option<f64> {
        self.level(itemset.len())?.get(itemset).copied()
    }

    /// Total number of frequent itemsets across all levels.
    pub fn total_len(&self) -> usize {
        self.levels.iter().map(|level| level.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }

    /// Highest mined level, 0 when nothing was mined.
    pub fn max_level(&self) -> usize {
        self.levels.len()
    }
}
