//! Compact per-transaction item bitsets.
//!
//! Each transaction row stores one bit per universe item, packed into
//! u64 words. Candidate support counting reduces to word-wise AND
//! comparisons against a candidate mask built once per itemset.

use affinity_core::types::collections::SmallVec8;
use affinity_core::types::ItemId;

/// Fixed-width bitset over the item universe.
///
/// All bitsets for one encoding share the same word count, so word-wise
/// operations never need bounds reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionBitset {
    words: SmallVec8<u64>,
}

impl TransactionBitset {
    /// Create an all-zero bitset sized for `universe_size` items.
    pub fn new(universe_size: usize) -> Self {
        let word_count = universe_size.div_ceil(64);
        Self {
            words: SmallVec8::from_elem(0u64, word_count),
        }
    }

    /// Set the bit for `id`.
    pub fn set(&mut self, id: ItemId) {
        let index = id.as_usize();
        self.words[index / 64] |= 1u64 << (index % 64);
    }

    /// Returns true if the bit for `id` is set.
    pub fn contains(&self, id: ItemId) -> bool {
        let index = id.as_usize();
        self.words[index / 64] & (1u64 << (index % 64)) != 0
    }

    /// Returns true if every bit set in `mask` is also set here.
    pub fn contains_all(&self, mask: &TransactionBitset) -> bool {
        self.words
            .iter()
            .zip(mask.words.iter())
            .all(|(word, mask_word)| word & mask_word == *mask_word)
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// The packed words, low item indices first.
    pub fn words(&self) -> &[u64] {
        &self.words
    }
}
