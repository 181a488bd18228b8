//! Level-wise Apriori mining over the encoded transaction matrix.
//!
//! Each level joins the previous level's frequent itemsets on their shared
//! prefix, prunes candidates with an infrequent subset, then counts support
//! in parallel. Candidate order comes from ordered map keys, so the mined
//! output is identical run to run.

use affinity_core::types::collections::BTreeMap;
use affinity_core::types::ItemId;
use rayon::prelude::*;

use crate::apriori::itemset::{FrequentItemsets, Itemset};
use crate::encoder::TransactionMatrix;

/// Candidate and survivor counts for one mined level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelStats {
    pub level: usize,
    pub candidates: usize,
    pub frequent: usize,
}

/// Output of one mining pass at a fixed support threshold.
#[derive(Debug, Clone)]
pub struct MineResult {
    pub itemsets: FrequentItemsets,
    pub level_stats: Vec<LevelStats>,
}

/// Mine frequent itemsets up to `max_itemset_size` items.
///
/// Support is relative to the full transaction count, empty rows included,
/// and the threshold is inclusive: an itemset at exactly `min_support`
/// is kept.
pub fn mine(matrix: &TransactionMatrix, min_support: f64, max_itemset_size: usize) -> MineResult {
    let total = matrix.transaction_count();
    let mut itemsets = FrequentItemsets::new();
    let mut level_stats = Vec::new();

    if total == 0 || max_itemset_size == 0 {
        return MineResult {
            itemsets,
            level_stats,
        };
    }

    let level1 = count_singletons(matrix, min_support);
    level_stats.push(LevelStats {
        level: 1,
        candidates: matrix.universe_size(),
        frequent: level1.len(),
    });
    tracing::debug!(
        level = 1,
        candidates = matrix.universe_size(),
        frequent = level1.len(),
        "mined level"
    );
    if level1.is_empty() {
        return MineResult {
            itemsets,
            level_stats,
        };
    }
    itemsets.push_level(level1);

    for level in 2..=max_itemset_size {
        let previous = match itemsets.level(level - 1) {
            Some(previous) => previous,
            None => break,
        };
        let candidates = generate_candidates(previous);
        let counted = count_candidates(matrix, &candidates, min_support);
        level_stats.push(LevelStats {
            level,
            candidates: candidates.len(),
            frequent: counted.len(),
        });
        tracing::debug!(
            level,
            candidates = candidates.len(),
            frequent = counted.len(),
            "mined level"
        );
        if counted.is_empty() {
            break;
        }
        itemsets.push_level(counted);
    }

    MineResult {
        itemsets,
        level_stats,
    }
}

/// Count every item column in one pass over the packed rows.
fn count_singletons(matrix: &TransactionMatrix, min_support: f64) -> BTreeMap<Itemset, f64> {
    let total = matrix.transaction_count() as f64;
    let mut counts = vec![0usize; matrix.universe_size()];

    for row in matrix.rows() {
        for (word_index, word) in row.words().iter().enumerate() {
            let mut bits = *word;
            while bits != 0 {
                let offset = bits.trailing_zeros() as usize;
                counts[word_index * 64 + offset] += 1;
                bits &= bits - 1;
            }
        }
    }

    counts
        .into_iter()
        .enumerate()
        .filter_map(|(index, count)| {
            let support = count as f64 / total;
            (support >= min_support)
                .then(|| (Itemset::single(ItemId::new(index as u32)), support))
        })
        .collect()
}

/// Join the previous level on shared prefixes, then prune candidates
/// with an infrequent subset.
///
/// Keys sharing a prefix are contiguous in the ordered map, so the inner
/// scan stops at the first non-matching join partner.
fn generate_candidates(previous: &BTreeMap<Itemset, f64>) -> Vec<Itemset> {
    let keys: Vec<&Itemset> = previous.keys().collect();
    let mut candidates = Vec::new();

    for i in 0..keys.len() {
        for j in (i + 1)..keys.len() {
            let candidate = match keys[i].join(keys[j]) {
                Some(candidate) => candidate,
                None => break,
            };
            let all_subsets_frequent = candidate
                .k_minus_one_subsets()
                .iter()
                .all(|subset| previous.contains_key(subset));
            if all_subsets_frequent {
                candidates.push(candidate);
            }
        }
    }

    candidates
}

/// Support-count candidates in parallel and keep those at or above threshold.
fn count_candidates(
    matrix: &TransactionMatrix,
    candidates: &[Itemset],
    min_support: f64,
) -> BTreeMap<Itemset, f64> {
    let total = matrix.transaction_count() as f64;
    let universe_size = matrix.universe_size();

    candidates
        .par_iter()
        .map(|candidate| {
            let mask = candidate.to_mask(universe_size);
            let support = matrix.support_count(&mask) as f64 / total;
            (candidate.clone(), support)
        })
        .filter(|(_, support)| *support >= min_support)
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{encode, Transaction};

    fn worked_example() -> TransactionMatrix {
        // A=0.8, B=0.8, C=0.6, AB=0.6, AC=0.4, BC=0.4, ABC=0.2
        let transactions = vec![
            Transaction::new(["A", "B"]),
            Transaction::new(["A", "B"]),
            Transaction::new(["A", "C"]),
            Transaction::new(["B", "C"]),
            Transaction::new(["A", "B", "C"]),
        ];
        let (_, matrix) = encode(&transactions).unwrap();
        matrix
    }

    fn set(raw: &[u32]) -> Itemset {
        Itemset::new(raw.iter().map(|&i| ItemId::new(i)))
    }

    #[test]
    fn test_singleton_supports() {
        let matrix = worked_example();
        let result = mine(&matrix, 0.01, 1);
        let level1 = result.itemsets.level(1).unwrap();

        assert_eq!(level1.len(), 3);
        assert!((level1[&set(&[0])] - 0.8).abs() < 1e-9);
        assert!((level1[&set(&[1])] - 0.8).abs() < 1e-9);
        assert!((level1[&set(&[2])] - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_pair_supports() {
        let matrix = worked_example();
        let result = mine(&matrix, 0.01, 2);
        let level2 = result.itemsets.level(2).unwrap();

        assert_eq!(level2.len(), 3);
        assert!((level2[&set(&[0, 1])] - 0.6).abs() < 1e-9);
        assert!((level2[&set(&[0, 2])] - 0.4).abs() < 1e-9);
        assert!((level2[&set(&[1, 2])] - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_triple_level() {
        let matrix = worked_example();
        let result = mine(&matrix, 0.01, 3);
        let level3 = result.itemsets.level(3).unwrap();

        assert_eq!(level3.len(), 1);
        assert!((level3[&set(&[0, 1, 2])] - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_max_size_caps_levels() {
        let matrix = worked_example();
        let result = mine(&matrix, 0.01, 2);
        assert_eq!(result.itemsets.max_level(), 2);
        assert!(result.itemsets.level(3).is_none());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let matrix = worked_example();
        // C sits exactly at 0.6 and must survive a 0.6 threshold
        let result = mine(&matrix, 0.6, 1);
        let level1 = result.itemsets.level(1).unwrap();
        assert!(level1.contains_key(&set(&[2])));
    }

    #[test]
    fn test_threshold_excludes_below() {
        let matrix = worked_example();
        let result = mine(&matrix, 0.5, 2);
        let level2 = result.itemsets.level(2).unwrap();

        // Only AB at 0.6 clears 0.5; AC and BC sit at 0.4
        assert_eq!(level2.len(), 1);
        assert!(level2.contains_key(&set(&[0, 1])));
    }

    #[test]
    fn test_high_threshold_yields_empty() {
        let matrix = worked_example();
        let result = mine(&matrix, 0.95, 2);
        assert!(result.itemsets.is_empty());
        assert_eq!(result.level_stats.len(), 1);
        assert_eq!(result.level_stats[0].frequent, 0);
    }

    #[test]
    fn test_level_stats_track_candidates() {
        let matrix = worked_example();
        let result = mine(&matrix, 0.01, 3);

        assert_eq!(result.level_stats.len(), 3);
        assert_eq!(
            result.level_stats[0],
            LevelStats {
                level: 1,
                candidates: 3,
                frequent: 3
            }
        );
        assert_eq!(
            result.level_stats[1],
            LevelStats {
                level: 2,
                candidates: 3,
                frequent: 3
            }
        );
        assert_eq!(
            result.level_stats[2],
            LevelStats {
                level: 3,
                candidates: 1,
                frequent: 1
            }
        );
    }

    #[test]
    fn test_prune_blocks_candidates_with_infrequent_subset() {
        let transactions = vec![
            Transaction::new(["A", "D"]),
            Transaction::new(["A", "D"]),
            Transaction::new(["A", "B"]),
            Transaction::new(["A", "B"]),
            Transaction::new(["B", "C"]),
        ];
        let (_, matrix) = encode(&transactions).unwrap();
        let result = mine(&matrix, 0.4, 3);

        // Level 2 keeps AB (0.4) and AD (0.4). Their join ABD is pruned
        // without counting because the subset BD never reached level 2.
        let level2 = result.itemsets.level(2).unwrap();
        assert_eq!(level2.len(), 2);
        assert!(result.itemsets.level(3).is_none());
        assert_eq!(result.level_stats[2].candidates, 0);
    }

    #[test]
    fn test_empty_rows_count_in_denominator() {
        let transactions = vec![
            Transaction::new(["A"]),
            Transaction::default(),
            Transaction::default(),
            Transaction::default(),
        ];
        let (_, matrix) = encode(&transactions).unwrap();
        let result = mine(&matrix, 0.01, 1);
        let level1 = result.itemsets.level(1).unwrap();

        assert!((level1[&set(&[0])] - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_mine_is_deterministic() {
        let matrix = worked_example();
        let a = mine(&matrix, 0.01, 3);
        let b = mine(&matrix, 0.01, 3);

        for level in 1..=3 {
            let la: Vec<_> = a.itemsets.level(level).unwrap().iter().collect();
            let lb: Vec<_> = b.itemsets.level(level).unwrap().iter().collect();
            assert_eq!(la, lb);
        }
        assert_eq!(a.level_stats, b.level_stats);
    }
}
