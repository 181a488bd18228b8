//! Property-based tests for mining invariants.
//!
//! Uses proptest to fuzz-verify:
//!   - Support bounds (min_support ≤ s ≤ 1.0) at every level
//!   - Anti-monotonicity (every subset of a frequent itemset is frequent)
//!   - Miner agreement with brute-force counting on small universes
//!   - Rule metric identities (confidence and lift definitions)
//!
//! Tests prefixed `regression_gate_` are CI SLO gates — failures here
//! block merge. Run with: `cargo test regression_gate_`

use proptest::prelude::*;

use affinity_mining::{
    encode, generate, mine, mine_with_fallback, MiningParams, Transaction,
};

/// Baskets drawn from a small fixed universe so pair counting stays
/// cheap enough to brute-force.
fn transactions_strategy() -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(prop::collection::btree_set(0u32..8, 0..=4usize), 1..16).prop_map(
        |baskets| {
            baskets
                .into_iter()
                .map(|basket| Transaction::new(basket.into_iter().map(|i| format!("I{i}"))))
                .collect()
        },
    )
}

fn has_items(transactions: &[Transaction]) -> bool {
    transactions.iter().any(|t| !t.items.is_empty())
}

/// Pair supports computed directly over label sets, no encoding involved.
fn brute_force_pairs(
    transactions: &[Transaction],
    min_support: f64,
) -> Vec<(String, String, f64)> {
    use std::collections::BTreeSet;

    let total = transactions.len() as f64;
    let labels: Vec<String> = transactions
        .iter()
        .flat_map(|t| t.items.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let sets: Vec<BTreeSet<&str>> = transactions
        .iter()
        .map(|t| t.items.iter().map(String::as_str).collect())
        .collect();

    let mut pairs = Vec::new();
    for i in 0..labels.len() {
        for j in (i + 1)..labels.len() {
            let count = sets
                .iter()
                .filter(|set| set.contains(labels[i].as_str()) && set.contains(labels[j].as_str()))
                .count();
            let support = count as f64 / total;
            if support >= min_support {
                pairs.push((labels[i].clone(), labels[j].clone(), support));
            }
        }
    }
    pairs
}

// ═══════════════════════════════════════════════════════════════════
// Support Bound Properties
// ═══════════════════════════════════════════════════════════════════

proptest! {
    /// REGRESSION GATE: Every kept support lies in [min_support, 1.0].
    #[test]
    fn regression_gate_support_bounded(
        transactions in transactions_strategy(),
        min_support in 0.05f64..0.9,
    ) {
        prop_assume!(has_items(&transactions));
        let (_, matrix) = encode(&transactions).unwrap();
        let result = mine(&matrix, min_support, 3);

        for level in result.itemsets.levels() {
            for (itemset, &support) in level {
                prop_assert!(
                    support >= min_support,
                    "Support {} below threshold {} for {:?}",
                    support, min_support, itemset
                );
                prop_assert!(
                    support <= 1.0,
                    "Support {} exceeds 1.0 for {:?}",
                    support, itemset
                );
            }
        }
    }

    /// REGRESSION GATE: Every (k-1)-subset of a frequent k-itemset is
    /// itself frequent.
    #[test]
    fn regression_gate_anti_monotone(
        transactions in transactions_strategy(),
        min_support in 0.05f64..0.9,
    ) {
        prop_assume!(has_items(&transactions));
        let (_, matrix) = encode(&transactions).unwrap();
        let result = mine(&matrix, min_support, 4);

        for level in result.itemsets.levels().iter().skip(1) {
            for itemset in level.keys() {
                for subset in itemset.k_minus_one_subsets() {
                    prop_assert!(
                        result.itemsets.support_of(&subset).is_some(),
                        "Frequent {:?} has infrequent subset {:?}",
                        itemset, subset
                    );
                }
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// Brute-Force Agreement
// ═══════════════════════════════════════════════════════════════════

proptest! {
    /// REGRESSION GATE: Mined level-2 itemsets match pair counting done
    /// directly on the label sets, values included.
    #[test]
    fn regression_gate_matches_brute_force(
        transactions in transactions_strategy(),
        min_support in 0.05f64..0.9,
    ) {
        prop_assume!(has_items(&transactions));
        let (universe, matrix) = encode(&transactions).unwrap();
        let result = mine(&matrix, min_support, 2);

        let mined: Vec<(String, String, f64)> = result
            .itemsets
            .level(2)
            .map(|level| {
                level
                    .iter()
                    .map(|(itemset, &support)| {
                        let items = itemset.items();
                        (
                            universe.label(items[0]).to_string(),
                            universe.label(items[1]).to_string(),
                            support,
                        )
                    })
                    .collect()
            })
            .unwrap_or_default();
        let expected = brute_force_pairs(&transactions, min_support);

        prop_assert_eq!(mined.len(), expected.len());
        for (got, want) in mined.iter().zip(expected.iter()) {
            prop_assert_eq!(&got.0, &want.0);
            prop_assert_eq!(&got.1, &want.1);
            prop_assert!(
                (got.2 - want.2).abs() < 1e-12,
                "Support mismatch for ({}, {}): {} vs {}",
                got.0, got.1, got.2, want.2
            );
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// Rule Metric Properties
// ═══════════════════════════════════════════════════════════════════

proptest! {
    /// REGRESSION GATE: confidence * antecedent_support = support and
    /// lift * consequent_support = confidence, to 1e-9.
    #[test]
    fn regression_gate_metric_identities(
        transactions in transactions_strategy(),
        min_support in 0.05f64..0.5,
    ) {
        prop_assume!(has_items(&transactions));
        let (_, matrix) = encode(&transactions).unwrap();
        let result = mine(&matrix, min_support, 3);
        let rules = generate(&result.itemsets, 0.0, false);

        for rule in &rules {
            prop_assert!(
                (rule.confidence * rule.antecedent_support - rule.support).abs() < 1e-9,
                "confidence identity broken: {:?}",
                rule
            );
            prop_assert!(
                (rule.lift * rule.consequent_support - rule.confidence).abs() < 1e-9,
                "lift identity broken: {:?}",
                rule
            );
            prop_assert!(rule.confidence > 0.0 && rule.confidence <= 1.0 + 1e-9);
            prop_assert!(rule.lift > 0.0);
        }
    }

    /// Mining and rule generation are idempotent over the same input.
    #[test]
    fn prop_mining_idempotent(
        transactions in transactions_strategy(),
        min_support in 0.05f64..0.9,
    ) {
        prop_assume!(has_items(&transactions));
        let (_, matrix) = encode(&transactions).unwrap();
        let first = mine(&matrix, min_support, 3);
        let second = mine(&matrix, min_support, 3);

        prop_assert_eq!(first.itemsets.total_len(), second.itemsets.total_len());
        for (a, b) in first.itemsets.levels().iter().zip(second.itemsets.levels()) {
            let a: Vec<_> = a.iter().collect();
            let b: Vec<_> = b.iter().collect();
            prop_assert_eq!(a, b);
        }

        let rules_a = generate(&first.itemsets, 0.0, false);
        let rules_b = generate(&second.itemsets, 0.0, false);
        prop_assert_eq!(rules_a, rules_b);
    }

    /// The threshold reported by fallback mining is always one of the
    /// two configured thresholds, and the flag matches which one.
    #[test]
    fn prop_fallback_threshold_consistent(
        transactions in transactions_strategy(),
        primary in 0.1f64..0.9,
    ) {
        prop_assume!(has_items(&transactions));
        let (_, matrix) = encode(&transactions).unwrap();
        let params = MiningParams {
            primary_min_support: primary,
            fallback_min_support: primary / 2.0,
            ..MiningParams::default()
        };

        let primary_empty = mine(&matrix, primary, params.max_itemset_size)
            .itemsets
            .is_empty();
        let outcome = mine_with_fallback(&matrix, &params);

        prop_assert_eq!(outcome.fallback_triggered, primary_empty);
        let expected = if primary_empty {
            params.fallback_min_support
        } else {
            params.primary_min_support
        };
        prop_assert!((outcome.threshold_used - expected).abs() < 1e-15);
    }
}
