//! Association rule generation from mined frequent itemsets.
//!
//! Every metric is derived from supports already in the collection; no
//! transaction rescan happens here. Enumeration order is fixed (levels
//! ascending, itemsets in key order, antecedent masks ascending), so the
//! output order is reproducible.

use affinity_core::types::collections::SmallVec4;

use crate::apriori::{FrequentItemsets, Itemset};
use crate::rules::types::Rule;

/// Derive association rules from the frequent itemset collection.
///
/// For each itemset of size >= 2, every non-empty proper subset becomes an
/// antecedent with its complement as consequent. Rules with lift at or
/// above `min_lift` are kept. `only_pairs` restricts output to
/// singleton -> singleton rules, which confines enumeration to level 2.
pub fn generate(frequent: &FrequentItemsets, min_lift: f64, only_pairs: bool) -> Vec<Rule> {
    let mut rules = Vec::new();

    for (level_index, level) in frequent.levels().iter().enumerate() {
        let size = level_index + 1;
        if size < 2 {
            continue;
        }
        if only_pairs && size != 2 {
            break;
        }

        for (itemset, &support) in level {
            let items = itemset.items();
            let full_mask = (1usize << items.len()) - 1;

            for antecedent_mask in 1..full_mask {
                let mut antecedent_items = SmallVec4::new();
                let mut consequent_items = SmallVec4::new();
                for (position, id) in items.iter().enumerate() {
                    if antecedent_mask & (1 << position) != 0 {
                        antecedent_items.push(*id);
                    } else {
                        consequent_items.push(*id);
                    }
                }
                let antecedent = Itemset::from_sorted(antecedent_items);
                let consequent = Itemset::from_sorted(consequent_items);

                let antecedent_support = match frequent.support_of(&antecedent) {
                    Some(support) => support,
                    None => continue,
                };
                let consequent_support = match frequent.support_of(&consequent) {
                    Some(support) => support,
                    None => continue,
                };

                let confidence = support / antecedent_support;
                let lift = confidence / consequent_support;
                if lift < min_lift {
                    continue;
                }

                rules.push(Rule {
                    antecedent,
                    consequent,
                    support,
                    confidence,
                    lift,
                    antecedent_support,
                    consequent_support,
                });
            }
        }
    }

    tracing::debug!(rules = rules.len(), min_lift, only_pairs, "generated rules");
    rules
}
