//! Executive summary of a mining run.

use affinity_core::constants::{
    DEFAULT_TOP_RULES, HIGH_CONFIDENCE_BAND, HIGH_LIFT_BAND, MEDIUM_LIFT_BAND_LOW,
};
use serde::{Deserialize, Serialize};

use crate::apriori::FrequentItemsets;
use crate::encoder::ItemUniverse;
use crate::ranking::rank::RuleSet;

/// Rule counts in the lift and confidence bands the summary reports on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessImpact {
    /// Rules with lift above 5.
    pub high_lift_rules: usize,
    /// Rules with lift between 3 and 5 inclusive.
    pub medium_lift_rules: usize,
    /// Rules with confidence above 0.5.
    pub high_confidence_rules: usize,
}

/// Headline numbers for one mining run.
///
/// Values are kept at full precision here; rounding for presentation
/// happens where the summary is written out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiningSummary {
    pub run_date: String,
    pub total_rules: usize,
    pub total_itemsets: usize,
    pub top_lift: f64,
    pub avg_lift_top10: f64,
    pub max_confidence: f64,
    /// Top-ranked rule rendered as `"A → B"`, empty when there are no rules.
    pub top_association: String,
    pub top_lift_value: f64,
    pub business_impact: BusinessImpact,
}

/// Summarize a ranked rule set.
///
/// Pure function of its inputs: the run date comes from the rule set and
/// the itemset count from the mined collection. With no rules the metric
/// fields are zero and `top_association` is empty, which is the shape the
/// no-patterns outcome reports.
pub fn summarize(
    rule_set: &RuleSet,
    frequent: &FrequentItemsets,
    universe: &ItemUniverse,
) -> MiningSummary {
    let rules = &rule_set.rules;
    let total_itemsets = frequent.total_len();

    if rules.is_empty() {
        return MiningSummary {
            run_date: rule_set.run_date.clone(),
            total_rules: 0,
            total_itemsets,
            top_lift: 0.0,
            avg_lift_top10: 0.0,
            max_confidence: 0.0,
            top_association: String::new(),
            top_lift_value: 0.0,
            business_impact: BusinessImpact {
                high_lift_rules: 0,
                medium_lift_rules: 0,
                high_confidence_rules: 0,
            },
        };
    }

    let top = &rules[0];
    let top_window = &rules[..rules.len().min(DEFAULT_TOP_RULES)];
    let avg_lift_top10 =
        top_window.iter().map(|r| r.lift).sum::<f64>() / top_window.len() as f64;
    let top_lift = rules.iter().map(|r| r.lift).fold(f64::MIN, f64::max);
    let max_confidence = rules.iter().map(|r| r.confidence).fold(f64::MIN, f64::max);

    let business_impact = BusinessImpact {
        high_lift_rules: rules.iter().filter(|r| r.lift > HIGH_LIFT_BAND).count(),
        medium_lift_rules: rules
            .iter()
            .filter(|r| r.lift >= MEDIUM_LIFT_BAND_LOW && r.lift <= HIGH_LIFT_BAND)
            .count(),
        high_confidence_rules: rules
            .iter()
            .filter(|r| r.confidence > HIGH_CONFIDENCE_BAND)
            .count(),
    };

    MiningSummary {
        run_date: rule_set.run_date.clone(),
        total_rules: rules.len(),
        total_itemsets,
        top_lift,
        avg_lift_top10,
        max_confidence,
        top_association: format!(
            "{} → {}",
            top.antecedent.render_labels(universe),
            top.consequent.render_labels(universe)
        ),
        top_lift_value: top.lift,
        business_impact,
    }
}
