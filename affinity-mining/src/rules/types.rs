//! Association rule record.

use crate::apriori::Itemset;

/// One association rule with its full metric set.
///
/// `support` is the relative support of the antecedent-consequent union.
/// The component supports are carried so downstream consumers never need
/// the frequent itemset collection to recompute metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
    pub antecedent_support: f64,
    pub consequent_support: f64,
}
