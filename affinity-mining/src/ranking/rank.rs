//! Rule ranking by lift.

use crate::rules::Rule;

/// Ranked rules together with the date the run was produced on.
///
/// `run_date` is injected by the caller in `YYYY-MM-DD` form; nothing in
/// the engine reads a clock.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub rules: Vec<Rule>,
    pub run_date: String,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>, run_date: impl Into<String>) -> Self {
        Self {
            rules,
            run_date: run_date.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Sort rules by lift descending.
///
/// The sort is stable and uses the total order on f64, so equal-lift rules
/// keep their generation order and the result never depends on NaN quirks.
pub fn rank(mut rules: Vec<Rule>) -> Vec<Rule> {
    rules.sort_by(|a, b| b.lift.total_cmp(&a.lift));
    rules
}
