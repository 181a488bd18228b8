//! End-to-end mining pipeline.
//!
//! `MiningPipeline` strings the stages together: validate parameters,
//! encode, mine with the threshold fallback, derive and rank rules, then
//! summarize. Registered event handlers observe each stage; errors are
//! reported through the dispatcher before they propagate.

use std::sync::Arc;
use std::time::Instant;

use affinity_core::errors::{AffinityErrorCode, PipelineError};
use affinity_core::events::types::{
    EncodeCompleteEvent, ErrorEvent, FallbackTriggeredEvent, LevelMinedEvent,
    PipelineCompleteEvent, RulesGeneratedEvent,
};
use affinity_core::events::{EventDispatcher, MiningEventHandler};

use crate::apriori::{mine_with_fallback, FrequentItemsets};
use crate::encoder::{encode, ItemUniverse, Transaction};
use crate::params::MiningParams;
use crate::ranking::{rank, summarize, MiningSummary, RuleSet};
use crate::rules::generate;

/// Everything one completed run produces.
#[derive(Debug, Clone)]
pub struct MiningOutcome {
    pub universe: ItemUniverse,
    pub transaction_count: usize,
    pub itemsets: FrequentItemsets,
    pub rule_set: RuleSet,
    pub summary: MiningSummary,
    /// Support threshold of the mining attempt that was kept.
    pub threshold_used: f64,
    pub fallback_triggered: bool,
    pub duration_ms: u64,
}

/// Orchestrator owning the resolved parameters and the event dispatcher.
pub struct MiningPipeline {
    params: MiningParams,
    dispatcher: EventDispatcher,
}

impl MiningPipeline {
    pub fn new(params: MiningParams) -> Self {
        Self {
            params,
            dispatcher: EventDispatcher::new(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(MiningParams::default())
    }

    pub fn params(&self) -> &MiningParams {
        &self.params
    }

    /// Register an event handler observing this pipeline's runs.
    pub fn register_handler(&mut self, handler: Arc<dyn MiningEventHandler>) {
        self.dispatcher.register(handler);
    }

    /// Run the full pipeline over `transactions`.
    ///
    /// `run_date` (YYYY-MM-DD) is stamped into the rule set and summary;
    /// the engine itself never reads a clock. Finding no patterns is a
    /// success with empty rules and a zeroed summary, not an error.
    pub fn run(
        &self,
        transactions: &[Transaction],
        run_date: &str,
    ) -> Result<MiningOutcome, PipelineError> {
        match self.run_stages(transactions, run_date) {
            Ok(outcome) => Ok(outcome),
            Err(error) => {
                self.dispatcher.emit_error(&ErrorEvent {
                    message: error.to_string(),
                    error_code: error.error_code().to_string(),
                });
                Err(error)
            }
        }
    }

    fn run_stages(
        &self,
        transactions: &[Transaction],
        run_date: &str,
    ) -> Result<MiningOutcome, PipelineError> {
        let started = Instant::now();
        self.params.validate()?;

        let encode_started = Instant::now();
        let (universe, matrix) = encode(transactions)?;
        tracing::debug!(
            encode_time = encode_started.elapsed().as_millis() as u64,
            transactions = matrix.transaction_count(),
            distinct_items = universe.len(),
            "encoding complete"
        );
        self.dispatcher.emit_encode_complete(&EncodeCompleteEvent {
            transactions: matrix.transaction_count(),
            distinct_items: universe.len(),
        });

        let mining_started = Instant::now();
        let mined = mine_with_fallback(&matrix, &self.params);
        tracing::info!(
            mining_time = mining_started.elapsed().as_millis() as u64,
            threshold_used = mined.threshold_used,
            fallback_triggered = mined.fallback_triggered,
            frequent_itemsets = mined.itemsets.total_len(),
            "mining complete"
        );
        if mined.fallback_triggered {
            self.dispatcher
                .emit_fallback_triggered(&FallbackTriggeredEvent {
                    primary_support: self.params.primary_min_support,
                    fallback_support: self.params.fallback_min_support,
                });
        }
        for stats in &mined.level_stats {
            self.dispatcher.emit_level_mined(&LevelMinedEvent {
                level: stats.level,
                candidates: stats.candidates,
                frequent: stats.frequent,
            });
        }

        let rules_started = Instant::now();
        let rules = generate(&mined.itemsets, self.params.min_lift, self.params.only_pairs);
        tracing::debug!(
            rule_generation_time = rules_started.elapsed().as_millis() as u64,
            rules = rules.len(),
            "rule generation complete"
        );
        self.dispatcher.emit_rules_generated(&RulesGeneratedEvent {
            candidates: rule_candidate_count(&mined.itemsets, self.params.only_pairs),
            kept: rules.len(),
        });

        let rule_set = RuleSet::new(rank(rules), run_date);
        let summary = summarize(&rule_set, &mined.itemsets, &universe);

        let duration_ms = started.elapsed().as_millis() as u64;
        self.dispatcher.emit_pipeline_complete(&PipelineCompleteEvent {
            total_itemsets: mined.itemsets.total_len(),
            total_rules: rule_set.len(),
            fallback_triggered: mined.fallback_triggered,
            duration_ms,
        });
        tracing::info!(
            pipeline_time = duration_ms,
            total_itemsets = mined.itemsets.total_len(),
            total_rules = rule_set.len(),
            "pipeline complete"
        );

        Ok(MiningOutcome {
            universe,
            transaction_count: matrix.transaction_count(),
            itemsets: mined.itemsets,
            rule_set,
            summary,
            threshold_used: mined.threshold_used,
            fallback_triggered: mined.fallback_triggered,
            duration_ms,
        })
    }
}

/// Number of antecedent/consequent splits rule generation will consider,
/// before the lift filter.
///
/// Each itemset of size k yields 2^k - 2 splits; with `only_pairs` only
/// level 2 is enumerated, two directed rules per pair.
fn rule_candidate_count(frequent: &FrequentItemsets, only_pairs: bool) -> usize {
    if only_pairs {
        return frequent.level(2).map_or(0, |level| level.len() * 2);
    }
    frequent
        .levels()
        .iter()
        .enumerate()
        .skip(1)
        .map(|(index, level)| {
            let size = index + 1;
            level.len() * ((1usize << size) - 2)
        })
        .sum()
}
