//! Result file writers.
//!
//! Four outputs land in the output directory: the full ranked rules CSV,
//! the frequent itemsets CSV, the executive summary JSON, and the top-N
//! rules CSV. Metric values stay full precision in the CSVs; the summary
//! JSON is rounded to two decimals at export.

use std::path::{Path, PathBuf};
use std::time::Instant;

use affinity_core::constants::{
    ITEMSETS_OUTPUT_FILE, RULES_OUTPUT_FILE, SUMMARY_OUTPUT_FILE, TOP_RULES_OUTPUT_FILE,
};
use affinity_core::errors::DataError;
use affinity_mining::{ItemUniverse, MiningOutcome, MiningSummary, Rule};

use crate::csv;

const RULES_HEADER: [&str; 7] = [
    "antecedent",
    "consequent",
    "support",
    "confidence",
    "lift",
    "antecedent_support",
    "consequent_support",
];

const ITEMSETS_HEADER: [&str; 3] = ["itemset", "size", "support"];

/// Write all four result files, returning their paths in write order.
pub fn write_outputs(
    outcome: &MiningOutcome,
    output_dir: &Path,
    top_rules: usize,
) -> Result<Vec<PathBuf>, DataError> {
    let started = Instant::now();
    std::fs::create_dir_all(output_dir).map_err(|source| DataError::WriteFailed {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let rules_path = output_dir.join(RULES_OUTPUT_FILE);
    write_rules_csv(&rules_path, &outcome.rule_set.rules, &outcome.universe)?;

    let itemsets_path = output_dir.join(ITEMSETS_OUTPUT_FILE);
    write_itemsets_csv(&itemsets_path, outcome)?;

    let summary_path = output_dir.join(SUMMARY_OUTPUT_FILE);
    write_summary_json(&summary_path, &outcome.summary)?;

    let top_path = output_dir.join(TOP_RULES_OUTPUT_FILE);
    let rules = &outcome.rule_set.rules;
    write_rules_csv(&top_path, &rules[..rules.len().min(top_rules)], &outcome.universe)?;

    tracing::debug!(
        output_write_time = started.elapsed().as_millis() as u64,
        "outputs written"
    );
    Ok(vec![rules_path, itemsets_path, summary_path, top_path])
}

/// Write rules as CSV, itemsets rendered as joined labels.
pub fn write_rules_csv(
    path: &Path,
    rules: &[Rule],
    universe: &ItemUniverse,
) -> Result<(), DataError> {
    let mut lines = Vec::with_capacity(rules.len() + 1);
    lines.push(csv::format_record(&RULES_HEADER));
    for rule in rules {
        lines.push(csv::format_record(&[
            rule.antecedent.render_labels(universe),
            rule.consequent.render_labels(universe),
            rule.support.to_string(),
            rule.confidence.to_string(),
            rule.lift.to_string(),
            rule.antecedent_support.to_string(),
            rule.consequent_support.to_string(),
        ]));
    }
    write_lines(path, &lines)
}

/// Write every mined level as CSV, level 1 first.
pub fn write_itemsets_csv(path: &Path, outcome: &MiningOutcome) -> Result<(), DataError> {
    let mut lines = vec![csv::format_record(&ITEMSETS_HEADER)];
    for level in outcome.itemsets.levels() {
        for (itemset, support) in level {
            lines.push(csv::format_record(&[
                itemset.render_labels(&outcome.universe),
                itemset.len().to_string(),
                support.to_string(),
            ]));
        }
    }
    write_lines(path, &lines)
}

/// Write the executive summary as pretty JSON, metrics rounded to two
/// decimals.
pub fn write_summary_json(path: &Path, summary: &MiningSummary) -> Result<(), DataError> {
    let export = summary_for_export(summary);
    let json = serde_json::to_string_pretty(&export).map_err(|e| DataError::WriteFailed {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
    })?;
    std::fs::write(path, format!("{json}\n")).map_err(|source| DataError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Copy of the summary with metric fields rounded for presentation.
pub fn summary_for_export(summary: &MiningSummary) -> MiningSummary {
    MiningSummary {
        top_lift: round2(summary.top_lift),
        avg_lift_top10: round2(summary.avg_lift_top10),
        max_confidence: round2(summary.max_confidence),
        top_lift_value: round2(summary.top_lift_value),
        ..summary.clone()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn write_lines(path: &Path, lines: &[String]) -> Result<(), DataError> {
    let mut content = lines.join("\n");
    content.push('\n');
    std::fs::write(path, content).map_err(|source| DataError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}
