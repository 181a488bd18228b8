//! Run reports.
//!
//! Two formats over a `MiningOutcome`: a box-drawing console report for
//! humans, and the rounded executive summary as JSON for machines. Both
//! are pure string generation; printing is the caller's business.

use affinity_mining::MiningOutcome;

use crate::writers::summary_for_export;

/// Characters between the left and right box borders.
const INNER_WIDTH: usize = 62;

/// Rules shown in the console top-rules table.
const CONSOLE_TOP_RULES: usize = 5;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, outcome: &MiningOutcome) -> Result<String, String>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "console" => Some(Box::new(ConsoleReporter)),
        "json" => Some(Box::new(JsonReporter)),
        _ => None,
    }
}

/// List all available report format names.
pub fn available_formats() -> &'static [&'static str] {
    &["console", "json"]
}

/// Human-readable box report for terminal output.
pub struct ConsoleReporter;

impl ConsoleReporter {
    fn line(text: &str) -> String {
        format!("║{text:<INNER_WIDTH$}║\n")
    }

    fn centered(text: &str) -> String {
        format!("║{text:^INNER_WIDTH$}║\n")
    }

    fn field(label: &str, value: &str) -> String {
        Self::line(&format!("  {label:<22}{value}"))
    }

    fn border(left: char, right: char) -> String {
        format!("{left}{}{right}\n", "═".repeat(INNER_WIDTH))
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, outcome: &MiningOutcome) -> Result<String, String> {
        let summary = &outcome.summary;
        let mut out = String::new();

        out.push_str(&Self::border('╔', '╗'));
        out.push_str(&Self::centered("AFFINITY PIPELINE COMPLETE"));
        out.push_str(&Self::border('╠', '╣'));

        let threshold = format!(
            "{:.4} ({})",
            outcome.threshold_used,
            if outcome.fallback_triggered {
                "fallback"
            } else {
                "primary"
            }
        );
        out.push_str(&Self::field("Run date:", &summary.run_date));
        out.push_str(&Self::field(
            "Transactions:",
            &outcome.transaction_count.to_string(),
        ));
        out.push_str(&Self::field(
            "Distinct items:",
            &outcome.universe.len().to_string(),
        ));
        out.push_str(&Self::field("Threshold used:", &threshold));
        out.push_str(&Self::field(
            "Frequent itemsets:",
            &summary.total_itemsets.to_string(),
        ));
        out.push_str(&Self::field(
            "Rules generated:",
            &summary.total_rules.to_string(),
        ));
        out.push_str(&Self::field(
            "Max lift:",
            &format!("{:.2}x", summary.top_lift),
        ));
        out.push_str(&Self::field(
            "Avg lift (top 10):",
            &format!("{:.2}x", summary.avg_lift_top10),
        ));
        out.push_str(&Self::field(
            "Max confidence:",
            &format!("{:.0}%", summary.max_confidence * 100.0),
        ));
        out.push_str(&Self::border('╠', '╣'));

        if outcome.rule_set.is_empty() {
            out.push_str(&Self::line("  NO ASSOCIATIONS ABOVE THE LIFT THRESHOLD"));
        } else {
            out.push_str(&Self::line("  TOP ASSOCIATION:"));
            out.push_str(&Self::line(&format!(
                "  {}",
                truncate(&summary.top_association, INNER_WIDTH - 4)
            )));
            out.push_str(&Self::line(&format!(
                "  Lift: {:.2}x",
                summary.top_lift_value
            )));
            out.push_str(&Self::border('╠', '╣'));
            out.push_str(&Self::line("  TOP RULES:"));
            for (position, rule) in outcome
                .rule_set
                .rules
                .iter()
                .take(CONSOLE_TOP_RULES)
                .enumerate()
            {
                let association = format!(
                    "{} → {}",
                    rule.antecedent.render_labels(&outcome.universe),
                    rule.consequent.render_labels(&outcome.universe)
                );
                out.push_str(&Self::line(&format!(
                    "  {}. {:<32} lift {:>5.2}  conf {:.2}",
                    position + 1,
                    truncate(&association, 32),
                    rule.lift,
                    rule.confidence
                )));
            }
        }

        out.push_str(&Self::border('╠', '╣'));
        let impact = &summary.business_impact;
        out.push_str(&Self::line("  BUSINESS IMPACT:"));
        out.push_str(&Self::line(&format!(
            "  Lift > 5:          {:>4}  (on-site recommendation)",
            impact.high_lift_rules
        )));
        out.push_str(&Self::line(&format!(
            "  Lift 3-5:          {:>4}  (discounted bundle)",
            impact.medium_lift_rules
        )));
        out.push_str(&Self::line(&format!(
            "  Confidence > 0.5:  {:>4}  (checkout trigger)",
            impact.high_confidence_rules
        )));
        out.push_str(&Self::border('╚', '╝'));

        Ok(out)
    }
}

/// Machine-readable summary output, rounded the same way as the summary
/// file export.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, outcome: &MiningOutcome) -> Result<String, String> {
        serde_json::to_string_pretty(&summary_for_export(&outcome.summary))
            .map_err(|e| e.to_string())
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use affinity_mining::{MiningParams, MiningPipeline, Transaction};

    fn outcome_with_rules() -> MiningOutcome {
        let transactions = vec![
            Transaction::new(["COFFEE", "MUG"]),
            Transaction::new(["COFFEE", "MUG"]),
            Transaction::new(["TEA"]),
            Transaction::new(["TEA"]),
        ];
        MiningPipeline::with_defaults()
            .run(&transactions, "2025-06-01")
            .unwrap()
    }

    fn outcome_without_rules() -> MiningOutcome {
        let transactions = vec![
            Transaction::new(["A", "B"]),
            Transaction::new(["A", "B"]),
            Transaction::new(["A", "C"]),
            Transaction::new(["B", "C"]),
            Transaction::new(["A", "B", "C"]),
        ];
        MiningPipeline::with_defaults()
            .run(&transactions, "2025-06-01")
            .unwrap()
    }

    #[test]
    fn test_console_report_content() {
        let outcome = outcome_with_rules();
        let report = ConsoleReporter.generate(&outcome).unwrap();

        assert!(report.contains("AFFINITY PIPELINE COMPLETE"));
        assert!(report.contains("Run date:"));
        assert!(report.contains("2025-06-01"));
        assert!(report.contains("TOP ASSOCIATION:"));
        assert!(report.contains("COFFEE → MUG"));
        assert!(report.contains("BUSINESS IMPACT:"));
        assert!(report.starts_with('╔'));
        assert!(report.trim_end().ends_with('╝'));
    }

    #[test]
    fn test_console_report_without_rules() {
        let outcome = outcome_without_rules();
        let report = ConsoleReporter.generate(&outcome).unwrap();

        assert!(report.contains("NO ASSOCIATIONS ABOVE THE LIFT THRESHOLD"));
        assert!(!report.contains("TOP RULES:"));
    }

    #[test]
    fn test_console_lines_are_uniform_width() {
        let outcome = outcome_with_rules();
        let report = ConsoleReporter.generate(&outcome).unwrap();

        for line in report.lines() {
            assert_eq!(line.chars().count(), INNER_WIDTH + 2, "line: {line}");
        }
    }

    #[test]
    fn test_json_report_is_rounded_summary() {
        let outcome = outcome_with_rules();
        let report = JsonReporter.generate(&outcome).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();

        assert_eq!(value["run_date"], "2025-06-01");
        assert_eq!(value["total_rules"], 2);
        assert_eq!(value["top_lift"], 2.0);
    }

    #[test]
    fn test_create_reporter_dispatch() {
        assert_eq!(create_reporter("console").unwrap().name(), "console");
        assert_eq!(create_reporter("json").unwrap().name(), "json");
        assert!(create_reporter("xml").is_none());
    }

    #[test]
    fn test_truncate_long_association() {
        let long = "X".repeat(100);
        let cut = truncate(&long, 10);
        assert_eq!(cut.chars().count(), 10);
        assert!(cut.ends_with('…'));
    }
}
