//! Shared constants for the Affinity mining engine.

/// Affinity version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default primary minimum support threshold.
pub const DEFAULT_PRIMARY_MIN_SUPPORT: f64 = 0.01;

/// Default fallback minimum support threshold, tried once when the
/// primary threshold yields no frequent itemsets.
pub const DEFAULT_FALLBACK_MIN_SUPPORT: f64 = 0.005;

/// Default maximum itemset size mined.
pub const DEFAULT_MAX_ITEMSET_SIZE: usize = 2;

/// Default minimum lift for a rule to be kept.
pub const DEFAULT_MIN_LIFT: f64 = 1.0;

/// Default for restricting rules to singleton -> singleton pairs.
pub const DEFAULT_ONLY_PAIRS: bool = true;

/// Default number of rules in the top-rules export.
pub const DEFAULT_TOP_RULES: usize = 10;

/// Default label normalization (trim + uppercase).
pub const DEFAULT_NORMALIZE_LABELS: bool = true;

// ---- Business-impact bands ----

/// Rules with lift above this count as high-lift.
pub const HIGH_LIFT_BAND: f64 = 5.0;

/// Lower bound of the medium-lift band (inclusive).
pub const MEDIUM_LIFT_BAND_LOW: f64 = 3.0;

/// Rules with confidence above this count as high-confidence.
pub const HIGH_CONFIDENCE_BAND: f64 = 0.5;

// ---- Default file and column names ----

/// Preferred transactions file, looked for first in the data directory.
pub const FRESH_TRANSACTIONS_FILE: &str = "fresh_transactions.csv";

/// Baseline transactions file, used when the fresh file is absent.
pub const DEFAULT_BASELINE_FILE: &str = "Reviews.csv";

/// Default transaction-id column in grouped CSV input.
pub const DEFAULT_TRANSACTION_COLUMN: &str = "transaction_id";

/// Default item-label column in grouped CSV input.
pub const DEFAULT_ITEM_COLUMN: &str = "item";

/// Output file: all ranked association rules.
pub const RULES_OUTPUT_FILE: &str = "association_rules.csv";

/// Output file: all frequent itemsets across levels.
pub const ITEMSETS_OUTPUT_FILE: &str = "frequent_itemsets.csv";

/// Output file: executive summary JSON.
pub const SUMMARY_OUTPUT_FILE: &str = "pipeline_summary.json";

/// Output file: top-N ranked rules.
pub const TOP_RULES_OUTPUT_FILE: &str = "top10_rules.csv";

/// Separator used when rendering an itemset as a label string.
pub const ITEMSET_LABEL_SEPARATOR: &str = ", ";
