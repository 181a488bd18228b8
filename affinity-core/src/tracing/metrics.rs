//! Structured span field definitions for Affinity metrics.
//!
//! These constants define the standard field names used in tracing spans
//! across the mining pipeline. Using consistent field names enables
//! structured log queries and dashboard construction.

/// Encoder: encoding time in milliseconds.
pub const ENCODE_TIME: &str = "encode_time";

/// Miner: candidates generated at the current level.
pub const LEVEL_CANDIDATES: &str = "candidates";

/// Miner: frequent itemsets kept at the current level.
pub const LEVEL_FREQUENT: &str = "frequent";

/// Miner: total mining time in milliseconds.
pub const MINING_TIME: &str = "mining_time";

/// Rules: rule generation time in milliseconds.
pub const RULE_GENERATION_TIME: &str = "rule_generation_time";

/// Pipeline: end-to-end run time in milliseconds.
pub const PIPELINE_TIME: &str = "pipeline_time";

/// Dataset: rows read from the transactions file.
pub const ROWS_READ: &str = "rows_read";

/// Writers: output write time in milliseconds.
pub const OUTPUT_WRITE_TIME: &str = "output_write_time";
