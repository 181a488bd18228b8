//! affinity-io: Dataset loading and output writing for the Affinity engine
//!
//! Everything that touches the filesystem lives here, keeping the mining
//! crate pure:
//! - CSV: hand-rolled RFC-4180 parser and writer (quoted fields, CRLF)
//! - Dataset: fresh-then-baseline discovery, row grouping, label cleanup
//! - Writers: rules/itemsets CSVs plus the rounded summary JSON
//! - Report: console box report and JSON summary behind a `Reporter` trait

pub mod csv;
pub mod dataset;
pub mod report;
pub mod writers;

// Re-exports for convenience
pub use dataset::{load_transactions, parse_grouped_csv, LoadedDataset, SourceKind};
pub use report::{available_formats, create_reporter, ConsoleReporter, JsonReporter, Reporter};
pub use writers::{summary_for_export, write_outputs};
