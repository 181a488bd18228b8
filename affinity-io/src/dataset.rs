//! Transaction dataset loading.
//!
//! Sources are tried in order: the fresh transactions file first, then
//! the configured baseline file. The input format is grouped CSV: one
//! row per (transaction id, item label) pair, grouped by id value, so
//! rows of one transaction do not have to be adjacent.

use std::path::{Path, PathBuf};

use affinity_core::config::DataConfig;
use affinity_core::constants::FRESH_TRANSACTIONS_FILE;
use affinity_core::errors::DataError;
use affinity_mining::Transaction;
use rustc_hash::FxHashMap;

use crate::csv;

/// Which source file a dataset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Fresh,
    Baseline,
}

/// Loaded transactions plus provenance.
#[derive(Debug)]
pub struct LoadedDataset {
    pub transactions: Vec<Transaction>,
    pub source: SourceKind,
    pub path: PathBuf,
    /// Data rows read, header excluded.
    pub rows_read: usize,
}

/// Load transactions from the configured data directory.
///
/// Prefers `fresh_transactions.csv`; falls back to the baseline file.
/// Neither present is `DataError::NoDatasetFound`.
pub fn load_transactions(config: &DataConfig) -> Result<LoadedDataset, DataError> {
    let dir = Path::new(config.effective_data_dir());
    let fresh = dir.join(FRESH_TRANSACTIONS_FILE);
    let baseline = dir.join(config.effective_baseline_file());

    let (path, source) = if fresh.is_file() {
        tracing::info!(path = %fresh.display(), "fresh transactions found");
        (fresh, SourceKind::Fresh)
    } else if baseline.is_file() {
        tracing::warn!(
            path = %baseline.display(),
            "fresh transactions absent, falling back to baseline dataset"
        );
        (baseline, SourceKind::Baseline)
    } else {
        return Err(DataError::NoDatasetFound {
            dir: dir.to_path_buf(),
            tried: vec![
                FRESH_TRANSACTIONS_FILE.to_string(),
                config.effective_baseline_file().to_string(),
            ],
        });
    };

    let content = std::fs::read_to_string(&path).map_err(|source| DataError::ReadFailed {
        path: path.clone(),
        source,
    })?;
    let records = parse_records(&content, &path)?;
    let transactions = group_records(&records, &path, config)?;
    let rows_read = records.len().saturating_sub(1);

    tracing::info!(
        rows_read,
        transactions = transactions.len(),
        source = ?source,
        "dataset loaded"
    );

    Ok(LoadedDataset {
        transactions,
        source,
        path,
        rows_read,
    })
}

/// Parse grouped CSV content into transactions.
///
/// Rows are grouped by the transaction-id column value; transactions come
/// out in first-appearance order. Labels that are blank after
/// normalization are dropped, but the transaction they belonged to keeps
/// its row so support denominators stay honest.
pub fn parse_grouped_csv(
    content: &str,
    path: &Path,
    config: &DataConfig,
) -> Result<Vec<Transaction>, DataError> {
    let records = parse_records(content, path)?;
    group_records(&records, path, config)
}

fn parse_records(content: &str, path: &Path) -> Result<Vec<csv::Record>, DataError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    csv::parse(content).map_err(|e| DataError::MalformedRecord {
        path: path.to_path_buf(),
        line: e.line,
        message: e.message,
    })
}

fn group_records(
    records: &[csv::Record],
    path: &Path,
    config: &DataConfig,
) -> Result<Vec<Transaction>, DataError> {
    let header = records.first().ok_or_else(|| DataError::MalformedRecord {
        path: path.to_path_buf(),
        line: 1,
        message: "missing header row".to_string(),
    })?;

    let tx_column = config.effective_transaction_column();
    let item_column = config.effective_item_column();
    let tx_index = column_index(header, tx_column, path)?;
    let item_index = column_index(header, item_column, path)?;
    let needed = tx_index.max(item_index) + 1;
    let uppercase = config.effective_normalize_labels();

    let mut baskets: Vec<Vec<String>> = Vec::new();
    let mut slots: FxHashMap<String, usize> = FxHashMap::default();

    for record in records.iter().skip(1) {
        if record.fields.len() < needed {
            return Err(DataError::MalformedRecord {
                path: path.to_path_buf(),
                line: record.line,
                message: format!(
                    "expected at least {needed} fields, found {}",
                    record.fields.len()
                ),
            });
        }
        let id = &record.fields[tx_index];
        let label = normalize_label(&record.fields[item_index], uppercase);

        let slot = *slots.entry(id.clone()).or_insert_with(|| {
            baskets.push(Vec::new());
            baskets.len() - 1
        });
        if !label.is_empty() {
            baskets[slot].push(label);
        }
    }

    Ok(baskets.into_iter().map(Transaction::new).collect())
}

fn column_index(
    header: &csv::Record,
    column: &str,
    path: &Path,
) -> Result<usize, DataError> {
    header
        .fields
        .iter()
        .position(|field| field == column)
        .ok_or_else(|| DataError::MalformedRecord {
            path: path.to_path_buf(),
            line: header.line,
            message: format!("missing column '{column}' in header"),
        })
}

/// Trim the label; uppercase it when normalization is on.
fn normalize_label(raw: &str, uppercase: bool) -> String {
    let trimmed = raw.trim();
    if uppercase {
        trimmed.to_uppercase()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("  candle \t", true), "CANDLE");
        assert_eq!(normalize_label("  candle \t", false), "candle");
        assert_eq!(normalize_label("   ", true), "");
    }

    fn config() -> DataConfig {
        DataConfig::default()
    }

    #[test]
    fn test_grouping_by_id_not_adjacency() {
        let content = "transaction_id,item\n1,milk\n2,bread\n1,eggs\n";
        let transactions =
            parse_grouped_csv(content, Path::new("t.csv"), &config()).unwrap();

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].items, vec!["MILK", "EGGS"]);
        assert_eq!(transactions[1].items, vec!["BREAD"]);
    }

    #[test]
    fn test_blank_labels_drop_but_row_survives() {
        let content = "transaction_id,item\n1,   \n2,bread\n";
        let transactions =
            parse_grouped_csv(content, Path::new("t.csv"), &config()).unwrap();

        assert_eq!(transactions.len(), 2);
        assert!(transactions[0].items.is_empty());
        assert_eq!(transactions[1].items, vec!["BREAD"]);
    }

    #[test]
    fn test_missing_column_is_malformed() {
        let content = "invoice,product\n1,milk\n";
        let err = parse_grouped_csv(content, Path::new("t.csv"), &config()).unwrap_err();
        assert!(matches!(
            err,
            DataError::MalformedRecord { line: 1, .. }
        ));
        assert!(err.to_string().contains("transaction_id"));
    }

    #[test]
    fn test_short_row_is_malformed() {
        let content = "transaction_id,item\n1,milk\n77\n";
        let err = parse_grouped_csv(content, Path::new("t.csv"), &config()).unwrap_err();
        assert!(matches!(
            err,
            DataError::MalformedRecord { line: 3, .. }
        ));
    }

    #[test]
    fn test_extra_columns_ignored() {
        let content = "country,transaction_id,qty,item\nUK,1,3,milk\nUK,1,1,bread\n";
        let transactions =
            parse_grouped_csv(content, Path::new("t.csv"), &config()).unwrap();
        assert_eq!(transactions[0].items, vec!["MILK", "BREAD"]);
    }

    #[test]
    fn test_bom_stripped_from_header() {
        let content = "\u{feff}transaction_id,item\n1,milk\n";
        let transactions =
            parse_grouped_csv(content, Path::new("t.csv"), &config()).unwrap();
        assert_eq!(transactions.len(), 1);
    }
}
