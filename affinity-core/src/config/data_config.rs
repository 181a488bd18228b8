//! Input data configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for transaction data loading.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DataConfig {
    /// Directory searched for transaction files. Default: ".".
    pub data_dir: Option<String>,
    /// Baseline file name, used when the fresh file is absent. Default: "Reviews.csv".
    pub baseline_file: Option<String>,
    /// Transaction-id column in grouped CSV input. Default: "transaction_id".
    pub transaction_column: Option<String>,
    /// Item-label column in grouped CSV input. Default: "item".
    pub item_column: Option<String>,
    /// Trim and uppercase item labels. Default: true.
    pub normalize_labels: Option<bool>,
}

impl DataConfig {
    /// Returns the effective data directory, defaulting to the working directory.
    pub fn effective_data_dir(&self) -> &str {
        self.data_dir.as_deref().unwrap_or(".")
    }

    /// Returns the effective baseline file name.
    pub fn effective_baseline_file(&self) -> &str {
        self.baseline_file
            .as_deref()
            .unwrap_or(constants::DEFAULT_BASELINE_FILE)
    }

    /// Returns the effective transaction-id column name.
    pub fn effective_transaction_column(&self) -> &str {
        self.transaction_column
            .as_deref()
            .unwrap_or(constants::DEFAULT_TRANSACTION_COLUMN)
    }

    /// Returns the effective item-label column name.
    pub fn effective_item_column(&self) -> &str {
        self.item_column
            .as_deref()
            .unwrap_or(constants::DEFAULT_ITEM_COLUMN)
    }

    /// Returns whether labels are normalized, defaulting to true.
    pub fn effective_normalize_labels(&self) -> bool {
        self.normalize_labels
            .unwrap_or(constants::DEFAULT_NORMALIZE_LABELS)
    }
}
