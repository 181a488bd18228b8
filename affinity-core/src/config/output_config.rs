//! Output configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for result files.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory where result files are written. Default: "output".
    pub output_dir: Option<String>,
    /// Number of rules in the top-rules export. Default: 10.
    pub top_rules: Option<usize>,
}

impl OutputConfig {
    /// Returns the effective output directory, defaulting to "output".
    pub fn effective_output_dir(&self) -> &str {
        self.output_dir.as_deref().unwrap_or("output")
    }

    /// Returns the effective top-rules count, defaulting to 10.
    pub fn effective_top_rules(&self) -> usize {
        self.top_rules.unwrap_or(constants::DEFAULT_TOP_RULES)
    }
}
