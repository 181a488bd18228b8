//! Top-level Affinity configuration with 4-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DataConfig, MiningConfig, OutputConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`AFFINITY_*`)
/// 3. Project config (`affinity.toml` in the working directory)
/// 4. User config (`~/.affinity/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AffinityConfig {
    pub mining: MiningConfig,
    pub data: DataConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Explicit project config file, replacing the `affinity.toml` lookup.
    pub config_file: Option<String>,
    pub data_dir: Option<String>,
    pub output_dir: Option<String>,
    pub primary_min_support: Option<f64>,
    pub fallback_min_support: Option<f64>,
    pub max_itemset_size: Option<usize>,
    pub min_lift: Option<f64>,
    pub only_pairs: Option<bool>,
    pub top_rules: Option<usize>,
}

impl AffinityConfig {
    /// Load configuration with 4-layer resolution.
    ///
    /// Resolution order (highest priority first):
    /// 1. CLI flags
    /// 2. Environment variables (`AFFINITY_*`)
    /// 3. Project config (`affinity.toml` in `root`, or the file named by
    ///    `CliOverrides::config_file`)
    /// 4. User config (`~/.affinity/config.toml`)
    /// 5. Compiled defaults
    pub fn load(
        root: &Path,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(_) => {
                        // Non-parse errors from user config are warnings, not fatal.
                        // Continue with defaults.
                    }
                }
            }
        }

        // Layer 3: project config. An explicit --config file must exist;
        // the default affinity.toml lookup is optional.
        let explicit_file = cli_overrides.and_then(|cli| cli.config_file.as_deref());
        if let Some(file) = explicit_file {
            let path = Path::new(file);
            if !path.exists() {
                return Err(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            Self::merge_toml_file(&mut config, path)?;
        } else {
            let project_config_path = root.join("affinity.toml");
            if project_config_path.exists() {
                Self::merge_toml_file(&mut config, &project_config_path)?;
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        // Validate the final config
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    ///
    /// Support thresholds must lie in (0, 1], the fallback threshold must be
    /// strictly below the primary, lift must be non-negative, and the size
    /// and count knobs must be at least 1.
    pub fn validate(config: &AffinityConfig) -> Result<(), ConfigError> {
        if let Some(support) = config.mining.primary_min_support {
            if !(support > 0.0 && support <= 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "mining.primary_min_support".to_string(),
                    message: "must be in (0.0, 1.0]".to_string(),
                });
            }
        }
        if let Some(support) = config.mining.fallback_min_support {
            if !(support > 0.0 && support <= 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "mining.fallback_min_support".to_string(),
                    message: "must be in (0.0, 1.0]".to_string(),
                });
            }
        }
        if config.mining.effective_fallback_min_support()
            >= config.mining.effective_primary_min_support()
        {
            return Err(ConfigError::ValidationFailed {
                field: "mining.fallback_min_support".to_string(),
                message: "must be strictly below mining.primary_min_support"
                    .to_string(),
            });
        }
        if let Some(min_lift) = config.mining.min_lift {
            if min_lift < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "mining.min_lift".to_string(),
                    message: "must be non-negative".to_string(),
                });
            }
        }
        if let Some(max_size) = config.mining.max_itemset_size {
            if max_size == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "mining.max_itemset_size".to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
        }
        if let Some(top_rules) = config.output.top_rules {
            if top_rules == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "output.top_rules".to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.affinity/config.toml`.
    fn user_config_path() -> Option<std::path::PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut AffinityConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| {
            ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
        })?;

        let file_config: AffinityConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut AffinityConfig, other: &AffinityConfig) {
        // Mining
        if other.mining.primary_min_support.is_some() {
            base.mining.primary_min_support = other.mining.primary_min_support;
        }
        if other.mining.fallback_min_support.is_some() {
            base.mining.fallback_min_support = other.mining.fallback_min_support;
        }
        if other.mining.max_itemset_size.is_some() {
            base.mining.max_itemset_size = other.mining.max_itemset_size;
        }
        if other.mining.min_lift.is_some() {
            base.mining.min_lift = other.mining.min_lift;
        }
        if other.mining.only_pairs.is_some() {
            base.mining.only_pairs = other.mining.only_pairs;
        }

        // Data
        if other.data.data_dir.is_some() {
            base.data.data_dir = other.data.data_dir.clone();
        }
        if other.data.baseline_file.is_some() {
            base.data.baseline_file = other.data.baseline_file.clone();
        }
        if other.data.transaction_column.is_some() {
            base.data.transaction_column = other.data.transaction_column.clone();
        }
        if other.data.item_column.is_some() {
            base.data.item_column = other.data.item_column.clone();
        }
        if other.data.normalize_labels.is_some() {
            base.data.normalize_labels = other.data.normalize_labels;
        }

        // Output
        if other.output.output_dir.is_some() {
            base.output.output_dir = other.output.output_dir.clone();
        }
        if other.output.top_rules.is_some() {
            base.output.top_rules = other.output.top_rules;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `AFFINITY_MINING_PRIMARY_MIN_SUPPORT`, `AFFINITY_DATA_DIR`, etc.
    fn apply_env_overrides(config: &mut AffinityConfig) {
        if let Ok(val) = std::env::var("AFFINITY_MINING_PRIMARY_MIN_SUPPORT") {
            if let Ok(v) = val.parse::<f64>() {
                config.mining.primary_min_support = Some(v);
            }
        }
        if let Ok(val) = std::env::var("AFFINITY_MINING_FALLBACK_MIN_SUPPORT") {
            if let Ok(v) = val.parse::<f64>() {
                config.mining.fallback_min_support = Some(v);
            }
        }
        if let Ok(val) = std::env::var("AFFINITY_MINING_MAX_ITEMSET_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                config.mining.max_itemset_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("AFFINITY_MINING_MIN_LIFT") {
            if let Ok(v) = val.parse::<f64>() {
                config.mining.min_lift = Some(v);
            }
        }
        if let Ok(val) = std::env::var("AFFINITY_MINING_ONLY_PAIRS") {
            if let Ok(v) = val.parse::<bool>() {
                config.mining.only_pairs = Some(v);
            }
        }
        if let Ok(val) = std::env::var("AFFINITY_DATA_DIR") {
            config.data.data_dir = Some(val);
        }
        if let Ok(val) = std::env::var("AFFINITY_DATA_BASELINE_FILE") {
            config.data.baseline_file = Some(val);
        }
        if let Ok(val) = std::env::var("AFFINITY_OUTPUT_DIR") {
            config.output.output_dir = Some(val);
        }
        if let Ok(val) = std::env::var("AFFINITY_OUTPUT_TOP_RULES") {
            if let Ok(v) = val.parse::<usize>() {
                config.output.top_rules = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut AffinityConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.data_dir {
            config.data.data_dir = Some(v.clone());
        }
        if let Some(ref v) = cli.output_dir {
            config.output.output_dir = Some(v.clone());
        }
        if let Some(v) = cli.primary_min_support {
            config.mining.primary_min_support = Some(v);
        }
        if let Some(v) = cli.fallback_min_support {
            config.mining.fallback_min_support = Some(v);
        }
        if let Some(v) = cli.max_itemset_size {
            config.mining.max_itemset_size = Some(v);
        }
        if let Some(v) = cli.min_lift {
            config.mining.min_lift = Some(v);
        }
        if let Some(v) = cli.only_pairs {
            config.mining.only_pairs = Some(v);
        }
        if let Some(v) = cli.top_rules {
            config.output.top_rules = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level affinity config directory: `~/.affinity/`.
fn dirs_path() -> Option<std::path::PathBuf> {
    home_dir().map(|h| h.join(".affinity"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from)
}
