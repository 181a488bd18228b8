//! Configuration system for Affinity.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod affinity_config;
pub mod data_config;
pub mod mining_config;
pub mod output_config;

pub use affinity_config::{AffinityConfig, CliOverrides};
pub use data_config::DataConfig;
pub use mining_config::MiningConfig;
pub use output_config::OutputConfig;
