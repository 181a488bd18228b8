//! affinity-core: Shared foundation for the Affinity mining engine
//!
//! This crate provides the cross-cutting pieces used by every Affinity
//! subsystem:
//! - Constants: mining defaults, band cutoffs, file names
//! - Types: dense item IDs and performance-oriented collections
//! - Errors: one `thiserror` enum per subsystem with stable error codes
//! - Config: TOML-based 4-layer resolution (CLI > env > project > user)
//! - Events: observer trait with no-op defaults and panic-isolated dispatch
//! - Tracing: `AFFINITY_LOG` filtered structured logging

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;

// Re-exports for convenience
pub use config::{AffinityConfig, CliOverrides, DataConfig, MiningConfig, OutputConfig};
pub use errors::{
    AffinityErrorCode, ConfigError, DataError, EncodeError, MiningError, PipelineError,
};
pub use events::{EventDispatcher, MiningEventHandler};
pub use types::ItemId;
