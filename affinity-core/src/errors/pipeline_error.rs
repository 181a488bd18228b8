//! Pipeline errors aggregating subsystem errors.

use super::error_code::AffinityErrorCode;
use super::{ConfigError, DataError, EncodeError, MiningError};

/// Errors that can occur during a full pipeline run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Encoding error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Mining error: {0}")]
    Mining(#[from] MiningError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),
}

impl AffinityErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Encode(e) => e.error_code(),
            Self::Mining(e) => e.error_code(),
            Self::Data(e) => e.error_code(),
        }
    }
}
