//! Mining parameter errors.

use super::error_code::{self, AffinityErrorCode};

/// Errors raised when mining parameters are rejected before any mining runs.
#[derive(Debug, thiserror::Error)]
pub enum MiningError {
    #[error("Invalid mining parameter {field}: {message}")]
    InvalidParameter { field: String, message: String },
}

impl AffinityErrorCode for MiningError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_PARAMETER
    }
}
