//! Dataset loading and output writing errors.

use std::path::PathBuf;

use super::error_code::{self, AffinityErrorCode};

/// Errors that can occur while loading transaction data or writing results.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("No dataset found in {}: tried {tried:?}", dir.display())]
    NoDatasetFound { dir: PathBuf, tried: Vec<String> },

    #[error("IO error reading {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed record in {} at line {line}: {message}", path.display())]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("IO error writing {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl AffinityErrorCode for DataError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoDatasetFound { .. } => error_code::NO_DATASET,
            Self::ReadFailed { .. } => error_code::READ_FAILED,
            Self::MalformedRecord { .. } => error_code::MALFORMED_RECORD,
            Self::WriteFailed { .. } => error_code::WRITE_FAILED,
        }
    }
}
