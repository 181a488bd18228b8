//! AffinityErrorCode trait for structured error reporting.

/// Trait for converting Affinity errors to stable error codes.
/// Every error enum must implement this to provide a structured
/// error code string for CLI and log consumption.
pub trait AffinityErrorCode {
    /// Returns the error code string (e.g., "EMPTY_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn format_with_code(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the CLI boundary.
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const EMPTY_INPUT: &str = "EMPTY_INPUT";
pub const INVALID_PARAMETER: &str = "INVALID_PARAMETER";
pub const NO_DATASET: &str = "NO_DATASET";
pub const MALFORMED_RECORD: &str = "MALFORMED_RECORD";
pub const READ_FAILED: &str = "READ_FAILED";
pub const WRITE_FAILED: &str = "WRITE_FAILED";
pub const PIPELINE_ERROR: &str = "PIPELINE_ERROR";
