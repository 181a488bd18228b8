//! Transaction encoding errors.

use super::error_code::{self, AffinityErrorCode};

/// Errors that can occur while encoding transactions into the boolean matrix.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error(
        "Cannot encode empty input: {transaction_count} transactions, \
         {distinct_items} distinct items"
    )]
    EmptyInput {
        transaction_count: usize,
        distinct_items: usize,
    },
}

impl AffinityErrorCode for EncodeError {
    fn error_code(&self) -> &'static str {
        error_code::EMPTY_INPUT
    }
}
