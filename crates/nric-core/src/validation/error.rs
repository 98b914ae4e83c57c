//! Validation error types

use thiserror::Error;

use crate::types::{SlotKind, SLOT_COUNT};

/// Errors from talking to the remote validation endpoint
///
/// Variants carry rendered messages so the error can travel inside UI
/// messages (which must be `Clone`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Network failure, timeout or refused connection
    #[error("Transport error: {0}")]
    Transport(String),

    /// Endpoint answered with a non-success status
    #[error("Endpoint returned HTTP {0}")]
    Status(u16),

    /// Response body was not the expected JSON
    #[error("Malformed response: {0}")]
    Decode(String),

    /// Barcode reference could not be turned into image bytes
    #[error("Barcode unavailable: {0}")]
    Barcode(String),
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Input problems caught before anything is sent
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocalInputError {
    #[error("Please fill all {required} positions ({present}/{required} entered).")]
    Incomplete { present: usize, required: usize },

    #[error("'{symbol}' is not a valid {} for position {}.", kind_name(.slot), .slot + 1)]
    IllegalSymbol { slot: usize, symbol: char },
}

fn kind_name(slot: &usize) -> &'static str {
    SlotKind::of(*slot).name()
}

impl LocalInputError {
    pub fn incomplete(present: usize) -> Self {
        Self::Incomplete {
            present,
            required: SLOT_COUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_message_counts() {
        let message = LocalInputError::incomplete(5).to_string();
        assert!(message.contains("5/9"));
    }

    #[test]
    fn test_illegal_symbol_names_position() {
        let message = LocalInputError::IllegalSymbol { slot: 0, symbol: 'X' }.to_string();
        assert_eq!(message, "'X' is not a valid prefix letter for position 1.");
    }
}
