//! # Console Error Type
//!
//! Unified error type for the console screens.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in DELI-cious POS                         │
//! │                                                                         │
//! │  Screen function                                                       │
//! │  Result<T, CliError>                                                   │
//! │         │                                                               │
//! │         ├── ValidationError ─── bad flavor / chip type ──┐             │
//! │         ├── CoreError ───────── order fails checkout ────┤             │
//! │         ├── ReceiptError ────── receipt not written ─────┼─► message   │
//! │         │                                                │   printed,  │
//! │         │                                                │   screen    │
//! │         │                                                │   continues │
//! │         ├── io::Error ───────── terminal broke ──────────┐             │
//! │         └── InputClosed ─────── stdin reached EOF ───────┼─► session   │
//! │                                                          │   ends      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only `Io` and `InputClosed` escape the screens. The others are shown to
//! the operator and the current screen carries on.

use deli_core::{CoreError, ValidationError};
use deli_receipts::ReceiptError;
use std::io;
use thiserror::Error;

/// Error surfaced by a console screen.
#[derive(Debug, Error)]
#[error("[{code:?}] {message}")]
pub struct CliError {
    /// Machine-readable category, used for logging and for deciding
    /// whether the session can continue.
    pub code: ErrorCode,

    /// Operator-facing text.
    pub message: String,
}

/// Error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Free-text input rejected
    Validation,

    /// Order failed the checkout rules
    InvalidOrder,

    /// Receipt could not be written
    ReceiptFailed,

    /// Terminal read or write failed
    Io,

    /// Input stream ended
    InputClosed,
}

/// Result type for console operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    /// Stdin reached end of file.
    pub fn input_closed() -> Self {
        CliError::new(ErrorCode::InputClosed, "Input closed")
    }

    pub fn is_input_closed(&self) -> bool {
        self.code == ErrorCode::InputClosed
    }
}

/// Converts validation errors into the short messages the counter shows.
impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        let message = match &err {
            ValidationError::Required { field } => format!("{} cannot be empty.", field),
            ValidationError::TooLong { .. } | ValidationError::OutOfRange { .. } => err.to_string(),
        };
        CliError::new(ErrorCode::Validation, message)
    }
}

/// Converts checkout rule violations.
impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EmptyOrder => CliError::new(ErrorCode::InvalidOrder, err.to_string()),
            CoreError::MissingSideItem => {
                CliError::new(ErrorCode::InvalidOrder, format!("Invalid order: {}", err))
            }
            CoreError::Validation(e) => CliError::from(e),
        }
    }
}

/// Converts receipt failures. The detail goes to the log as well.
impl From<ReceiptError> for CliError {
    fn from(err: ReceiptError) -> Self {
        tracing::error!(path = %err.path().display(), "receipt save failed: {}", err);
        CliError::new(ErrorCode::ReceiptFailed, format!("Error saving receipt: {}", err))
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        tracing::error!("terminal I/O failed: {}", err);
        CliError::new(ErrorCode::Io, format!("Terminal error: {}", err))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_core_error_messages() {
        let err = CliError::from(CoreError::EmptyOrder);
        assert_eq!(err.code, ErrorCode::InvalidOrder);
        assert_eq!(err.message, "Your order is empty. Please add items first.");

        let err = CliError::from(CoreError::MissingSideItem);
        assert_eq!(
            err.message,
            "Invalid order: If you don't order a sandwich, you must order chips or a drink."
        );
    }

    #[test]
    fn test_required_field_message() {
        let err = CliError::from(ValidationError::Required {
            field: "Flavor".to_string(),
        });
        assert_eq!(err.code, ErrorCode::Validation);
        assert_eq!(err.message, "Flavor cannot be empty.");
    }

    #[test]
    fn test_receipt_error_message() {
        let err = CliError::from(ReceiptError::Write {
            path: PathBuf::from("receipts/20240315-143052.txt"),
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        });
        assert_eq!(err.code, ErrorCode::ReceiptFailed);
        assert!(err.message.starts_with("Error saving receipt: "));
        assert!(err.message.contains("disk full"));
    }

    #[test]
    fn test_input_closed() {
        let err = CliError::input_closed();
        assert!(err.is_input_closed());
        assert_eq!(err.to_string(), "[InputClosed] Input closed");
    }
}
