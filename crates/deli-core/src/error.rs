//! # Error Types
//!
//! Domain-specific error types for deli-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  deli-core errors (this file)                                          │
//! │  ├── CoreError        - Checkout rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  deli-receipts errors (separate crate)                                 │
//! │  └── ReceiptError     - Receipt write failures                         │
//! │                                                                         │
//! │  Console errors (in app)                                               │
//! │  └── CliError         - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → Screen message         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pricing and rendering are total over their inputs and never fail. Only
//! checkout and raw console input produce errors.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations detected at checkout.
///
/// These are recoverable: the order is left untouched and the customer
/// can keep editing it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Checkout attempted with nothing in the order.
    #[error("Your order is empty. Please add items first.")]
    EmptyOrder,

    /// No sandwich, and no drink or chips either.
    #[error("If you don't order a sandwich, you must order chips or a drink.")]
    MissingSideItem,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the console before any topping or product is constructed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
