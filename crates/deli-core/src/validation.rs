//! # Validation Module
//!
//! Input checks the console runs before building a topping or product.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console input parsing                                        │
//! │  ├── Non-numeric menu input → re-prompt                                │
//! │  └── Non y/n answers → re-prompt                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Menu choice within 1..=N                                          │
//! │  └── Free-text flavor / chip type present and bounded                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Model types                                                  │
//! │  └── Closed enums: a malformed value cannot be represented             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use deli_core::validation::{validate_flavor, validate_menu_choice};
//!
//! assert_eq!(validate_flavor("flavor", "  Coke ").unwrap(), "Coke");
//! assert_eq!(validate_menu_choice(2, 4).unwrap(), 1);
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted drink flavor or chip type.
pub const MAX_FLAVOR_LEN: usize = 50;

/// Validates free text such as a drink flavor or chip type.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_FLAVOR_LEN`] characters
///
/// ## Returns
/// The trimmed text.
pub fn validate_flavor(field: &str, text: &str) -> ValidationResult<String> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if text.chars().count() > MAX_FLAVOR_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_FLAVOR_LEN,
        });
    }

    Ok(text.to_string())
}

/// Validates a 1-based menu choice against a list of `option_count` entries.
///
/// ## Returns
/// The zero-based index into the option list.
///
/// ```rust
/// use deli_core::validation::validate_menu_choice;
///
/// assert_eq!(validate_menu_choice(1, 3), Ok(0));
/// assert!(validate_menu_choice(4, 3).is_err());
/// ```
pub fn validate_menu_choice(choice: i64, option_count: usize) -> ValidationResult<usize> {
    let max = i64::try_from(option_count).unwrap_or(i64::MAX);

    if choice < 1 || choice > max {
        return Err(ValidationError::OutOfRange {
            field: "choice".to_string(),
            min: 1,
            max,
        });
    }

    // choice is within 1..=option_count here
    usize::try_from(choice - 1).map_err(|_| ValidationError::OutOfRange {
        field: "choice".to_string(),
        min: 1,
        max,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_flavor() {
        assert_eq!(validate_flavor("flavor", "Lemonade"), Ok("Lemonade".to_string()));
        assert_eq!(validate_flavor("flavor", "  Dr Pepper\t"), Ok("Dr Pepper".to_string()));

        assert!(matches!(
            validate_flavor("flavor", ""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_flavor("chip type", "   "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_flavor("flavor", &"A".repeat(51)),
            Err(ValidationError::TooLong { max: 50, .. })
        ));
    }

    #[test]
    fn test_validate_menu_choice() {
        assert_eq!(validate_menu_choice(1, 6), Ok(0));
        assert_eq!(validate_menu_choice(6, 6), Ok(5));

        assert!(validate_menu_choice(0, 6).is_err());
        assert!(validate_menu_choice(-1, 6).is_err());
        assert!(validate_menu_choice(7, 6).is_err());
        assert!(validate_menu_choice(1, 0).is_err());
    }
}
