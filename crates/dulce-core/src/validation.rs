//! # Form Checks
//!
//! Checks for the cake customization form and for configured amounts.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cake form submit                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_cake_order(options, qty) ← THIS MODULE                        │
//! │       │                                                                 │
//! │       ├── size / flavor blank?  → Error: "size is required"             │
//! │       ├── message too long?     → Error: "message must be at most 60…"  │
//! │       ├── qty <= 0?             → Error: "quantity must be positive"    │
//! │       ├── qty > 999?            → Error: "quantity must be between…"    │
//! │       │                                                                 │
//! │       └── OK → CartStore::add_custom_item                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart store never validates: a rejected form must not reach it.

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::CakeOptions;
use crate::{MAX_ITEM_QUANTITY, MAX_MESSAGE_CHARS};

/// Result of a single form or config check.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a required text field.
///
/// ## Example
/// ```rust
/// use dulce_core::validation::validate_required;
///
/// assert!(validate_required("size", "Mediano").is_ok());
/// assert!(validate_required("size", "  ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates the message piped onto a cake. Empty is fine.
pub fn validate_message(message: &str) -> ValidationResult<()> {
    if message.trim().chars().count() > MAX_MESSAGE_CHARS {
        return Err(ValidationError::TooLong {
            field: "message".to_string(),
            max: MAX_MESSAGE_CHARS,
        });
    }

    Ok(())
}

/// Quantity typed on the cake form: 1 through [`MAX_ITEM_QUANTITY`].
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a configured price or surcharge. Zero is allowed.
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a whole customization form submission.
pub fn validate_cake_order(options: &CakeOptions, qty: i64) -> ValidationResult<()> {
    validate_required("size", &options.size)?;
    validate_required("flavor", &options.flavor)?;
    validate_message(&options.message)?;
    validate_quantity(qty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_bounds() {
        for ok in [1, 12, MAX_ITEM_QUANTITY] {
            assert!(validate_quantity(ok).is_ok(), "{ok} should pass");
        }

        assert!(matches!(
            validate_quantity(0),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            validate_quantity(-3),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            validate_quantity(MAX_ITEM_QUANTITY + 1),
            Err(ValidationError::OutOfRange { min: 1, .. })
        ));
    }

    #[test]
    fn test_validate_message() {
        assert!(validate_message("").is_ok());
        assert!(validate_message("Feliz cumple!").is_ok());
        assert!(validate_message(&"ñ".repeat(MAX_MESSAGE_CHARS)).is_ok());
        assert!(validate_message(&"a".repeat(MAX_MESSAGE_CHARS + 1)).is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("price", Money::zero()).is_ok());
        assert!(validate_amount("price", Money::from_cents(350)).is_ok());
        assert!(validate_amount("price", Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_cake_order() {
        let ok = CakeOptions::new("Mediano", "Chocolate");
        assert!(validate_cake_order(&ok, 1).is_ok());

        let no_flavor = CakeOptions::new("Mediano", "");
        let err = validate_cake_order(&no_flavor, 1).unwrap_err();
        assert_eq!(err.to_string(), "flavor is required");

        assert!(validate_cake_order(&ok, 0).is_err());
    }
}
