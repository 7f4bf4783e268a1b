//! # Error Types
//!
//! Domain-specific error types for dulce-core.
//!
//! ## Where Errors Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront Errors                                    │
//! │                                                                         │
//! │  dulce-core errors (this file)                                          │
//! │  ├── CoreError        - Catalog lookups, wraps validation              │
//! │  └── ValidationError  - Customization form failures                    │
//! │                                                                         │
//! │  dulce-checkout errors (separate crate)                                 │
//! │  └── CheckoutError    - Config, transport, rejected orders             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CheckoutError → user notice        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart store itself never fails: operations on absent rows are silent
//! no-ops. Errors only come from the catalog and the customization form.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Failures of catalog lookups and form checks.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A product button carried an id the catalog does not list, e.g. a
    /// stale page showing something taken off the menu.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The customization form was rejected.
    #[error("Invalid cake order: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// A single field that failed its check.
///
/// The `Display` text is what the shopper reads next to the form. Raised
/// before the cart is touched, so a rejected form leaves the cart as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Size or flavor left blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Message longer than the cake can carry.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Quantity above the per-row limit.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Quantity of zero or less.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// A configured price or surcharge below zero.
    #[error("{field} must not be negative")]
    Negative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result of catalog and form operations.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
