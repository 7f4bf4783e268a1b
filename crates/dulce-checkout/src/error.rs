//! # Checkout Error Types
//!
//! Error types for configuration, form commands and order submission.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Checkout Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Commands      │  │     Submission          │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Validation     │  │  Transport              │ │
//! │  │  InvalidUrl     │  │  UnknownProduct │  │  Rejected (status)      │ │
//! │  │  ConfigLoad…    │  │                 │  │  InvalidResponse        │ │
//! │  │                 │  │                 │  │  EmptyCart / InProgress │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## User-Facing Text
//! Submission failures reach the shopper as one line,
//! `Could not place order: <user_message()>`. A rejected order shows the
//! server's body text when there is one, else `Request failed with status N`.

use dulce_core::{CoreError, ValidationError};
use thiserror::Error;

/// Result type alias for checkout operations.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

/// Checkout error type.
#[derive(Debug, Error)]
pub enum CheckoutError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid configuration value.
    #[error("Invalid checkout configuration: {0}")]
    InvalidConfig(String),

    /// Endpoint URL does not parse or is not http(s).
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    /// Failed to read or parse the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    // =========================================================================
    // Command Errors
    // =========================================================================
    /// The customization form was rejected.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Product button for an id the catalog does not list.
    #[error("Product not found: {0}")]
    UnknownProduct(String),

    // =========================================================================
    // Submission Errors
    // =========================================================================
    /// Checkout pressed with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// A submission is already outstanding.
    #[error("An order is already being placed")]
    SubmissionInProgress,

    /// Network-level failure (DNS, refused connection, reset...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("Order rejected with status {status}")]
    Rejected { status: u16, body: String },

    /// Success status, but the body is not a receipt.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl CheckoutError {
    /// The text shown to the shopper.
    ///
    /// ## Example
    /// ```rust
    /// use dulce_checkout::CheckoutError;
    ///
    /// let err = CheckoutError::Rejected { status: 500, body: String::new() };
    /// assert_eq!(err.user_message(), "Request failed with status 500");
    ///
    /// let err = CheckoutError::Rejected { status: 400, body: "Invalid item id: pan".into() };
    /// assert_eq!(err.user_message(), "Invalid item id: pan");
    /// ```
    pub fn user_message(&self) -> String {
        match self {
            CheckoutError::Rejected { status, body } => {
                let body = body.trim();
                if body.is_empty() {
                    format!("Request failed with status {status}")
                } else {
                    body.to_string()
                }
            }
            CheckoutError::Transport(detail) => detail.clone(),
            other => other.to_string(),
        }
    }

    /// True for failures of the POST itself (the cart is kept for a retry).
    pub fn is_submission_failure(&self) -> bool {
        matches!(
            self,
            CheckoutError::Transport(_)
                | CheckoutError::Rejected { .. }
                | CheckoutError::InvalidResponse(_)
        )
    }
}

impl From<CoreError> for CheckoutError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => CheckoutError::UnknownProduct(id),
            CoreError::Validation(e) => CheckoutError::Validation(e),
        }
    }
}

impl From<reqwest::Error> for CheckoutError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CheckoutError::InvalidResponse(err.to_string())
        } else {
            CheckoutError::Transport(err.to_string())
        }
    }
}

impl From<std::io::Error> for CheckoutError {
    fn from(err: std::io::Error) -> Self {
        CheckoutError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for CheckoutError {
    fn from(err: toml::de::Error) -> Self {
        CheckoutError::ConfigLoadFailed(err.to_string())
    }
}

impl From<url::ParseError> for CheckoutError {
    fn from(err: url::ParseError) -> Self {
        CheckoutError::InvalidUrl(err.to_string())
    }
}
