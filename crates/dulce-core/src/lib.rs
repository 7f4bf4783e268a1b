//! # dulce-core: Pure Cart & Pricing Logic for the Dulce Storefront
//!
//! This crate holds the cart state machine and the cake pricing rules as
//! plain, deterministic code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Dulce Storefront Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation (terminal / web widget)               │   │
//! │  │   Product buttons ──► Cart table ──► Cake form ──► Buy button   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartCommand                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                dulce-checkout (session + HTTP)                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ dulce-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  pricing  │  │   cart    │  │  catalog  │  │   │
//! │  │   │   Money   │  │ PriceTable│  │ CartStore │  │  Product  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO ASYNC • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Line items, cake options and the `/api/buy` wire shapes
//! - [`pricing`] - Price tables and the cake price resolver
//! - [`cart`] - The cart store
//! - [`catalog`] - Standard products and the customizable cake
//! - [`validation`] - Customization form checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use dulce_core::{CakeOptions, CartStore, Money, PriceTable};
//!
//! let prices = PriceTable::default();
//! let mut cart = CartStore::new();
//!
//! cart.add_standard_item("brownie", "Brownie", Money::from_cents(275));
//! cart.add_standard_item("brownie", "Brownie", Money::from_cents(275));
//! cart.add_custom_item(CakeOptions::new("Mediano", "Chocolate"), 1, &prices);
//!
//! assert_eq!(cart.items().len(), 2);
//! assert_eq!(cart.total(), Money::from_cents(275 * 2 + 51_000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::CartStore;
pub use catalog::{Catalog, Product, ProductAction, ProductKind};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{PriceResolver, PriceTable};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Catalog id shared by every customized cake row.
///
/// The backend reprices cakes from their options, so all of them are
/// reported under this single base id.
pub const CUSTOM_CAKE_ID: &str = "cake";

/// Maximum quantity accepted from the cake customization form.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum length of the message piped onto a cake.
pub const MAX_MESSAGE_CHARS: usize = 60;
