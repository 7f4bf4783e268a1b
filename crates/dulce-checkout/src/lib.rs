//! # dulce-checkout: Checkout Flow for the Dulce Storefront
//!
//! This crate wires the pure cart from `dulce-core` to the outside world:
//! configuration on disk, the shopper's session, and the `POST /api/buy`
//! call that turns a cart into an order.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Architecture                            │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                  CheckoutSession (one per shopper)               │  │
//! │  │                                                                  │  │
//! │  │  dispatch(CartCommand) ──► CartStore ──► CartView               │  │
//! │  │  press_product(id)     ──► Catalog                               │  │
//! │  │  checkout()            ──► OrderTransport ──► Notice             │  │
//! │  └────────────┬──────────────────────────────┬──────────────────────┘  │
//! │               │                              │                          │
//! │               ▼                              ▼                          │
//! │  ┌────────────────────────┐    ┌──────────────────────────────────┐    │
//! │  │   CheckoutConfig       │    │   HttpOrderTransport             │    │
//! │  │                        │    │                                  │    │
//! │  │ endpoint, store name,  │    │ reqwest POST, JSON body,         │    │
//! │  │ cake price tables      │    │ one attempt, typed failures      │    │
//! │  └────────────────────────┘    └──────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`config`] - Endpoint, store and pricing configuration
//! - [`error`] - Checkout error types
//! - [`notice`] - Success/failure message shown after Buy
//! - [`session`] - `CheckoutSession` and the cart command set
//! - [`transport`] - `OrderTransport` trait and the HTTP implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dulce_checkout::{CheckoutConfig, CheckoutSession, HttpOrderTransport};
//!
//! let config = CheckoutConfig::load_or_default(None);
//! let transport = HttpOrderTransport::new(&config)?;
//! let mut session = CheckoutSession::from_config(&config, transport);
//!
//! session.press_product("brownie")?;
//! let notice = session.checkout().await?;
//! println!("{notice}");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod notice;
pub mod session;
pub mod transport;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{CheckoutConfig, EndpointSettings, StoreSettings};
pub use error::{CheckoutError, CheckoutResult};
pub use notice::Notice;
pub use session::{Activation, CartCommand, CheckoutSession};
pub use transport::{HttpOrderTransport, OrderTransport};
