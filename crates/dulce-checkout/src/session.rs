//! # Checkout Session
//!
//! One shopper's cart, the price table and catalog it is priced with, and
//! the transport its order leaves through.
//!
//! ## Command Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command → Transition → View                          │
//! │                                                                         │
//! │  UI event ──► CartCommand ──► dispatch() ──► CartStore ──► CartView     │
//! │                                   │                          │          │
//! │                            (form rejected?)            redraw table,    │
//! │                                   │                    total, Buy flag  │
//! │                                   ▼                                     │
//! │                          CheckoutError::Validation                      │
//! │                          (cart untouched)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Checkout Lifecycle
//! ```text
//! ┌──────────┐ begin_checkout ┌──────────┐  finish_checkout(Ok)  ┌──────────┐
//! │  Idle    │───────────────►│ Pending  │──────────────────────►│ Idle,    │
//! │ (Buy on) │                │ (Buy off)│                       │ cart     │
//! └──────────┘                └────┬─────┘                       │ cleared  │
//!       ▲                          │ finish_checkout(Err)        └──────────┘
//!       └──────────────────────────┘ cart kept, failure notice
//! ```
//!
//! While pending, a second `begin_checkout` is refused with
//! `CheckoutError::SubmissionInProgress`. There is no queue.

use dulce_core::validation::validate_cake_order;
use dulce_core::{
    CakeOptions, CartStore, CartView, Catalog, Money, OrderReceipt, OrderRequest, PriceTable,
    ProductAction,
};
use tracing::{debug, error, info, warn};

use crate::config::CheckoutConfig;
use crate::error::{CheckoutError, CheckoutResult};
use crate::notice::Notice;
use crate::transport::OrderTransport;

// =============================================================================
// Commands
// =============================================================================

/// A user action that changes the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartCommand {
    /// Product button carrying its own id, name and price.
    AddProduct {
        id: String,
        name: String,
        price: Money,
    },
    /// Customization form submitted.
    AddCake { options: CakeOptions, quantity: i64 },
    /// `+` on a row.
    Increment { id: String },
    /// `–` on a row.
    Decrement { id: String },
    /// Remove on a row.
    Remove { id: String },
    /// Clear cart.
    Clear,
}

/// Result of pressing a catalog product button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// A standard product was added.
    Added(CartView),
    /// The product is the cake: show the customization form.
    OpenCustomizer,
}

// =============================================================================
// Session
// =============================================================================

/// Owns one cart and everything needed to price and submit it.
#[derive(Debug)]
pub struct CheckoutSession<T> {
    cart: CartStore,
    prices: PriceTable,
    catalog: Catalog,
    transport: T,
    order_pending: bool,
}

impl<T: OrderTransport> CheckoutSession<T> {
    /// Creates a session with an empty cart.
    pub fn new(transport: T, prices: PriceTable, catalog: Catalog) -> Self {
        CheckoutSession {
            cart: CartStore::new(),
            prices,
            catalog,
            transport,
            order_pending: false,
        }
    }

    /// Creates a session priced from the configuration, with the default catalog.
    pub fn from_config(config: &CheckoutConfig, transport: T) -> Self {
        Self::new(transport, config.pricing.clone(), Catalog::default())
    }

    /// Current observable state.
    pub fn view(&self) -> CartView {
        self.cart.view(self.order_pending)
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    /// Swaps the price table. Rows already in the cart keep their prices.
    pub fn set_prices(&mut self, prices: PriceTable) {
        self.prices = prices;
    }

    /// True while an order is outstanding.
    pub fn is_order_pending(&self) -> bool {
        self.order_pending
    }

    /// Applies one command and returns the new view.
    ///
    /// ## Errors
    /// Only `AddCake` can fail, with `CheckoutError::Validation`; the cart is
    /// left untouched. Row commands on unknown ids succeed without effect.
    pub fn dispatch(&mut self, command: CartCommand) -> CheckoutResult<CartView> {
        debug!(?command, "cart command");

        match command {
            CartCommand::AddProduct { id, name, price } => {
                self.cart.add_standard_item(id, name, price);
            }
            CartCommand::AddCake { options, quantity } => {
                validate_cake_order(&options, quantity)?;

                if self.prices.base_price(&options).is_none() {
                    warn!(
                        size = %options.size,
                        flavor = %options.flavor,
                        "No price configured for cake options, pricing at $0.00"
                    );
                }

                self.cart.add_custom_item(options, quantity, &self.prices);
            }
            CartCommand::Increment { id } => self.cart.change_quantity(&id, 1),
            CartCommand::Decrement { id } => self.cart.change_quantity(&id, -1),
            CartCommand::Remove { id } => self.cart.remove_item(&id),
            CartCommand::Clear => self.cart.clear(),
        }

        Ok(self.view())
    }

    /// Handles a catalog product button.
    ///
    /// ## Errors
    /// `CheckoutError::UnknownProduct` when the catalog does not list `id`.
    pub fn press_product(&mut self, id: &str) -> CheckoutResult<Activation> {
        match self.catalog.activate(id)? {
            ProductAction::AddStandard { id, name, price } => {
                let view = self.dispatch(CartCommand::AddProduct { id, name, price })?;
                Ok(Activation::Added(view))
            }
            ProductAction::OpenCustomizer => Ok(Activation::OpenCustomizer),
        }
    }

    /// Marks an order as outstanding and returns the body to send.
    ///
    /// ## Errors
    /// - `SubmissionInProgress` if an order is already outstanding
    /// - `EmptyCart` if there is nothing to buy
    pub fn begin_checkout(&mut self) -> CheckoutResult<OrderRequest> {
        if self.order_pending {
            return Err(CheckoutError::SubmissionInProgress);
        }
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        self.order_pending = true;
        Ok(self.cart.order_request())
    }

    /// Settles the outstanding order.
    ///
    /// Success clears the cart; failure keeps it so the shopper can retry.
    pub fn finish_checkout(&mut self, result: CheckoutResult<OrderReceipt>) -> Notice {
        self.order_pending = false;

        match result {
            Ok(receipt) => {
                info!(order_id = %receipt.order_id, total = %receipt.total, "Order placed");
                self.cart.clear();
                Notice::placed(receipt)
            }
            Err(err) => {
                error!(error = %err, "Order submission failed");
                Notice::OrderFailed {
                    message: err.user_message(),
                }
            }
        }
    }

    /// Submits the cart: `begin_checkout`, one POST, `finish_checkout`.
    ///
    /// ## Errors
    /// Only the `begin_checkout` refusals. Failures of the POST itself come
    /// back as `Ok(Notice::OrderFailed { .. })`.
    pub async fn checkout(&mut self) -> CheckoutResult<Notice> {
        let request = self.begin_checkout()?;
        let result = self.transport.submit(&request).await;
        Ok(self.finish_checkout(result))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
