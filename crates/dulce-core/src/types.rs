//! # Domain Types
//!
//! Cart rows, cake customization, and the shapes exchanged with `/api/buy`.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   CakeOptions   │   │    LineItem     │   │    CartView     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  size           │──►│  id (row)       │──►│  items          │       │
//! │  │  flavor         │   │  base_id        │   │  total          │       │
//! │  │  frosting       │   │  unit_price     │   │  checkout_      │       │
//! │  │  message        │   │  quantity       │   │    enabled      │       │
//! │  └─────────────────┘   └────────┬────────┘   └─────────────────┘       │
//! │                                 │ projection                            │
//! │                                 ▼                                       │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  OrderRequest   │──►│  OrderReceipt   │   (POST /api/buy)           │
//! │  │  items: [       │   │  order_id       │                             │
//! │  │   {id,qty,opts}]│   │  total          │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity
//! Every row has:
//! - `id`: the cart row key (unique inside one cart)
//! - `base_id`: the catalog product reported to the backend

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::{self, Money};

// =============================================================================
// Cake Options
// =============================================================================

/// The choices made on the cake customization form.
///
/// Forwarded verbatim to the backend, which reprices the cake itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct CakeOptions {
    pub size: String,
    pub flavor: String,
    pub frosting: String,
    pub message: String,
}

impl CakeOptions {
    /// Options with a size and flavor, no frosting and no message.
    pub fn new(size: impl Into<String>, flavor: impl Into<String>) -> Self {
        CakeOptions {
            size: size.into(),
            flavor: flavor.into(),
            ..Default::default()
        }
    }

    /// Sets the frosting.
    pub fn with_frosting(mut self, frosting: impl Into<String>) -> Self {
        self.frosting = frosting.into();
        self
    }

    /// Sets the message piped onto the cake.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// The trimmed message, if one was written.
    pub fn message_text(&self) -> Option<&str> {
        let message = self.message.trim();
        (!message.is_empty()).then_some(message)
    }

    /// The trimmed frosting, if one was chosen.
    pub fn frosting_choice(&self) -> Option<&str> {
        let frosting = self.frosting.trim();
        (!frosting.is_empty()).then_some(frosting)
    }

    /// Display name for a cart row, e.g. `Cake (Mediano, Chocolate, Vainilla, "Feliz cumple!")`.
    ///
    /// Frosting and message are left out when empty.
    pub fn label(&self) -> String {
        let mut label = format!("Cake ({}, {}", self.size.trim(), self.flavor.trim());
        if let Some(frosting) = self.frosting_choice() {
            label.push_str(", ");
            label.push_str(frosting);
        }
        if let Some(message) = self.message_text() {
            label.push_str(&format!(", \"{message}\""));
        }
        label.push(')');
        label
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One row of the cart.
///
/// ## Price Freezing
/// `unit_price` is captured when the row is created. Later changes to the
/// price table never reprice a row that is already in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Row key, unique within one cart.
    pub id: String,

    /// Catalog product reported to the backend.
    pub base_id: String,

    /// Display name (frozen).
    pub name: String,

    /// Unit price (frozen at creation).
    pub unit_price: Money,

    /// Always positive while the row exists.
    pub quantity: i64,

    /// Cake customization, only for customized rows.
    #[ts(optional)]
    pub options: Option<CakeOptions>,
}

impl LineItem {
    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    /// True for rows created from the customization form.
    #[inline]
    pub fn is_custom(&self) -> bool {
        self.options.is_some()
    }

    /// Projects the row to what the backend needs: base id, quantity, options.
    pub fn to_order_line(&self) -> OrderLine {
        OrderLine {
            id: self.base_id.clone(),
            qty: self.quantity,
            options: self.options.clone(),
        }
    }
}

// =============================================================================
// Cart View
// =============================================================================

/// What the presentation layer redraws after every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    /// Rows in insertion order.
    pub items: Vec<LineItem>,

    /// Sum of all line totals.
    pub total: Money,

    /// Sum of all quantities.
    pub total_quantity: i64,

    /// The checkout control is enabled: cart has rows and no order is in flight.
    pub checkout_enabled: bool,
}

impl CartView {
    /// True when there are no rows to show.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Order Wire Types (/api/buy)
// =============================================================================

/// One entry of the order body.
///
/// ```json
/// { "id": "cake", "qty": 1, "options": { "size": "8\"", "flavor": "Chocolate", "frosting": "Vanilla", "message": "" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderLine {
    /// Catalog base id, never the cart row id.
    pub id: String,
    pub qty: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub options: Option<CakeOptions>,
}

/// The body POSTed to the order endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderRequest {
    pub items: Vec<OrderLine>,
}

impl OrderRequest {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Order identifier assigned by the backend.
///
/// The reference backend returns the sales row id as a number; a string is
/// accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(untagged)]
pub enum OrderId {
    Number(u64),
    Text(String),
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderId::Number(n) => write!(f, "{n}"),
            OrderId::Text(s) => f.write_str(s),
        }
    }
}

/// Successful answer from the order endpoint.
///
/// `total` is authoritative: the client never pays from its own total.
/// Other fields the server sends (e.g. `"ok": true`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderReceipt {
    pub order_id: OrderId,
    #[serde(with = "money::major_units")]
    #[ts(type = "number")]
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
