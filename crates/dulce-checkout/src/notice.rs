//! # Notices
//!
//! The single message shown to the shopper after pressing Buy.

use chrono::{DateTime, Utc};
use dulce_core::{Money, OrderId, OrderReceipt};
use std::fmt;

/// Outcome of a checkout, as the shopper sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// The backend accepted the order. `total` is the server's total.
    OrderPlaced {
        order_id: OrderId,
        total: Money,
        placed_at: DateTime<Utc>,
    },

    /// The order did not go through; the cart was kept.
    OrderFailed { message: String },
}

impl Notice {
    pub(crate) fn placed(receipt: OrderReceipt) -> Self {
        Notice::OrderPlaced {
            order_id: receipt.order_id,
            total: receipt.total,
            placed_at: Utc::now(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notice::OrderPlaced { .. })
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::OrderPlaced {
                order_id, total, ..
            } => write!(f, "Order placed\nOrder #{order_id}\nTotal: {total}"),
            Notice::OrderFailed { message } => write!(f, "Could not place order: {message}"),
        }
    }
}
