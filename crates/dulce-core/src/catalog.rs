//! # Catalog
//!
//! The products shown as buttons on the storefront.
//!
//! Each button either adds a fixed-price product straight to the cart or
//! opens the cake customization form:
//!
//! ```text
//! [Relámpago $3.50] ──► AddStandard { id, name, price } ──► CartStore::add_standard_item
//! [Custom Cake]     ──► OpenCustomizer ──► form ──► CartStore::add_custom_item
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::CUSTOM_CAKE_ID;

/// How a product is priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProductKind {
    /// Fixed price.
    Standard { price: Money },
    /// Priced from the customization form.
    Customizable,
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub kind: ProductKind,
}

impl Product {
    pub fn standard(id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            kind: ProductKind::Standard { price },
        }
    }

    pub fn customizable(id: impl Into<String>, name: impl Into<String>) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            kind: ProductKind::Customizable,
        }
    }
}

/// What activating a product button should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductAction {
    /// Add one unit of a fixed-price product.
    AddStandard {
        id: String,
        name: String,
        price: Money,
    },
    /// Show the cake customization form.
    OpenCustomizer,
}

/// The storefront's product list, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// Products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Resolves a product button press.
    ///
    /// ## Errors
    /// `CoreError::ProductNotFound` for ids the catalog does not list.
    pub fn activate(&self, id: &str) -> CoreResult<ProductAction> {
        let product = self
            .get(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;

        Ok(match product.kind {
            ProductKind::Standard { price } => ProductAction::AddStandard {
                id: product.id.clone(),
                name: product.name.clone(),
                price,
            },
            ProductKind::Customizable => ProductAction::OpenCustomizer,
        })
    }
}

/// Pastries, drinks and the custom cake.
impl Default for Catalog {
    fn default() -> Self {
        Catalog::new(vec![
            // Pastries
            Product::standard("relampago", "Relámpago", Money::from_cents(350)),
            Product::standard("brownie", "Brownie", Money::from_cents(275)),
            Product::standard("cookie", "Cookie", Money::from_cents(125)),
            Product::standard("tartaleta", "Tartaleta", Money::from_cents(400)),
            // Drinks
            Product::standard("capuchino", "Capuchino", Money::from_cents(250)),
            Product::standard("latte", "Latte", Money::from_cents(300)),
            Product::standard("espresso", "Espresso", Money::from_cents(200)),
            // Priced from options
            Product::customizable(CUSTOM_CAKE_ID, "Custom Cake"),
        ])
    }
}
