//! # Pricing Module
//!
//! Resolves a cake's unit price from its customization options.
//!
//! ## Resolution Steps
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  unit_price(options)                                                    │
//! │                                                                         │
//! │  1. flavors[flavor][size] ── hit ──► base                               │
//! │        │ miss                                                           │
//! │        ▼                                                                │
//! │  2. sizes[size] ──────────── hit ──► base                               │
//! │        │ miss                                                           │
//! │        ▼                                                                │
//! │  3. base = $0.00   (permissive: unknown options never fail)             │
//! │                                                                         │
//! │  4. + frostings[frosting]        (if listed; tables ship empty)         │
//! │  5. + message_surcharge          (if the message is non-blank)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The price is resolved once, when the row is created. Changing the table
//! afterwards never reprices rows already sitting in a cart.
//!
//! ## Config Format
//! Amounts are integer cents, matching [`Money`]'s serialized form:
//! ```toml
//! [pricing]
//! message_surcharge = 0
//!
//! [pricing.sizes]
//! "8\"" = 3000
//!
//! [pricing.flavors.Chocolate]
//! Mediano = 51000
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::money::Money;
use crate::types::CakeOptions;

// =============================================================================
// Resolver Seam
// =============================================================================

/// Anything that can price a cake.
///
/// [`PriceTable`] is the production resolver; the cart store only depends
/// on this trait.
pub trait PriceResolver {
    /// Unit price for the given options. Never negative, never fails.
    fn unit_price(&self, options: &CakeOptions) -> Money;
}

// =============================================================================
// Price Table
// =============================================================================

/// Static price lookup for customized cakes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceTable {
    /// Size-only prices (the simpler storefront variant).
    pub sizes: BTreeMap<String, Money>,

    /// Flavor, then size.
    pub flavors: BTreeMap<String, BTreeMap<String, Money>>,

    /// Per-frosting surcharges.
    pub frostings: BTreeMap<String, Money>,

    /// Added when the cake carries a non-blank message. May be zero.
    pub message_surcharge: Money,
}

impl PriceTable {
    /// A table with no prices at all; every cake resolves to $0.00.
    pub fn empty() -> Self {
        PriceTable {
            sizes: BTreeMap::new(),
            flavors: BTreeMap::new(),
            frostings: BTreeMap::new(),
            message_surcharge: Money::zero(),
        }
    }

    /// Sets a size-only price.
    pub fn with_size(mut self, size: impl Into<String>, price: Money) -> Self {
        self.sizes.insert(size.into(), price);
        self
    }

    /// Sets a flavor/size price.
    pub fn with_flavor_size(
        mut self,
        flavor: impl Into<String>,
        size: impl Into<String>,
        price: Money,
    ) -> Self {
        self.flavors
            .entry(flavor.into())
            .or_default()
            .insert(size.into(), price);
        self
    }

    /// Sets a frosting surcharge.
    pub fn with_frosting(mut self, frosting: impl Into<String>, surcharge: Money) -> Self {
        self.frostings.insert(frosting.into(), surcharge);
        self
    }

    /// Sets the message surcharge.
    pub fn with_message_surcharge(mut self, surcharge: Money) -> Self {
        self.message_surcharge = surcharge;
        self
    }

    /// Looks up the base price, without surcharges.
    ///
    /// Any `flavor x size` miss falls back to the size table, whether the
    /// flavor is unknown or just lacks that size.
    ///
    /// `None` means the options are not in the table. [`PriceResolver::unit_price`]
    /// treats that as $0.00; callers use this to notice the misconfiguration.
    pub fn base_price(&self, options: &CakeOptions) -> Option<Money> {
        let size = options.size.trim();
        let flavor = options.flavor.trim();

        self.flavors
            .get(flavor)
            .and_then(|by_size| by_size.get(size))
            .or_else(|| self.sizes.get(size))
            .copied()
    }

    /// Sum of frosting and message surcharges for the options.
    pub fn surcharges(&self, options: &CakeOptions) -> Money {
        let mut extra = Money::zero();

        if let Some(frosting) = options.frosting_choice() {
            if let Some(surcharge) = self.frostings.get(frosting) {
                extra += *surcharge;
            }
        }

        if options.message_text().is_some() {
            extra += self.message_surcharge;
        }

        extra
    }

    /// Every amount in the table, for validation.
    pub fn amounts(&self) -> impl Iterator<Item = Money> + '_ {
        self.sizes
            .values()
            .chain(self.flavors.values().flat_map(|by_size| by_size.values()))
            .chain(self.frostings.values())
            .chain(std::iter::once(&self.message_surcharge))
            .copied()
    }
}

impl PriceResolver for PriceTable {
    fn unit_price(&self, options: &CakeOptions) -> Money {
        self.base_price(options).unwrap_or_default() + self.surcharges(options)
    }
}

/// The shipped storefront tables.
///
/// Sizes in inches come from the simple storefront; the flavor table prices
/// the named sizes. No surcharges are active.
impl Default for PriceTable {
    fn default() -> Self {
        PriceTable::empty()
            .with_size("6\"", Money::from_major_minor(20, 0))
            .with_size("8\"", Money::from_major_minor(30, 0))
            .with_size("10\"", Money::from_major_minor(45, 0))
            .with_flavor_size("Chocolate", "Pequeño", Money::from_major_minor(380, 0))
            .with_flavor_size("Chocolate", "Mediano", Money::from_major_minor(510, 0))
            .with_flavor_size("Chocolate", "Grande", Money::from_major_minor(690, 0))
            .with_flavor_size("Vainilla", "Pequeño", Money::from_major_minor(350, 0))
            .with_flavor_size("Vainilla", "Mediano", Money::from_major_minor(480, 0))
            .with_flavor_size("Vainilla", "Grande", Money::from_major_minor(650, 0))
            .with_flavor_size("Tres Leches", "Pequeño", Money::from_major_minor(420, 0))
            .with_flavor_size("Tres Leches", "Mediano", Money::from_major_minor(560, 0))
            .with_flavor_size("Tres Leches", "Grande", Money::from_major_minor(740, 0))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
