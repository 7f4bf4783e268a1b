//! # Cart Store
//!
//! The in-memory cart: insertion-ordered rows keyed by row id.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  UI Event                 Store Method              Row Change          │
//! │  ────────                 ────────────              ──────────          │
//! │                                                                         │
//! │  Product button ────────► add_standard_item() ────► qty += 1 or push    │
//! │                                                                         │
//! │  Cake form submit ──────► add_custom_item() ──────► always push         │
//! │                                                                         │
//! │  + / – on a row ────────► change_quantity() ──────► qty += delta        │
//! │                                                     (≤ 0 → row removed) │
//! │                                                                         │
//! │  Remove on a row ───────► remove_item() ──────────► row removed         │
//! │                                                                         │
//! │  Clear / order placed ──► clear() ────────────────► all rows removed    │
//! │                                                                         │
//! │  NOTE: Unknown row ids are silent no-ops (stale buttons, double clicks) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Row ids are unique
//! - Every row has quantity > 0
//! - `unit_price` is fixed when the row is created

use crate::money::Money;
use crate::pricing::PriceResolver;
use crate::types::{CakeOptions, CartView, LineItem, OrderRequest};
use crate::CUSTOM_CAKE_ID;

/// The cart.
///
/// Owned by whoever drives the page (a checkout session); there is no global
/// cart, so independent carts can coexist.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    items: Vec<LineItem>,

    /// Last sequence number handed out to a customized row.
    custom_seq: u64,
}

impl CartStore {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of a standard product.
    ///
    /// ## Behavior
    /// - Row `id` exists: quantity += 1 (name and price stay frozen)
    /// - Row `id` absent: new row with quantity 1
    pub fn add_standard_item(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
    ) -> &LineItem {
        let id = id.into();

        if let Some(pos) = self.position(&id) {
            let item = &mut self.items[pos];
            item.quantity = item.quantity.saturating_add(1);
            return item;
        }

        self.items.push(LineItem {
            base_id: id.clone(),
            id,
            name: name.into(),
            unit_price: price,
            quantity: 1,
            options: None,
        });
        self.last_item()
    }

    /// Adds a customized cake as a new row.
    ///
    /// ## Behavior
    /// - Always creates a row, even if an identical cake is already present
    /// - Row id is generated by the store (`cake#1`, `cake#2`, ...)
    /// - Unit price is resolved once, here
    /// - A non-positive quantity adds nothing and returns `None`
    pub fn add_custom_item(
        &mut self,
        options: CakeOptions,
        quantity: i64,
        prices: &impl PriceResolver,
    ) -> Option<&LineItem> {
        if quantity <= 0 {
            return None;
        }

        let id = self.next_custom_id();
        let unit_price = prices.unit_price(&options);

        self.items.push(LineItem {
            id,
            base_id: CUSTOM_CAKE_ID.to_string(),
            name: options.label(),
            unit_price,
            quantity,
            options: Some(options),
        });
        Some(self.last_item())
    }

    /// Adds `delta` to a row's quantity.
    ///
    /// ## Behavior
    /// - Row absent: no-op
    /// - Resulting quantity ≤ 0: the row is deleted, never kept at zero
    pub fn change_quantity(&mut self, id: &str, delta: i64) {
        let Some(pos) = self.position(id) else {
            return;
        };

        let item = &mut self.items[pos];
        item.quantity = item.quantity.saturating_add(delta);
        if item.quantity <= 0 {
            self.items.remove(pos);
        }
    }

    /// Deletes a row if present.
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
    }

    /// Deletes all rows.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Rows in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Looks up a row by id.
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Returns the quantity of a row, zero when absent.
    pub fn quantity_of(&self, id: &str) -> i64 {
        self.get(id).map_or(0, |i| i.quantity)
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The "cart is non-empty" signal used to enable checkout.
    pub fn has_items(&self) -> bool {
        !self.is_empty()
    }

    /// Returns the total quantity of all rows.
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Sum of `unit_price × quantity` over all rows.
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// The order body: base ids, quantities and options.
    pub fn order_request(&self) -> OrderRequest {
        OrderRequest {
            items: self.items.iter().map(LineItem::to_order_line).collect(),
        }
    }

    /// Snapshot for the presentation layer.
    ///
    /// `order_pending` is true while a submission is outstanding; the
    /// checkout control stays disabled until it settles.
    pub fn view(&self, order_pending: bool) -> CartView {
        CartView {
            items: self.items.clone(),
            total: self.total(),
            total_quantity: self.total_quantity(),
            checkout_enabled: self.has_items() && !order_pending,
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    fn last_item(&self) -> &LineItem {
        // Only called right after a push.
        &self.items[self.items.len() - 1]
    }

    /// Next unused `cake#N` id.
    ///
    /// The counter only moves forward, and ids already taken (e.g. a standard
    /// product that happens to be named `cake#3`) are skipped.
    fn next_custom_id(&mut self) -> String {
        loop {
            self.custom_seq += 1;
            let id = format!("{}#{}", CUSTOM_CAKE_ID, self.custom_seq);
            if self.position(&id).is_none() {
                return id;
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::PriceTable;

    /// Prices every cake the same.
    struct FlatPrice(Money);

    impl PriceResolver for FlatPrice {
        fn unit_price(&self, _options: &CakeOptions) -> Money {
            self.0
        }
    }

    fn cake() -> CakeOptions {
        CakeOptions::new("Mediano", "Chocolate").with_frosting("Vainilla")
    }

    #[test]
    fn test_repeated_standard_adds_accumulate_on_one_row() {
        let mut cart = CartStore::new();
        for _ in 0..5 {
            cart.add_standard_item("brownie", "Brownie", Money::from_cents(275));
        }

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("brownie"), 5);
    }

    #[test]
    fn test_standard_row_keeps_first_price() {
        let mut cart = CartStore::new();
        cart.add_standard_item("latte", "Latte", Money::from_cents(300));
        cart.add_standard_item("latte", "Latte", Money::from_cents(999));

        let row = cart.get("latte").unwrap();
        assert_eq!(row.unit_price, Money::from_cents(300));
        assert_eq!(row.base_id, "latte");
        assert_eq!(row.quantity, 2);
    }

    #[test]
    fn test_decrement_by_full_quantity_removes_row() {
        let mut cart = CartStore::new();
        cart.add_standard_item("cookie", "Cookie", Money::from_cents(125));
        cart.add_standard_item("cookie", "Cookie", Money::from_cents(125));
        cart.add_standard_item("cookie", "Cookie", Money::from_cents(125));

        cart.change_quantity("cookie", -cart.quantity_of("cookie"));

        assert!(cart.get("cookie").is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_overshooting_decrement_removes_row() {
        let mut cart = CartStore::new();
        cart.add_standard_item("cookie", "Cookie", Money::from_cents(125));

        cart.change_quantity("cookie", -10);

        assert!(cart.get("cookie").is_none());
    }

    #[test]
    fn test_increment() {
        let mut cart = CartStore::new();
        cart.add_standard_item("espresso", "Espresso", Money::from_cents(200));
        cart.change_quantity("espresso", 1);
        assert_eq!(cart.quantity_of("espresso"), 2);
    }

    #[test]
    fn test_absent_ids_are_silent_no_ops() {
        let mut cart = CartStore::new();
        cart.add_standard_item("latte", "Latte", Money::from_cents(300));

        cart.change_quantity("ghost", 1);
        cart.change_quantity("ghost", -1);
        cart.remove_item("ghost");

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("latte"), 1);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = CartStore::new();
        cart.add_standard_item("latte", "Latte", Money::from_cents(300));
        cart.add_standard_item("latte", "Latte", Money::from_cents(300));

        cart.remove_item("latte");

        assert!(cart.is_empty());
    }

    #[test]
    fn test_identical_cakes_get_distinct_rows() {
        let mut cart = CartStore::new();
        let prices = PriceTable::default();

        let first = cart.add_custom_item(cake(), 1, &prices).unwrap().id.clone();
        let second = cart.add_custom_item(cake(), 1, &prices).unwrap().id.clone();

        assert_ne!(first, second);
        assert_eq!(cart.len(), 2);
        assert!(cart.items().iter().all(|i| i.quantity == 1));
        assert!(cart.items().iter().all(|i| i.base_id == CUSTOM_CAKE_ID));
    }

    #[test]
    fn test_custom_ids_skip_taken_ids() {
        let mut cart = CartStore::new();
        cart.add_standard_item("cake#1", "Odd product", Money::from_cents(100));

        let id = cart
            .add_custom_item(cake(), 1, &FlatPrice(Money::from_cents(100)))
            .unwrap()
            .id
            .clone();

        assert_eq!(id, "cake#2");
    }

    #[test]
    fn test_custom_ids_are_not_reused_after_removal() {
        let mut cart = CartStore::new();
        let prices = FlatPrice(Money::from_cents(100));

        let first = cart.add_custom_item(cake(), 1, &prices).unwrap().id.clone();
        cart.remove_item(&first);
        let second = cart.add_custom_item(cake(), 1, &prices).unwrap().id.clone();

        assert_ne!(first, second);
    }

    #[test]
    fn test_custom_row_name_and_price() {
        let mut cart = CartStore::new();
        let prices = PriceTable::default();

        let row = cart
            .add_custom_item(cake().with_message("Feliz cumple!"), 2, &prices)
            .unwrap();

        assert_eq!(
            row.name,
            "Cake (Mediano, Chocolate, Vainilla, \"Feliz cumple!\")"
        );
        assert_eq!(row.unit_price, Money::from_major_minor(510, 0));
        assert_eq!(row.quantity, 2);
    }

    #[test]
    fn test_custom_price_is_frozen() {
        let mut cart = CartStore::new();
        let mut prices = PriceTable::default();

        let id = cart.add_custom_item(cake(), 1, &prices).unwrap().id.clone();
        prices = prices.with_flavor_size("Chocolate", "Mediano", Money::from_major_minor(999, 0));

        assert_eq!(cart.get(&id).unwrap().unit_price, Money::from_major_minor(510, 0));
        assert_eq!(prices.base_price(&cake()), Some(Money::from_major_minor(999, 0)));
    }

    #[test]
    fn test_non_positive_custom_quantity_adds_nothing() {
        let mut cart = CartStore::new();
        let prices = PriceTable::default();

        assert!(cart.add_custom_item(cake(), 0, &prices).is_none());
        assert!(cart.add_custom_item(cake(), -2, &prices).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_of_empty_cart_is_zero() {
        assert_eq!(CartStore::new().total(), Money::zero());
    }

    #[test]
    fn test_total_scenario() {
        let mut cart = CartStore::new();
        cart.add_standard_item("a", "A", Money::from_major_minor(10, 0));
        cart.add_standard_item("a", "A", Money::from_major_minor(10, 0));
        cart.add_custom_item(cake(), 2, &FlatPrice(Money::from_major_minor(300, 0)));

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.total(), Money::from_major_minor(10 * 2 + 300 * 2, 0));
        assert_eq!(cart.total(), Money::from_major_minor(620, 0));
    }

    #[test]
    fn test_total_matches_line_totals_after_mutations() {
        let mut cart = CartStore::new();
        cart.add_standard_item("latte", "Latte", Money::from_cents(300));
        cart.add_standard_item("cookie", "Cookie", Money::from_cents(125));
        cart.change_quantity("cookie", 3);
        cart.add_custom_item(cake(), 1, &FlatPrice(Money::from_cents(4500)));
        cart.change_quantity("latte", -1);

        let expected: i64 = cart
            .items()
            .iter()
            .map(|i| i.unit_price.cents() * i.quantity)
            .sum();
        assert_eq!(cart.total().cents(), expected);
        assert_eq!(cart.total(), Money::from_cents(125 * 4 + 4500));
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut cart = CartStore::new();
        cart.add_standard_item("latte", "Latte", Money::from_cents(300));
        cart.add_standard_item("brownie", "Brownie", Money::from_cents(275));
        cart.add_standard_item("latte", "Latte", Money::from_cents(300));

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["latte", "brownie"]);
    }

    #[test]
    fn test_order_request_uses_base_ids() {
        let mut cart = CartStore::new();
        cart.add_standard_item("relampago", "Relámpago", Money::from_cents(350));
        cart.add_custom_item(cake(), 2, &PriceTable::default());

        let request = cart.order_request();

        assert_eq!(request.items.len(), 2);
        assert_eq!(request.items[0].id, "relampago");
        assert!(request.items[0].options.is_none());
        assert_eq!(request.items[1].id, "cake");
        assert_eq!(request.items[1].qty, 2);
        assert_eq!(request.items[1].options, Some(cake()));
    }

    #[test]
    fn test_view_checkout_flag() {
        let mut cart = CartStore::new();
        assert!(!cart.view(false).checkout_enabled);

        cart.add_standard_item("latte", "Latte", Money::from_cents(300));
        assert!(cart.view(false).checkout_enabled);
        assert!(!cart.view(true).checkout_enabled);

        let view = cart.view(false);
        assert_eq!(view.total, Money::from_cents(300));
        assert_eq!(view.total_quantity, 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = CartStore::new();
        cart.add_standard_item("latte", "Latte", Money::from_cents(300));
        cart.add_custom_item(cake(), 1, &PriceTable::default());

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_oversized_rows_do_not_overflow() {
        let mut cart = CartStore::new();
        let huge = i64::MAX / 1000;
        cart.add_custom_item(cake(), huge, &FlatPrice(Money::from_cents(51_000)));
        cart.add_custom_item(cake(), huge, &FlatPrice(Money::from_cents(51_000)));

        assert_eq!(cart.total(), Money::from_cents(i64::MAX));
        assert_eq!(cart.total_quantity(), huge * 2);

        cart.change_quantity("cake#1", i64::MAX);
        assert_eq!(cart.quantity_of("cake#1"), i64::MAX);
        assert_eq!(cart.total_quantity(), i64::MAX);
    }
}
