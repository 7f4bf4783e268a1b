//! # Rendering
//!
//! Plain-text views of the cart, the menu and the cake form.
//!
//! ## Cart Table
//! ```text
//!   #  Item                                  Price   Qty    Subtotal
//!   1  Brownie                               $2.75     2       $5.50
//!   2  Cake (Mediano, Chocolate, "Hola")   $510.00     1     $510.00
//!   ---------------------------------------------------------------
//!   Total: $515.50
//!   [Buy] ready
//! ```

use dulce_core::{CartView, Catalog, PriceTable, ProductKind};
use std::collections::BTreeSet;

/// Shown for `help`.
pub const HELP: &str = "\
Commands:
  menu                               list products
  add <product-id>                   add a product (add cake opens the cake form)
  cake size=.. flavor=.. [frosting=..] [message=\"..\"] [qty=N]
                                     add a customized cake
  + <row>   - <row>   rm <row>       change or remove a row (number or id)
  clear                              empty the cart
  show                               show the cart
  buy                                place the order
  quit                               leave";

/// Renders the cart table, total and Buy state.
pub fn render_cart(view: &CartView) -> String {
    let mut out = String::new();

    if view.is_empty() {
        out.push_str("Your cart is empty.\n");
    } else {
        let name_width = view
            .items
            .iter()
            .map(|item| item.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("Item".len());

        out.push_str(&format!(
            "{:>3}  {:<name_width$}  {:>9}  {:>4}  {:>10}\n",
            "#", "Item", "Price", "Qty", "Subtotal"
        ));

        for (index, item) in view.items.iter().enumerate() {
            out.push_str(&format!(
                "{:>3}  {:<name_width$}  {:>9}  {:>4}  {:>10}\n",
                index + 1,
                item.name,
                item.unit_price.to_string(),
                item.quantity,
                item.line_total().to_string(),
            ));
        }

        out.push_str(&"-".repeat(name_width + 34));
        out.push('\n');
    }

    out.push_str(&format!("Total: {}\n", view.total));
    out.push_str(if view.checkout_enabled {
        "[Buy] ready"
    } else {
        "[Buy] disabled"
    });

    out
}

/// Renders the product list.
pub fn render_menu(catalog: &Catalog) -> String {
    let id_width = catalog
        .products()
        .iter()
        .map(|p| p.id.chars().count())
        .max()
        .unwrap_or(0);
    let name_width = catalog
        .products()
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0);

    catalog
        .products()
        .iter()
        .map(|product| {
            let price = match product.kind {
                ProductKind::Standard { price } => price.to_string(),
                ProductKind::Customizable => "customize".to_string(),
            };
            format!("  {:<id_width$}  {:<name_width$}  {:>9}", product.id, product.name, price)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the cake form hint with the choices the price table knows about.
pub fn render_cake_form(prices: &PriceTable) -> String {
    let sizes: BTreeSet<&str> = prices
        .sizes
        .keys()
        .chain(prices.flavors.values().flat_map(|by_size| by_size.keys()))
        .map(String::as_str)
        .collect();
    let flavors: Vec<&str> = prices.flavors.keys().map(String::as_str).collect();

    let mut out = String::from(
        "Customize your cake:\n  cake size=.. flavor=.. [frosting=..] [message=\"..\"] [qty=N]\n",
    );
    out.push_str(&format!("  Sizes: {}\n", join_quoted(sizes.into_iter())));
    out.push_str(&format!("  Flavors: {}", join_quoted(flavors.into_iter())));

    if !prices.frostings.is_empty() {
        let frostings = prices.frostings.keys().map(String::as_str);
        out.push_str(&format!("\n  Frostings: {}", join_quoted(frostings)));
    }
    if !prices.message_surcharge.is_zero() {
        out.push_str(&format!("\n  Message: +{}", prices.message_surcharge));
    }

    out
}

/// Values with spaces are quoted the way the parser expects them.
fn join_quoted<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values
        .map(|v| {
            if v.contains(char::is_whitespace) {
                format!("\"{v}\"")
            } else {
                v.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use dulce_core::{CakeOptions, CartStore, Money};

    fn sample_view() -> CartView {
        let mut cart = CartStore::new();
        cart.add_standard_item("brownie", "Brownie", Money::from_cents(275));
        cart.add_standard_item("brownie", "Brownie", Money::from_cents(275));
        cart.add_custom_item(
            CakeOptions::new("Mediano", "Chocolate").with_message("Hola"),
            1,
            &PriceTable::default(),
        );
        cart.view(false)
    }

    #[test]
    fn test_empty_cart() {
        let text = render_cart(&CartStore::new().view(false));
        assert_eq!(text, "Your cart is empty.\nTotal: $0.00\n[Buy] disabled");
    }

    #[test]
    fn test_cart_table_rows() {
        let text = render_cart(&sample_view());
        let lines: Vec<&str> = text.lines().collect();

        // header, two rows, rule, total, buy
        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("Item") && lines[0].contains("Subtotal"));

        assert!(lines[1].starts_with("  1  Brownie"));
        assert!(lines[1].trim_end().ends_with("$5.50"));
        assert!(lines[1].contains("$2.75"));

        assert!(lines[2].starts_with("  2  Cake (Mediano, Chocolate, \"Hola\")"));
        assert!(lines[2].trim_end().ends_with("$510.00"));

        assert_eq!(lines[4], "Total: $515.50");
        assert_eq!(lines[5], "[Buy] ready");
    }

    #[test]
    fn test_columns_line_up() {
        let text = render_cart(&sample_view());
        let widths: Vec<usize> = text.lines().take(3).map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn test_pending_order_disables_buy() {
        let mut cart = CartStore::new();
        cart.add_standard_item("latte", "Latte", Money::from_cents(300));
        let text = render_cart(&cart.view(true));
        assert!(text.ends_with("[Buy] disabled"));
    }

    #[test]
    fn test_menu_lists_every_product() {
        let catalog = Catalog::default();
        let text = render_menu(&catalog);

        assert_eq!(text.lines().count(), catalog.products().len());
        assert!(text.contains("Relámpago"));
        assert!(text.lines().any(|l| l.contains("brownie") && l.contains("$2.75")));
        assert!(text.lines().any(|l| l.contains("cake") && l.contains("customize")));
    }

    #[test]
    fn test_cake_form_lists_choices() {
        let text = render_cake_form(&PriceTable::default());

        assert!(text.contains("Mediano"));
        assert!(text.contains("10\""));
        assert!(text.contains("\"Tres Leches\""));
        assert!(!text.contains("Frostings"));
        assert!(!text.contains("Message"));
    }

    #[test]
    fn test_cake_form_shows_surcharges() {
        let prices = PriceTable::default()
            .with_frosting("Vainilla", Money::from_cents(500))
            .with_message_surcharge(Money::from_cents(200));
        let text = render_cake_form(&prices);

        assert!(text.contains("Frostings: Vainilla"));
        assert!(text.contains("Message: +$2.00"));
    }
}
