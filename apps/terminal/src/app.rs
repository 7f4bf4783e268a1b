//! # Storefront Shell
//!
//! Maps parsed [`Input`] onto the checkout session and renders the reply.
//! Rows typed by number are resolved against the table the shopper last saw.

use dulce_checkout::{Activation, CartCommand, CheckoutError, CheckoutSession, OrderTransport};
use tracing::debug;

use crate::commands::{Input, RowRef};
use crate::render;

/// What the loop should do after one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this and read the next line.
    Text(String),
    /// Leave the loop.
    Quit,
}

/// The terminal front end over one checkout session.
pub struct Storefront<T> {
    session: CheckoutSession<T>,
    store_name: String,
}

impl<T: OrderTransport> Storefront<T> {
    pub fn new(session: CheckoutSession<T>, store_name: impl Into<String>) -> Self {
        Storefront {
            session,
            store_name: store_name.into(),
        }
    }

    pub fn session(&self) -> &CheckoutSession<T> {
        &self.session
    }

    /// Greeting printed once at startup.
    pub fn banner(&self) -> String {
        format!(
            "{}\n\n{}\n\nType `help` for commands.",
            self.store_name,
            render::render_menu(self.session.catalog())
        )
    }

    /// Handles one command.
    pub async fn handle(&mut self, input: Input) -> Reply {
        debug!(?input, "terminal input");

        let text = match input {
            Input::Menu => render::render_menu(self.session.catalog()),
            Input::Help => render::HELP.to_string(),
            Input::Quit => return Reply::Quit,
            Input::Show => self.cart_text(),
            Input::Add(id) => match self.session.press_product(&id) {
                Ok(Activation::Added(view)) => render::render_cart(&view),
                Ok(Activation::OpenCustomizer) => {
                    render::render_cake_form(self.session.prices())
                }
                Err(err) => err.user_message(),
            },
            Input::Cake { options, quantity } => {
                self.apply(CartCommand::AddCake { options, quantity })
            }
            Input::Increment(row) => self.apply_to_row(row, |id| CartCommand::Increment { id }),
            Input::Decrement(row) => self.apply_to_row(row, |id| CartCommand::Decrement { id }),
            Input::Remove(row) => self.apply_to_row(row, |id| CartCommand::Remove { id }),
            Input::Clear => self.apply(CartCommand::Clear),
            Input::Buy => self.buy().await,
        };

        Reply::Text(text)
    }

    fn cart_text(&self) -> String {
        render::render_cart(&self.session.view())
    }

    fn apply(&mut self, command: CartCommand) -> String {
        match self.session.dispatch(command) {
            Ok(view) => render::render_cart(&view),
            Err(err) => err.user_message(),
        }
    }

    fn apply_to_row(&mut self, row: RowRef, command: impl FnOnce(String) -> CartCommand) -> String {
        let id = match row {
            RowRef::Id(id) => id,
            RowRef::Position(n) => {
                let view = self.session.view();
                match n.checked_sub(1).and_then(|i| view.items.get(i)) {
                    Some(item) => item.id.clone(),
                    None => return format!("No row {n} in the cart"),
                }
            }
        };

        self.apply(command(id))
    }

    async fn buy(&mut self) -> String {
        match self.session.checkout().await {
            Ok(notice) => format!("{notice}\n\n{}", self.cart_text()),
            Err(CheckoutError::EmptyCart) => "Your cart is empty.".to_string(),
            Err(err) => err.user_message(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
