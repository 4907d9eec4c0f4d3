//! Named ledger operations.
//!
//! Front ends translate their events (a button, a typed line) into a
//! [`CartCommand`] and hand it to [`Cart::dispatch`]. The cart never sees
//! where the event came from.

use std::fmt;

use rust_decimal::Decimal;
use tracing::debug;

use crate::cart::{Cart, CartError, Totals};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartCommand {
    AddItem { product_name: String, unit_price: Decimal },
    SetQuantity { product_name: String, quantity: i64 },
    Increment { product_name: String },
    Decrement { product_name: String },
    Remove { product_name: String },
    Clear,
}

impl fmt::Display for CartCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartCommand::AddItem { product_name, unit_price } => {
                write!(f, "add '{product_name}' at {unit_price}")
            }
            CartCommand::SetQuantity { product_name, quantity } => {
                write!(f, "set '{product_name}' to {quantity}")
            }
            CartCommand::Increment { product_name } => write!(f, "increment '{product_name}'"),
            CartCommand::Decrement { product_name } => write!(f, "decrement '{product_name}'"),
            CartCommand::Remove { product_name } => write!(f, "remove '{product_name}'"),
            CartCommand::Clear => write!(f, "clear"),
        }
    }
}

impl Cart {
    /// Applies exactly one ledger operation and returns the fresh totals.
    ///
    /// On error the cart is left as it was.
    pub fn dispatch(&mut self, command: CartCommand) -> Result<Totals, CartError> {
        debug!(%command, "dispatching cart command");

        match command {
            CartCommand::AddItem { product_name, unit_price } => {
                self.add_item(&product_name, unit_price)
            }
            CartCommand::SetQuantity { product_name, quantity } => {
                self.set_quantity(&product_name, quantity)?
            }
            CartCommand::Increment { product_name } => self.increment_quantity(&product_name)?,
            CartCommand::Decrement { product_name } => self.decrement_quantity(&product_name)?,
            CartCommand::Remove { product_name } => {
                if !self.remove_item(&product_name) {
                    debug!(product_name = product_name.as_str(), "remove ignored, product not in cart");
                }
            }
            CartCommand::Clear => self.clear(),
        }

        let totals = self.totals();
        debug!(
            subtotal = %totals.subtotal,
            tax = %totals.tax,
            total = %totals.total,
            items = self.len(),
            "cart totals recomputed"
        );
        Ok(totals)
    }
}
