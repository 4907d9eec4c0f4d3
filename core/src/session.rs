//! # Sales Session
//!
//! One checkout counter: a [`Cart`], the catalog it is filled from and the
//! payment method currently selected. The session owns all three, so
//! whatever renders it receives the state explicitly instead of querying
//! shared globals.
//!
//! Input arrives as [`SessionAction`]s. The textual grammar accepted by
//! [`SessionAction::from_str`] is:
//!
//! | input                 | action                          |
//! |-----------------------|---------------------------------|
//! | `add <product>`       | add one unit from the catalog   |
//! | `qty <n> <product>`   | set the quantity (clamped)      |
//! | `inc <product>`, `+`  | one more                        |
//! | `dec <product>`, `-`  | one less, never below 1         |
//! | `rm <product>`        | drop the line                   |
//! | `clear`               | empty the cart                  |
//! | `pay <method>`        | `cash`, `card` or `ewallet`     |

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::cart::{Cart, CartError, Totals, parse_quantity_input};
use crate::catalog::ProductCatalog;
use crate::command::CartCommand;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error("'{0}' is not in the catalog")]
    UnknownProduct(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseActionError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: String,
        expected: &'static str,
    },
    #[error("unknown payment method '{0}' (expected cash, card or ewallet)")]
    UnknownPaymentMethod(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    EWallet,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Cash, PaymentMethod::Card, PaymentMethod::EWallet];
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::EWallet => "E-Wallet",
        };
        f.write_str(label)
    }
}

impl FromStr for PaymentMethod {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "card" | "credit" | "debit" => Ok(PaymentMethod::Card),
            "ewallet" | "e-wallet" | "gcash" => Ok(PaymentMethod::EWallet),
            _ => Err(ParseActionError::UnknownPaymentMethod(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    Add(String),
    /// The quantity is kept as typed; it is parsed and clamped on apply.
    SetQuantity(String, String),
    Increment(String),
    Decrement(String),
    Remove(String),
    Clear,
    SelectPayment(PaymentMethod),
}

impl FromStr for SessionAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (trimmed, ""),
        };

        if keyword.is_empty() {
            return Err(ParseActionError::Empty);
        }

        let keyword_lower = keyword.to_ascii_lowercase();
        let product = |expected: &'static str| -> Result<String, ParseActionError> {
            if rest.is_empty() {
                Err(ParseActionError::MissingArgument {
                    command: keyword_lower.clone(),
                    expected,
                })
            } else {
                Ok(rest.to_string())
            }
        };

        match keyword_lower.as_str() {
            "add" => Ok(SessionAction::Add(product("a product name")?)),
            "qty" | "set" => {
                let args = product("a quantity and a product name")?;
                match args.split_once(char::is_whitespace) {
                    Some((quantity, name)) if !name.trim().is_empty() => Ok(
                        SessionAction::SetQuantity(quantity.to_string(), name.trim().to_string()),
                    ),
                    _ => Err(ParseActionError::MissingArgument {
                        command: keyword_lower.clone(),
                        expected: "a quantity and a product name",
                    }),
                }
            }
            "inc" | "+" => Ok(SessionAction::Increment(product("a product name")?)),
            "dec" | "-" => Ok(SessionAction::Decrement(product("a product name")?)),
            "rm" | "remove" => Ok(SessionAction::Remove(product("a product name")?)),
            "clear" => Ok(SessionAction::Clear),
            "pay" => Ok(SessionAction::SelectPayment(
                product("a payment method")?.parse()?,
            )),
            _ => Err(ParseActionError::UnknownCommand(keyword.to_string())),
        }
    }
}

pub struct SalesSession {
    cart: Cart,
    catalog: Box<dyn ProductCatalog>,
    payment: PaymentMethod,
}

impl SalesSession {
    pub fn new(catalog: Box<dyn ProductCatalog>) -> Self {
        Self {
            cart: Cart::new(),
            catalog,
            payment: PaymentMethod::default(),
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn catalog(&self) -> &dyn ProductCatalog {
        self.catalog.as_ref()
    }

    pub fn payment(&self) -> PaymentMethod {
        self.payment
    }

    pub fn totals(&self) -> Totals {
        self.cart.totals()
    }

    /// Translates `action` into at most one cart command and applies it.
    pub fn apply(&mut self, action: SessionAction) -> Result<Totals, SessionError> {
        let command = match action {
            SessionAction::Add(name) => {
                let product = self
                    .catalog
                    .find(&name)
                    .ok_or_else(|| SessionError::UnknownProduct(name.clone()))?;
                CartCommand::AddItem {
                    product_name: product.name.clone(),
                    unit_price: product.unit_price,
                }
            }
            SessionAction::SetQuantity(raw, product_name) => CartCommand::SetQuantity {
                product_name,
                quantity: parse_quantity_input(&raw),
            },
            SessionAction::Increment(product_name) => CartCommand::Increment { product_name },
            SessionAction::Decrement(product_name) => CartCommand::Decrement { product_name },
            SessionAction::Remove(product_name) => CartCommand::Remove { product_name },
            SessionAction::Clear => CartCommand::Clear,
            SessionAction::SelectPayment(method) => {
                debug!(%method, "payment method selected");
                self.payment = method;
                return Ok(self.cart.totals());
            }
        };

        Ok(self.cart.dispatch(command)?)
    }
}
