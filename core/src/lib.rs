//! # Till Core
//!
//! The models behind the `till` front end.
//!
//! * **[`cart`]**: the Cart Ledger. Line items plus derived subtotal, tax and total.
//! * **[`command`]**: named ledger operations, dispatched instead of wired to UI callbacks.
//! * **[`catalog`]**: the product listing that feeds prices into the cart.
//! * **[`session`]**: one sales session owning a cart, a catalog and a payment method.
//! * **[`table`]**: search and column filtering over tabular listings.
//! * **[`users`]**: the user directory with confirmed deletes.
//!
//! Nothing in here performs IO beyond reading catalog and user files; rendering
//! is left entirely to the caller.

pub mod cart;
pub mod catalog;
pub mod command;
pub mod session;
pub mod table;
pub mod users;
