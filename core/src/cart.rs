//! # Cart Ledger
//!
//! Holds the ordered line items of one sale and derives the order summary
//! from them.
//!
//! Only the inputs of each line (name, unit price, quantity) are stored.
//! Line totals, subtotal, tax and grand total are recomputed from those
//! inputs on every read, so they can never drift apart.

use rust_decimal::Decimal;
use thiserror::Error;

/// Fixed 12% surcharge applied to the subtotal.
pub const TAX_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 2);

/// Smallest quantity a line item can hold.
pub const MIN_QUANTITY: u32 = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("'{product_name}' is not in the cart")]
    NotFound { product_name: String },
}

/// One product entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    product_name: String,
    unit_price: Decimal,
    quantity: u32,
}

impl LineItem {
    fn new(product_name: String, unit_price: Decimal) -> Self {
        Self {
            product_name,
            unit_price,
            quantity: MIN_QUANTITY,
        }
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `unit_price * quantity`, unrounded. Saturates at [`Decimal::MAX`].
    pub fn line_total(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// The order summary derived from the current items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl Totals {
    /// Derives tax and total from `subtotal`. Amounts past the range of
    /// [`Decimal`] saturate instead of overflowing.
    pub fn from_subtotal(subtotal: Decimal) -> Self {
        let tax = subtotal.saturating_mul(TAX_RATE);
        Self {
            subtotal,
            tax,
            total: subtotal.saturating_add(tax),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in the order they were first added.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn item(&self, product_name: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.product_name == product_name)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Adds one unit of `product_name`.
    ///
    /// An existing line is incremented; otherwise a new line with quantity 1
    /// is appended. The price is trusted as given. When the product is
    /// already present its original unit price is kept.
    pub fn add_item(&mut self, product_name: &str, unit_price: Decimal) {
        match self.items.iter_mut().find(|item| item.product_name == product_name) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => self
                .items
                .push(LineItem::new(product_name.to_string(), unit_price)),
        }
    }

    /// Sets the quantity of an existing line, clamping anything below 1 to 1.
    pub fn set_quantity(&mut self, product_name: &str, new_quantity: i64) -> Result<(), CartError> {
        let item = self.item_mut(product_name)?;
        item.quantity = clamp_quantity(new_quantity);
        Ok(())
    }

    pub fn increment_quantity(&mut self, product_name: &str) -> Result<(), CartError> {
        let item = self.item_mut(product_name)?;
        item.quantity = item.quantity.saturating_add(1);
        Ok(())
    }

    /// Lowers the quantity by one. A line at quantity 1 is left untouched;
    /// use [`Cart::remove_item`] to drop it.
    pub fn decrement_quantity(&mut self, product_name: &str) -> Result<(), CartError> {
        let item = self.item_mut(product_name)?;
        if item.quantity > MIN_QUANTITY {
            item.quantity -= 1;
        }
        Ok(())
    }

    /// Drops the line for `product_name`. Returns whether a line was removed.
    pub fn remove_item(&mut self, product_name: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.product_name != product_name);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Recomputes subtotal, tax and total from the current items.
    pub fn totals(&self) -> Totals {
        let subtotal = self
            .items
            .iter()
            .map(LineItem::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        Totals::from_subtotal(subtotal)
    }

    fn item_mut(&mut self, product_name: &str) -> Result<&mut LineItem, CartError> {
        self.items
            .iter_mut()
            .find(|item| item.product_name == product_name)
            .ok_or_else(|| CartError::NotFound {
                product_name: product_name.to_string(),
            })
    }
}

fn clamp_quantity(quantity: i64) -> u32 {
    if quantity < i64::from(MIN_QUANTITY) {
        MIN_QUANTITY
    } else {
        u32::try_from(quantity).unwrap_or(u32::MAX)
    }
}

/// Reads a quantity typed by a user.
///
/// Behaves like a lenient integer parse: surrounding whitespace is ignored,
/// an optional sign and the leading run of digits are read and anything
/// after them is discarded (`"3 pcs"` is 3). Input without leading digits
/// falls back to 1. The result may still be below 1; [`Cart::set_quantity`]
/// clamps it.
pub fn parse_quantity_input(input: &str) -> i64 {
    let trimmed = input.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() {
        return i64::from(MIN_QUANTITY);
    }

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    if negative { -magnitude } else { magnitude }
}
