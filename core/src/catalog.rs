//! # Product Catalog
//!
//! The source of `(name, unit price)` pairs the cart trusts when a product is
//! added. The [`ProductCatalog`] trait is the seam; [`InMemoryCatalog`] is the
//! only implementation and is either built in or read from a JSON file.
//!
//! File format: a JSON array of products. Prices may be numbers or display
//! strings.
//!
//! ```json
//! [
//!   { "name": "Wireless Mouse", "category": "Accessories", "stock": 42, "price": "₱1,250.00" },
//!   { "name": "USB-C Cable", "category": "Accessories", "stock": 120, "price": 349.5 }
//! ]
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use till_common::money::{self, MoneyError};

use crate::table::Table;

pub const PRODUCT_COLUMNS: [&str; 4] = ["Product", "Category", "Stock", "Price"];

/// Index of the category column in [`PRODUCT_COLUMNS`].
pub const CATEGORY_COLUMN: usize = 1;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("product has an empty name")]
    EmptyName,
    #[error("invalid price for '{product}'")]
    Price {
        product: String,
        #[source]
        source: MoneyError,
    },
    #[error("negative price for '{product}'")]
    NegativePrice { product: String },
    #[error("'{product}' is listed more than once")]
    Duplicate { product: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub stock: u32,
    pub unit_price: Decimal,
}

impl Product {
    pub fn new(name: &str, category: &str, stock: u32, unit_price: Decimal) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            stock,
            unit_price,
        }
    }

    /// The product as a listing row, in [`PRODUCT_COLUMNS`] order.
    pub fn to_row(&self, currency_symbol: &str) -> Vec<String> {
        vec![
            self.name.clone(),
            self.category.clone(),
            self.stock.to_string(),
            money::format_amount(self.unit_price, currency_symbol),
        ]
    }
}

pub trait ProductCatalog {
    fn products(&self) -> &[Product];

    /// Exact, case-sensitive name lookup.
    fn find(&self, name: &str) -> Option<&Product> {
        self.products().iter().find(|product| product.name == name)
    }

    fn to_table(&self, currency_symbol: &str) -> Table {
        let rows = self
            .products()
            .iter()
            .map(|product| product.to_row(currency_symbol))
            .collect();
        Table::new(PRODUCT_COLUMNS.iter().map(|c| c.to_string()).collect(), rows)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

#[derive(Deserialize)]
struct RawProduct {
    name: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    stock: u32,
    price: RawPrice,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(serde_json::Number),
    Text(String),
}

impl InMemoryCatalog {
    /// Builds a catalog, rejecting empty names, negative prices and duplicates.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            if product.name.trim().is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if product.unit_price.is_sign_negative() && !product.unit_price.is_zero() {
                return Err(CatalogError::NegativePrice {
                    product: product.name.clone(),
                });
            }
            if !seen.insert(product.name.as_str()) {
                return Err(CatalogError::Duplicate {
                    product: product.name.clone(),
                });
            }
        }
        Ok(Self { products })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: Vec<RawProduct> = serde_json::from_str(json)?;
        let products = raw
            .into_iter()
            .map(|raw| {
                let text = match raw.price {
                    RawPrice::Number(number) => number.to_string(),
                    RawPrice::Text(text) => text,
                };
                let unit_price = money::parse_amount(&text).map_err(|source| CatalogError::Price {
                    product: raw.name.clone(),
                    source,
                })?;
                Ok(Product {
                    name: raw.name.trim().to_string(),
                    category: raw.category,
                    stock: raw.stock,
                    unit_price,
                })
            })
            .collect::<Result<Vec<Product>, CatalogError>>()?;

        Self::new(products)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The stock list shipped with the binary.
    pub fn demo() -> Self {
        let products = DEMO_PRODUCTS
            .iter()
            .map(|&(name, category, stock, cents)| {
                Product::new(name, category, stock, Decimal::new(cents, 2))
            })
            .collect();
        Self { products }
    }
}

impl ProductCatalog for InMemoryCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }
}

/// `(name, category, stock, price in centavos)`
const DEMO_PRODUCTS: &[(&str, &str, u32, i64)] = &[
    ("Laptop Pro 14", "Computers", 8, 5499900),
    ("Office Desktop", "Computers", 5, 3250000),
    ("27\" Monitor", "Displays", 14, 1275000),
    ("Wireless Mouse", "Accessories", 42, 125000),
    ("Mechanical Keyboard", "Accessories", 23, 389950),
    ("USB-C Cable", "Accessories", 120, 34975),
    ("Laser Printer", "Printers", 6, 899000),
    ("Toner Cartridge", "Printers", 31, 215000),
    ("Wi-Fi Router", "Networking", 17, 279900),
    ("Network Switch 8-Port", "Networking", 9, 189900),
];
