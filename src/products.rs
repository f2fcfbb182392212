//! Products

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Store-assigned product identifier.
///
/// Identifiers increase with every insert, so ordering by id is insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Wraps a raw identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ProductId> for i64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

/// Errors raised when product data breaks the record invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductError {
    /// Product names must contain at least one non-whitespace character.
    #[error("product name must not be empty")]
    EmptyName,

    /// Prices cannot be negative.
    #[error("product price must not be negative, got {0}")]
    NegativePrice(Decimal),
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Store-assigned identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Free-text description
    pub description: Option<String>,

    /// Unit price
    pub price: Decimal,

    /// Units in stock
    pub quantity: u32,

    /// Set once when the product is created
    pub created_at: Timestamp,

    /// Set on every edit, `None` until the first one
    pub updated_at: Option<Timestamp>,
}

impl Product {
    /// Builds the stored record for `product` under the identifier the store assigned.
    pub fn from_new(id: ProductId, product: NewProduct) -> Self {
        Self {
            id,
            name: product.name,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
            created_at: product.created_at,
            updated_at: None,
        }
    }

    /// Replaces the mutable fields and stamps the update time.
    ///
    /// `updated_at` never moves backwards, even if `now` is earlier than a previous edit.
    pub fn apply(&mut self, update: ProductUpdate, now: Timestamp) {
        self.name = update.name;
        self.description = update.description;
        self.price = update.price;
        self.quantity = update.quantity;
        self.updated_at = Some(self.updated_at.map_or(now, |previous| previous.max(now)));
    }
}

/// Data for a product that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// Product name
    pub name: String,

    /// Free-text description
    pub description: Option<String>,

    /// Unit price
    pub price: Decimal,

    /// Units in stock
    pub quantity: u32,

    /// Creation time recorded with the product
    pub created_at: Timestamp,
}

impl NewProduct {
    /// Creates a new product stamped with the current time.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        price: Decimal,
        quantity: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: normalize_description(description),
            price,
            quantity,
            created_at: Timestamp::now(),
        }
    }

    /// Overrides the creation time.
    #[must_use]
    pub fn with_created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = created_at;
        self
    }

    /// Checks the record invariants.
    ///
    /// # Errors
    ///
    /// Returns an error when the name is blank or the price is negative.
    pub fn validate(&self) -> Result<(), ProductError> {
        validate_fields(&self.name, self.price)
    }
}

/// Replacement values for the mutable fields of a stored product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    /// Product name
    pub name: String,

    /// Free-text description
    pub description: Option<String>,

    /// Unit price
    pub price: Decimal,

    /// Units in stock
    pub quantity: u32,
}

impl ProductUpdate {
    /// Creates an update, normalising an empty description to `None`.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        price: Decimal,
        quantity: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: normalize_description(description),
            price,
            quantity,
        }
    }

    /// Checks the record invariants.
    ///
    /// # Errors
    ///
    /// Returns an error when the name is blank or the price is negative.
    pub fn validate(&self) -> Result<(), ProductError> {
        validate_fields(&self.name, self.price)
    }
}

fn validate_fields(name: &str, price: Decimal) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::EmptyName);
    }

    if price.is_sign_negative() && !price.is_zero() {
        return Err(ProductError::NegativePrice(price));
    }

    Ok(())
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description.filter(|text| !text.is_empty())
}
