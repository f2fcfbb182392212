//! Product request and response bodies.

use std::str::FromStr;

use catalog::{
    products::{NewProduct, Product, ProductUpdate},
    search::Page,
    transfer::TIMESTAMP_FORMAT,
};
use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{oapi::ToSchema, prelude::StatusError};
use serde::{Deserialize, Serialize};

use crate::extensions::*;

fn format_timestamp(timestamp: Timestamp) -> String {
    timestamp.strftime(TIMESTAMP_FORMAT).to_string()
}

/// Product
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// Product id
    pub id: i64,

    /// Product name
    pub name: String,

    /// Free-text description
    pub description: Option<String>,

    /// Unit price as a decimal string, e.g. `"9.99"`
    pub price: String,

    /// Units in stock
    pub quantity: u32,

    /// Creation time (UTC, `YYYY-MM-DD HH:MM:SS`)
    pub created_at: String,

    /// Last edit time (UTC, `YYYY-MM-DD HH:MM:SS`)
    pub updated_at: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id.into_inner(),
            name: product.name,
            description: product.description,
            price: product.price.to_string(),
            quantity: product.quantity,
            created_at: format_timestamp(product.created_at),
            updated_at: product.updated_at.map(format_timestamp),
        }
    }
}

/// One page of products
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// Products on this page, ordered by id
    pub products: Vec<ProductResponse>,

    /// 1-based page number
    pub page: u64,

    /// Page size
    pub per_page: u64,

    /// Matches across all pages
    pub total: u64,

    /// Number of pages
    pub total_pages: u64,

    /// Search term, when searching
    pub query: Option<String>,
}

impl ProductsResponse {
    pub(crate) fn new(page: Page<Product>, query: Option<String>) -> Self {
        let total_pages = page.total_pages();

        ProductsResponse {
            page: page.page,
            per_page: page.per_page,
            total: page.total,
            total_pages,
            query,
            products: page.items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Product create and edit form
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductRequest {
    /// Product name
    pub name: String,

    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,

    /// Unit price as a decimal string, e.g. `"9.99"`
    pub price: String,

    /// Units in stock
    pub quantity: u32,
}

impl ProductRequest {
    fn price(&self) -> Result<Decimal, StatusError> {
        Decimal::from_str(self.price.trim()).or_400("invalid price")
    }

    pub(crate) fn into_new_product(self) -> Result<NewProduct, StatusError> {
        let price = self.price()?;

        Ok(NewProduct::new(
            self.name,
            self.description,
            price,
            self.quantity,
        ))
    }

    pub(crate) fn into_update(self) -> Result<ProductUpdate, StatusError> {
        let price = self.price()?;

        Ok(ProductUpdate::new(
            self.name,
            self.description,
            price,
            self.quantity,
        ))
    }
}

/// Import result
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ImportResponse {
    /// Number of products created
    pub imported: usize,

    /// Sanitised name of the uploaded file
    pub file_name: String,
}
