//! Product Records

use catalog::products::{Product, ProductId};
use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Row, postgres::PgRow};

use crate::domain::products::errors::ProductsServiceError;

/// Product row as stored in `products`.
#[derive(Debug, Clone)]
pub(crate) struct ProductRecord {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub quantity: i64,
    pub created_at: SqlxTimestamp,
    pub updated_at: Option<SqlxTimestamp>,
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            quantity: row.try_get("quantity")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = ProductsServiceError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProductId::new(record.id),
            name: record.name,
            description: record.description,
            price: record.price,
            quantity: u32::try_from(record.quantity)?,
            created_at: record.created_at.to_jiff(),
            updated_at: record.updated_at.map(SqlxTimestamp::to_jiff),
        })
    }
}
