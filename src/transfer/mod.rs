//! CSV transfer of products.
//!
//! Exports write a fixed five-column layout, one row per product, as rows are handed to
//! the [`CsvExporter`]. Imports accept the same layout, look columns up by header name and
//! stage every row before anything is returned, so a caller can commit an import as a
//! single batch or not at all.

use std::io;

use thiserror::Error;

use crate::products::ProductError;

mod export;
mod filename;
mod import;

pub use export::{CsvExporter, export_products, export_template, format_created};
pub use filename::sanitize_filename;
pub use import::{CsvImporter, parse_timestamp, read_products};

/// Header of the product name column.
pub const NAME_COLUMN: &str = "Product Name";

/// Header of the description column.
pub const DESCRIPTION_COLUMN: &str = "Description";

/// Header of the price column.
pub const PRICE_COLUMN: &str = "Price";

/// Header of the stock quantity column.
pub const QUANTITY_COLUMN: &str = "Stock Quantity";

/// Header of the creation time column.
pub const CREATED_COLUMN: &str = "Created";

/// Header row, in export order.
pub const HEADERS: [&str; 5] = [
    NAME_COLUMN,
    DESCRIPTION_COLUMN,
    PRICE_COLUMN,
    QUANTITY_COLUMN,
    CREATED_COLUMN,
];

/// Layout of the creation time column (UTC).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Placeholder written when a product has no creation time.
pub const MISSING_TIMESTAMP: &str = "-";

/// Errors raised while exporting or importing products.
#[derive(Debug, Error)]
pub enum TransferError {
    /// The header row lacks a required column.
    #[error("missing column \"{0}\" in header row")]
    MissingColumn(&'static str),

    /// A cell could not be converted to its field type.
    #[error("row {row}: invalid {column} \"{value}\": {reason}")]
    InvalidCell {
        /// 1-based data row number
        row: u64,
        /// Header of the offending column
        column: &'static str,
        /// Raw cell content
        value: String,
        /// Parser message
        reason: String,
    },

    /// A row parsed but describes an invalid product.
    #[error("row {row}: {source}")]
    InvalidProduct {
        /// 1-based data row number
        row: u64,
        /// Violated invariant
        #[source]
        source: ProductError,
    },

    /// The document is not well-formed CSV.
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Writing the document failed.
    #[error("failed to write CSV: {0}")]
    Io(#[from] io::Error),
}

impl TransferError {
    /// Whether the error is caused by the document rather than by the underlying stream.
    pub fn is_validation(&self) -> bool {
        match self {
            Self::MissingColumn(_) | Self::InvalidCell { .. } | Self::InvalidProduct { .. } => {
                true
            }
            Self::Csv(error) => !error.is_io_error(),
            Self::Io(_) => false,
        }
    }
}
