//! Search, export and import driven through a products store.
//!
//! Each operation builds on [`ProductsService`] only, so the same rules apply to the
//! `PostgreSQL` store, the in-memory store and mocks.

use std::io::{Read, Write};

use catalog::{
    products::{Product, ProductId},
    search::{Page, ProductSearch},
    transfer::{CsvExporter, TransferError, read_products},
};
use jiff::Timestamp;
use thiserror::Error;
use tracing::info;

use crate::domain::products::{ProductsService, ProductsServiceError};

/// Errors raised while exporting products.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Transfer(#[from] TransferError),

    #[error(transparent)]
    Store(#[from] ProductsServiceError),
}

/// Errors raised while importing products.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    Transfer(#[from] TransferError),

    #[error(transparent)]
    Store(#[from] ProductsServiceError),
}

impl ImportError {
    /// Whether the import was rejected because of the uploaded document.
    pub fn is_validation(&self) -> bool {
        match self {
            Self::Transfer(error) => error.is_validation(),
            Self::Store(error) => error.is_validation(),
        }
    }
}

/// A finished export: the filled writer and the page it holds.
#[derive(Debug)]
pub struct Export<W> {
    /// Writer the document was written to
    pub output: W,

    /// Ids and paging of the exported products
    pub page: Page<ProductId>,
}

/// Runs a search: the requested page plus the count of every match, read together.
///
/// # Errors
///
/// Returns an error when the store query fails.
pub async fn search_products(
    store: &dyn ProductsService,
    search: &ProductSearch,
) -> Result<Page<Product>, ProductsServiceError> {
    store.search_products(search.clone()).await
}

/// Writes the page selected by `search` as CSV.
///
/// The search runs exactly as [`search_products`] runs it, so an export of a search shows
/// the same products as its listing.
///
/// # Errors
///
/// Returns an error when the search or writing the document fails.
pub async fn export_products<W: Write>(
    store: &dyn ProductsService,
    search: &ProductSearch,
    output: W,
) -> Result<Export<W>, ExportError> {
    let page = search_products(store, search).await?;

    let mut exporter = CsvExporter::new(output)?;

    for product in &page.items {
        exporter.write(product)?;
    }

    let output = exporter.finish()?;

    info!(
        rows = page.items.len(),
        page = page.page,
        total = page.total,
        "exported products"
    );

    Ok(Export {
        output,
        page: page.map(|product| product.id),
    })
}

/// Imports every row of a CSV document as a single batch.
///
/// The whole document is parsed and validated before the store is touched. The store
/// then commits all rows or none of them. Rows are appended; nothing is deduplicated.
///
/// # Errors
///
/// Returns [`ImportError::Transfer`] when the document is rejected and
/// [`ImportError::Store`] when the batch cannot be committed.
pub async fn import_products<R: Read>(
    store: &dyn ProductsService,
    input: R,
    now: Timestamp,
) -> Result<Vec<Product>, ImportError> {
    let staged = read_products(input, now)?;

    if staged.is_empty() {
        info!("import contained no products");

        return Ok(Vec::new());
    }

    let imported = store.create_products(staged).await?;

    info!(rows = imported.len(), "imported products");

    Ok(imported)
}
