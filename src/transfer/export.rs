//! CSV export.

use std::io::Write;

use csv::{Terminator, Writer, WriterBuilder};
use jiff::Timestamp;
use serde::Serialize;

use crate::{
    products::Product,
    transfer::{HEADERS, MISSING_TIMESTAMP, TIMESTAMP_FORMAT, TransferError},
};

/// Exported representation of a single product.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    name: &'a str,
    description: &'a str,
    price: String,
    quantity: u32,
    created: String,
}

impl<'a> From<&'a Product> for ExportRow<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            name: &product.name,
            description: product.description.as_deref().unwrap_or_default(),
            price: product.price.to_string(),
            quantity: product.quantity,
            created: format_created(Some(product.created_at)),
        }
    }
}

/// Formats a creation time for the `Created` column.
pub fn format_created(created_at: Option<Timestamp>) -> String {
    created_at.map_or_else(
        || MISSING_TIMESTAMP.to_string(),
        |timestamp| timestamp.strftime(TIMESTAMP_FORMAT).to_string(),
    )
}

/// Forward-only CSV writer for products.
///
/// The header row is written on construction; every call to [`CsvExporter::write`]
/// appends one row to the underlying writer, so memory use does not grow with the
/// number of exported products.
#[derive(Debug)]
pub struct CsvExporter<W: Write> {
    writer: Writer<W>,
    rows: u64,
}

impl<W: Write> CsvExporter<W> {
    /// Creates an exporter and writes the header row.
    ///
    /// # Errors
    ///
    /// Returns an error when the header cannot be written.
    pub fn new(inner: W) -> Result<Self, TransferError> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .flexible(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(inner);

        writer.write_record(HEADERS)?;

        Ok(Self { writer, rows: 0 })
    }

    /// Appends a product row.
    ///
    /// # Errors
    ///
    /// Returns an error when the row cannot be written.
    pub fn write(&mut self, product: &Product) -> Result<(), TransferError> {
        self.writer.serialize(ExportRow::from(product))?;
        self.rows += 1;

        Ok(())
    }

    /// Pushes buffered rows to the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying writer fails.
    pub fn flush(&mut self) -> Result<(), TransferError> {
        self.writer.flush()?;

        Ok(())
    }

    /// Number of product rows written so far.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Flushes remaining rows and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error when the final flush fails.
    pub fn finish(self) -> Result<W, TransferError> {
        self.writer
            .into_inner()
            .map_err(|error| TransferError::Io(error.into_error()))
    }
}

/// Writes `products` as a complete CSV document, in iteration order.
///
/// # Errors
///
/// Returns an error when writing to `inner` fails.
pub fn export_products<'a, W, I>(inner: W, products: I) -> Result<W, TransferError>
where
    W: Write,
    I: IntoIterator<Item = &'a Product>,
{
    let mut exporter = CsvExporter::new(inner)?;

    for product in products {
        exporter.write(product)?;
    }

    exporter.finish()
}

/// Writes a document with the header row only, ready to be filled in and imported.
///
/// # Errors
///
/// Returns an error when writing to `inner` fails.
pub fn export_template<W: Write>(inner: W) -> Result<W, TransferError> {
    CsvExporter::new(inner)?.finish()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::products::{NewProduct, ProductId};

    use super::*;

    fn widget() -> TestResult<Product> {
        Ok(Product::from_new(
            ProductId::new(1),
            NewProduct::new(
                "Widget",
                Some("A widget".to_string()),
                Decimal::new(999, 2),
                5,
            )
            .with_created_at("2024-01-01T00:00:00Z".parse()?),
        ))
    }

    #[test]
    fn exports_header_and_rows() -> TestResult {
        let product = widget()?;

        let output = String::from_utf8(export_products(Vec::new(), [&product])?)?;

        assert_eq!(
            output,
            "Product Name,Description,Price,Stock Quantity,Created\n\
             Widget,A widget,9.99,5,2024-01-01 00:00:00\n"
        );

        Ok(())
    }

    #[test]
    fn template_has_header_only() -> TestResult {
        let output = String::from_utf8(export_template(Vec::new())?)?;

        assert_eq!(
            output,
            "Product Name,Description,Price,Stock Quantity,Created\n"
        );

        Ok(())
    }

    #[test]
    fn missing_description_is_empty_cell() -> TestResult {
        let mut product = widget()?;
        product.description = None;

        let output = String::from_utf8(export_products(Vec::new(), [&product])?)?;

        assert!(
            output.ends_with("Widget,,9.99,5,2024-01-01 00:00:00\n"),
            "unexpected output: {output}"
        );

        Ok(())
    }

    #[test]
    fn cells_with_delimiters_are_quoted() -> TestResult {
        let mut product = widget()?;
        product.name = "Bolt, M6".to_string();

        let output = String::from_utf8(export_products(Vec::new(), [&product])?)?;

        assert!(
            output.contains("\"Bolt, M6\",A widget"),
            "unexpected output: {output}"
        );

        Ok(())
    }

    #[test]
    fn missing_created_time_renders_placeholder() {
        assert_eq!(format_created(None), "-");
    }

    #[test]
    fn exporter_counts_rows() -> TestResult {
        let product = widget()?;
        let mut exporter = CsvExporter::new(Vec::new())?;

        exporter.write(&product)?;
        exporter.write(&product)?;
        exporter.flush()?;

        assert_eq!(exporter.rows(), 2);

        Ok(())
    }
}
