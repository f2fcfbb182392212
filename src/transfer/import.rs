//! CSV import.

use std::{fmt, io::Read, str::FromStr};

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter, Trim};
use jiff::{
    Timestamp,
    civil::{Date, DateTime},
    tz::TimeZone,
};
use rust_decimal::Decimal;

use crate::{
    products::NewProduct,
    transfer::{
        CREATED_COLUMN, DESCRIPTION_COLUMN, NAME_COLUMN, PRICE_COLUMN, QUANTITY_COLUMN,
        TIMESTAMP_FORMAT, TransferError,
    },
};

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Copy)]
struct Columns {
    name: usize,
    description: usize,
    price: usize,
    quantity: usize,
    created: usize,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self, TransferError> {
        let position = |column: &'static str| {
            headers
                .iter()
                .position(|header| header.trim() == column)
                .ok_or(TransferError::MissingColumn(column))
        };

        Ok(Self {
            name: position(NAME_COLUMN)?,
            description: position(DESCRIPTION_COLUMN)?,
            price: position(PRICE_COLUMN)?,
            quantity: position(QUANTITY_COLUMN)?,
            created: position(CREATED_COLUMN)?,
        })
    }
}

/// Streaming reader turning CSV rows into new products.
///
/// Yields one `Result` per data row. Rows without a usable `Created` cell are stamped
/// with the `now` supplied at construction. Only the header row and the price,
/// quantity and created cells are trimmed; names and descriptions are kept verbatim.
pub struct CsvImporter<R> {
    records: StringRecordsIntoIter<R>,
    columns: Columns,
    row: u64,
    now: Timestamp,
}

impl<R> fmt::Debug for CsvImporter<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsvImporter")
            .field("columns", &self.columns)
            .field("row", &self.row)
            .field("now", &self.now)
            .finish_non_exhaustive()
    }
}

impl<R: Read> CsvImporter<R> {
    /// Reads the header row and resolves the column positions.
    ///
    /// # Errors
    ///
    /// Returns an error when the header row is missing, malformed or lacks one of the
    /// expected columns.
    pub fn new(inner: R, now: Timestamp) -> Result<Self, TransferError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::Headers)
            .has_headers(true)
            .flexible(false)
            .from_reader(inner);

        let columns = Columns::from_headers(reader.headers()?)?;

        Ok(Self {
            records: reader.into_records(),
            columns,
            row: 0,
            now,
        })
    }

    fn parse(&self, record: &StringRecord) -> Result<NewProduct, TransferError> {
        let cell = |index: usize| record.get(index).unwrap_or_default();

        let price = parse_cell::<Decimal>(
            self.row,
            PRICE_COLUMN,
            cell(self.columns.price).trim(),
        )?;
        let quantity = parse_cell::<u32>(
            self.row,
            QUANTITY_COLUMN,
            cell(self.columns.quantity).trim(),
        )?;

        let created_at = parse_timestamp(cell(self.columns.created).trim()).unwrap_or(self.now);

        let product = NewProduct::new(
            cell(self.columns.name),
            Some(cell(self.columns.description).to_owned()),
            price,
            quantity,
        )
        .with_created_at(created_at);

        product
            .validate()
            .map_err(|source| TransferError::InvalidProduct {
                row: self.row,
                source,
            })?;

        Ok(product)
    }
}

impl<R: Read> Iterator for CsvImporter<R> {
    type Item = Result<NewProduct, TransferError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;

        self.row += 1;

        Some(
            record
                .map_err(TransferError::from)
                .and_then(|record| self.parse(&record)),
        )
    }
}

fn parse_cell<T>(row: u64, column: &'static str, value: &str) -> Result<T, TransferError>
where
    T: FromStr,
    T::Err: ToString,
{
    value.parse::<T>().map_err(|error| TransferError::InvalidCell {
        row,
        column,
        value: value.to_owned(),
        reason: error.to_string(),
    })
}

/// Parses a `Created` cell.
///
/// Accepts the export layout (`YYYY-MM-DD HH:MM:SS`, UTC), RFC 3339 timestamps and bare
/// dates (midnight UTC). Returns `None` for anything else, including the `-` placeholder.
pub fn parse_timestamp(value: &str) -> Option<Timestamp> {
    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Some(timestamp);
    }

    if let Ok(datetime) = DateTime::strptime(TIMESTAMP_FORMAT, value) {
        return datetime
            .to_zoned(TimeZone::UTC)
            .ok()
            .map(|zoned| zoned.timestamp());
    }

    value
        .parse::<Date>()
        .ok()
        .and_then(|date| date.to_zoned(TimeZone::UTC).ok())
        .map(|zoned| zoned.timestamp())
}

/// Parses every row of a CSV document.
///
/// Either every row is returned or none is: the first invalid row aborts the whole read.
///
/// # Errors
///
/// Returns the first header, syntax or validation error encountered.
pub fn read_products<R: Read>(inner: R, now: Timestamp) -> Result<Vec<NewProduct>, TransferError> {
    CsvImporter::new(inner, now)?.collect()
}
