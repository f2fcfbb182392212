//! Product Errors

use std::io;

use salvo::http::StatusError;
use thiserror::Error;
use tracing::error;

use catalog_app::domain::products::{ExportError, ImportError, ProductsServiceError};

/// Problems with an uploaded import file, raised before its content is parsed.
#[derive(Debug, Error)]
pub(crate) enum UploadError {
    #[error("no file was uploaded in the \"file\" field")]
    MissingFile,

    #[error("unsupported file type \"{0}\", expected a CSV file")]
    UnsupportedMediaType(String),

    #[error("uploaded file could not be read")]
    Unreadable(#[source] io::Error),
}

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::MissingRequiredData | ProductsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid product payload")
        }
        ProductsServiceError::Invalid(source) => StatusError::bad_request().brief(source.to_string()),
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::Sql(source) => {
            error!("product storage failed: {source}");

            StatusError::internal_server_error()
        }
        ProductsServiceError::InvalidQuantity(source) => {
            error!("stored product has an invalid quantity: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn upload_status_error(error: UploadError) -> StatusError {
    match error {
        UploadError::MissingFile => StatusError::bad_request().brief(error.to_string()),
        UploadError::UnsupportedMediaType(_) => {
            StatusError::unsupported_media_type().brief(error.to_string())
        }
        UploadError::Unreadable(ref source) => {
            error!("failed to read uploaded file: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn import_status_error(error: ImportError) -> StatusError {
    match error {
        ImportError::Store(source) => into_status_error(source),
        ImportError::Transfer(source) if source.is_validation() => {
            StatusError::bad_request().brief(format!("Import failed, nothing was saved: {source}"))
        }
        ImportError::Transfer(source) => {
            error!("failed to read import: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn export_status_error(error: ExportError) -> StatusError {
    match error {
        ExportError::Store(source) => into_status_error(source),
        ExportError::Transfer(source) => {
            error!("failed to write export: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use catalog::{products::ProductError, transfer::TransferError};
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            into_status_error(ProductsServiceError::NotFound).code,
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn record_violations_map_to_400_with_message() {
        let error = into_status_error(ProductsServiceError::Invalid(ProductError::EmptyName));

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
        assert_eq!(error.brief, "product name must not be empty");
    }

    #[test]
    fn storage_failures_map_to_500() {
        let Err(source) = u32::try_from(-1_i64) else {
            return;
        };

        let error = into_status_error(ProductsServiceError::InvalidQuantity(source));

        assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn constraint_violations_map_to_400() {
        for source in [
            ProductsServiceError::InvalidData,
            ProductsServiceError::MissingRequiredData,
        ] {
            let error = into_status_error(source);

            assert_eq!(error.code, StatusCode::BAD_REQUEST);
            assert_eq!(error.brief, "Invalid product payload");
        }
    }

    #[test]
    fn document_errors_map_to_400() {
        let error = import_status_error(ImportError::Transfer(TransferError::MissingColumn(
            "Price",
        )));

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
        assert!(error.brief.contains("Price"), "unexpected brief: {}", error.brief);
    }

    #[test]
    fn non_csv_uploads_map_to_415() {
        let error = upload_status_error(UploadError::UnsupportedMediaType("image/png".into()));

        assert_eq!(error.code, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
