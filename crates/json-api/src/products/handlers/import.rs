//! Import Products Handler

use salvo::{http::form::FilePart, prelude::*};
use tracing::info;

use catalog::transfer::sanitize_filename;
use catalog_app::domain::products::import_products;
use jiff::Timestamp;

use crate::{
    extensions::*,
    products::{
        errors::{UploadError, import_status_error, upload_status_error},
        models::ImportResponse,
    },
};

const FILE_FIELD: &str = "file";

const CSV_MEDIA_TYPES: [&str; 4] = [
    "text/csv",
    "application/csv",
    "application/vnd.ms-excel",
    "text/plain",
];

fn check_csv(file: &FilePart) -> Result<(), UploadError> {
    let media_type = file
        .content_type()
        .map(|mime| mime.essence_str().to_ascii_lowercase());

    if media_type
        .as_deref()
        .is_some_and(|media_type| CSV_MEDIA_TYPES.contains(&media_type))
    {
        return Ok(());
    }

    if file
        .name()
        .is_some_and(|name| name.to_ascii_lowercase().ends_with(".csv"))
    {
        return Ok(());
    }

    Err(UploadError::UnsupportedMediaType(
        media_type.unwrap_or_else(|| "unknown".to_string()),
    ))
}

/// Import Products Handler
///
/// Accepts a CSV document in the multipart field `file`. Every row is validated before
/// anything is stored; one bad row rejects the whole file and nothing is saved.
#[endpoint(
    tags("products"),
    summary = "Import Products",
    responses(
        (status_code = StatusCode::CREATED, description = "All rows imported"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing file or invalid row, nothing imported"),
        (status_code = StatusCode::UNSUPPORTED_MEDIA_TYPE, description = "Upload is not a CSV file"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "products.import", skip_all, err)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ImportResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let file = req
        .file(FILE_FIELD)
        .await
        .ok_or(UploadError::MissingFile)
        .map_err(upload_status_error)?;

    check_csv(file).map_err(upload_status_error)?;

    let file_name = sanitize_filename(file.name().unwrap_or_default());

    let content = tokio::fs::read(file.path())
        .await
        .map_err(UploadError::Unreadable)
        .map_err(upload_status_error)?;

    let imported = import_products(
        state.app.products.as_ref(),
        content.as_slice(),
        Timestamp::now(),
    )
    .await
    .map_err(import_status_error)?;

    info!(rows = imported.len(), %file_name, "import committed");

    res.status_code(StatusCode::CREATED);

    Ok(Json(ImportResponse {
        imported: imported.len(),
        file_name,
    }))
}
