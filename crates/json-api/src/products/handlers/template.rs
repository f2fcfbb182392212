//! Import Template Handler

use salvo::prelude::*;

use catalog::transfer::export_template;

use crate::{extensions::*, products::handlers::render_csv};

const TEMPLATE_FILE_NAME: &str = "products_template.csv";

/// Import Template Handler
///
/// Returns a CSV document with the import header row and no products.
#[endpoint(
    tags("products"),
    summary = "Download Import Template",
    responses(
        (status_code = StatusCode::OK, description = "Header-only CSV document"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(res: &mut Response) -> Result<(), StatusError> {
    let body = export_template(Vec::new()).or_500("failed to write import template")?;

    render_csv(res, TEMPLATE_FILE_NAME, body)
}
