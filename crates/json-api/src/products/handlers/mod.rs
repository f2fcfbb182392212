//! Product Handlers

use salvo::{
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    prelude::*,
};

use crate::extensions::*;

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod import;
pub(crate) mod index;
pub(crate) mod template;
pub(crate) mod update;

const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// Writes `body` as a downloadable CSV file named `file_name`.
fn render_csv(res: &mut Response, file_name: &str, body: Vec<u8>) -> Result<(), StatusError> {
    res.add_header(CONTENT_TYPE, CSV_CONTENT_TYPE, true)
        .or_500("failed to set content type header")?
        .add_header(
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{file_name}\""),
            true,
        )
        .or_500("failed to set content disposition header")?
        .write_body(body)
        .or_500("failed to write csv body")
}
