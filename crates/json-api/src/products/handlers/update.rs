//! Update Product Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use crate::{
    extensions::*,
    products::{
        errors::into_status_error,
        models::{ProductRequest, ProductResponse},
    },
};

/// Product Update Handler
///
/// Replaces name, description, price and quantity, and stamps the update time.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(id, json, depot),
    fields(product_id = tracing::field::Empty, price = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let id = id.into_inner();
    let update = json.into_inner().into_update()?;

    let span = tracing::Span::current();

    span.record("product_id", id);
    span.record("price", tracing::field::display(update.price));

    let product = state
        .app
        .products
        .update_product(id.into(), update)
        .await
        .map_err(into_status_error)?;

    tracing::info!(product_id = id, "updated product");

    Ok(Json(product.into()))
}
