//! Test helpers.

use std::sync::Arc;

use catalog::{
    products::{NewProduct, Product, ProductId},
    search::DEFAULT_PAGE_SIZE,
};
use catalog_app::{
    context::AppContext,
    domain::products::{MemoryProductsService, MockProductsService, ProductsService},
};
use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use crate::state::State;

pub(crate) const BOUNDARY: &str = "catalog-test-boundary";

pub(crate) fn state_with_products(products: Arc<dyn ProductsService>) -> Arc<State> {
    State::from_app_context(AppContext { products }, DEFAULT_PAGE_SIZE)
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(Arc::new(products))))
            .push(route),
    )
}

pub(crate) fn memory_service(products: Arc<MemoryProductsService>, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}

pub(crate) fn make_product(id: i64) -> Product {
    Product::from_new(
        ProductId::new(id),
        NewProduct::new(format!("R{id}"), None, Decimal::new(id * 100, 2), 1)
            .with_created_at(Timestamp::UNIX_EPOCH),
    )
}

/// Multipart body with a single `file` field.
pub(crate) fn multipart_file(file_name: &str, content_type: &str, content: &str) -> Vec<u8> {
    format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
         Content-Type: {content_type}\r\n\
         \r\n\
         {content}\r\n\
         --{BOUNDARY}--\r\n"
    )
    .into_bytes()
}

pub(crate) fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}
