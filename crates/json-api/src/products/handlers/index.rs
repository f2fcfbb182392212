//! Product Index Handler

use salvo::{oapi::extract::QueryParam, prelude::*};
use tracing::debug;

use catalog_app::domain::products::{export_products, search_products};

use crate::{
    extensions::*,
    products::{
        errors::{export_status_error, into_status_error},
        handlers::render_csv,
        models::ProductsResponse,
        requests::ProductsRequest,
    },
};

const EXPORT_FILE_NAME: &str = "products.csv";

/// Product Index Handler
///
/// Lists, searches or exports one page of products. `q` filters by a case-sensitive
/// substring of name, description, price or quantity. `export` returns the same page as
/// a CSV attachment instead of JSON.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Page of products, as JSON or CSV", body = ProductsResponse),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    q: QueryParam<String, false>,
    page: QueryParam<String, false>,
    export: QueryParam<String, false>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.state_or_500()?;

    let query = q.into_inner();
    let page = page.into_inner();
    let export = export.into_inner();

    let request = ProductsRequest::from_params(
        query.as_deref(),
        page.as_deref(),
        export.as_deref(),
        state.page_size,
    );

    debug!(
        page = request.search().page.page(),
        query = request.search().filter.term(),
        "products request"
    );

    let store = state.app.products.as_ref();

    match request {
        ProductsRequest::Export(search) => {
            let export = export_products(store, &search, Vec::new())
                .await
                .map_err(export_status_error)?;

            render_csv(res, EXPORT_FILE_NAME, export.output)
        }
        ProductsRequest::Browse(search) | ProductsRequest::Search(search) => {
            let found = search_products(store, &search)
                .await
                .map_err(into_status_error)?;

            let term = search.filter.term().map(ToOwned::to_owned);

            res.render(Json(ProductsResponse::new(found, term)));

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use catalog::{products::NewProduct, search::Page};
    use catalog_app::domain::products::{
        MemoryProductsService, MockProductsService, ProductsService,
    };
    use jiff::Timestamp;
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{make_product, memory_service, products_service};

    use super::*;

    async fn seeded(count: i64) -> TestResult<Arc<MemoryProductsService>> {
        let store = MemoryProductsService::new();

        for n in 1..=count {
            store
                .create_product(
                    NewProduct::new(
                        format!("R{n}"),
                        Some(format!("row {n}")),
                        Decimal::new(n * 100, 2),
                        1,
                    )
                    .with_created_at(Timestamp::UNIX_EPOCH),
                )
                .await?;
        }

        Ok(Arc::new(store))
    }

    fn make_service(store: Arc<MemoryProductsService>) -> Service {
        memory_service(store, Router::with_path("products").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_first_page() -> TestResult {
        let response: ProductsResponse = TestClient::get("http://example.com/products")
            .send(&make_service(seeded(7).await?))
            .await
            .take_json()
            .await?;

        let names: Vec<&str> = response.products.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, ["R1", "R2", "R3"]);
        assert_eq!(response.page, 1);
        assert_eq!(response.total, 7);
        assert_eq!(response.total_pages, 3);
        assert_eq!(response.query, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_last_partial_page() -> TestResult {
        let response: ProductsResponse = TestClient::get("http://example.com/products?page=3")
            .send(&make_service(seeded(7).await?))
            .await
            .take_json()
            .await?;

        let names: Vec<&str> = response.products.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, ["R7"]);
        assert_eq!(response.page, 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_search_echoes_query() -> TestResult {
        let response: ProductsResponse = TestClient::get("http://example.com/products?q=row%205")
            .send(&make_service(seeded(7).await?))
            .await
            .take_json()
            .await?;

        let names: Vec<&str> = response.products.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, ["R5"]);
        assert_eq!(response.total, 1);
        assert_eq!(response.query.as_deref(), Some("row 5"));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_export_returns_selected_page_as_csv() -> TestResult {
        let mut res = TestClient::get("http://example.com/products?page=3&export=1")
            .send(&make_service(seeded(7).await?))
            .await;

        let disposition = res
            .headers()
            .get("content-disposition")
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned);

        let body = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            disposition.as_deref(),
            Some("attachment; filename=\"products.csv\"")
        );
        assert_eq!(
            body,
            "Product Name,Description,Price,Stock Quantity,Created\n\
             R7,row 7,7.00,1,1970-01-01 00:00:00\n"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_index_export_of_empty_search_has_only_headers() -> TestResult {
        let body = TestClient::get("http://example.com/products?q=nothing&export=true")
            .send(&make_service(seeded(3).await?))
            .await
            .take_string()
            .await?;

        assert_eq!(
            body,
            "Product Name,Description,Price,Stock Quantity,Created\n"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_index_store_error_returns_500() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_search_products().once().return_once(|search| {
            u32::try_from(-1_i64)
                .map(|_| Page::new(Vec::new(), search.page, 0))
                .map_err(Into::into)
        });

        let res = TestClient::get("http://example.com/products")
            .send(&products_service(
                repo,
                Router::with_path("products").get(handler),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_passes_page_to_store() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_search_products()
            .once()
            .withf(|search| search.page.page() == 2 && search.page.offset() == 3)
            .return_once(|search| Ok(Page::new(vec![make_product(4)], search.page, 4)));

        let response: ProductsResponse = TestClient::get("http://example.com/products?page=2")
            .send(&products_service(
                repo,
                Router::with_path("products").get(handler),
            ))
            .await
            .take_json()
            .await?;

        assert_eq!(response.products.len(), 1, "expected one product");
        assert_eq!(response.total_pages, 2);

        Ok(())
    }
}
