//! Products index request classification

use std::num::NonZeroU64;

use catalog::search::ProductSearch;

/// What a `GET /products` request asks for, decided once from its query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ProductsRequest {
    /// Page through every named product.
    Browse(ProductSearch),

    /// Page through products matching a term.
    Search(ProductSearch),

    /// Download the selected page as CSV.
    Export(ProductSearch),
}

impl ProductsRequest {
    pub(crate) fn from_params(
        query: Option<&str>,
        page: Option<&str>,
        export: Option<&str>,
        per_page: NonZeroU64,
    ) -> Self {
        let page = page
            .and_then(|page| page.trim().parse::<i64>().ok())
            .unwrap_or(1);

        let search = ProductSearch::new(query, page, per_page);

        if export.is_some_and(wants_export) {
            return Self::Export(search);
        }

        match search.filter.term() {
            Some(_) => Self::Search(search),
            None => Self::Browse(search),
        }
    }

    pub(crate) fn search(&self) -> &ProductSearch {
        match self {
            Self::Browse(search) | Self::Search(search) | Self::Export(search) => search,
        }
    }
}

fn wants_export(flag: &str) -> bool {
    !matches!(flag.trim(), "0" | "false")
}

#[cfg(test)]
mod tests {
    use catalog::search::{DEFAULT_PAGE_SIZE, ProductFilter};

    use super::*;

    #[test]
    fn no_params_browses_first_page() {
        let request = ProductsRequest::from_params(None, None, None, DEFAULT_PAGE_SIZE);

        assert!(matches!(request, ProductsRequest::Browse(_)), "{request:?}");
        assert_eq!(request.search().page.page(), 1);
    }

    #[test]
    fn empty_query_browses() {
        let request = ProductsRequest::from_params(Some(""), Some("2"), None, DEFAULT_PAGE_SIZE);

        assert!(matches!(request, ProductsRequest::Browse(_)), "{request:?}");
        assert_eq!(request.search().page.page(), 2);
    }

    #[test]
    fn query_searches() {
        let request = ProductsRequest::from_params(Some("Wid"), None, None, DEFAULT_PAGE_SIZE);

        assert_eq!(
            request,
            ProductsRequest::Search(ProductSearch::new(Some("Wid"), 1, DEFAULT_PAGE_SIZE))
        );
    }

    #[test]
    fn export_keeps_query_and_page() {
        let request =
            ProductsRequest::from_params(Some("Wid"), Some("3"), Some("1"), DEFAULT_PAGE_SIZE);

        assert!(matches!(request, ProductsRequest::Export(_)), "{request:?}");
        assert_eq!(
            request.search().filter,
            ProductFilter::Matching("Wid".to_string())
        );
        assert_eq!(request.search().page.page(), 3);
    }

    #[test]
    fn export_flag_false_does_not_export() {
        let request = ProductsRequest::from_params(None, None, Some("false"), DEFAULT_PAGE_SIZE);

        assert!(matches!(request, ProductsRequest::Browse(_)), "{request:?}");
    }

    #[test]
    fn non_numeric_page_falls_back_to_first() {
        let request = ProductsRequest::from_params(None, Some("abc"), None, DEFAULT_PAGE_SIZE);

        assert_eq!(request.search().page.page(), 1);
    }
}
