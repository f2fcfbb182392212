//! Product search and pagination.
//!
//! A [`ProductSearch`] is built once per request and handed unchanged to both the count
//! query and the data query of a store. Stores must order matches by ascending
//! [`ProductId`](crate::products::ProductId), which keeps pages disjoint and lets an export
//! replay exactly the page a listing showed.

use std::num::NonZeroU64;

use crate::products::Product;

/// Number of products shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: NonZeroU64 = NonZeroU64::MIN.saturating_add(2);

/// Which products a search selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    /// Every product with a non-empty name.
    Listed,

    /// Products whose name, description, price or quantity contains the term.
    ///
    /// Matching is a case-sensitive substring test.
    Matching(String),
}

impl ProductFilter {
    /// Chooses the filter for an optional free-text query.
    ///
    /// A missing or empty query lists every named product; any other query is kept as-is.
    pub fn from_query(query: Option<&str>) -> Self {
        match query {
            Some(term) if !term.is_empty() => Self::Matching(term.to_owned()),
            Some(_) | None => Self::Listed,
        }
    }

    /// Returns the search term, if any.
    pub fn term(&self) -> Option<&str> {
        match self {
            Self::Listed => None,
            Self::Matching(term) => Some(term),
        }
    }

    /// Evaluates the filter against a single product.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::Listed => !product.name.is_empty(),
            Self::Matching(term) => {
                let term = term.as_str();

                product.name.contains(term)
                    || product
                        .description
                        .as_deref()
                        .is_some_and(|description| description.contains(term))
                    || product.price.to_string().contains(term)
                    || product.quantity.to_string().contains(term)
            }
        }
    }
}

/// A 1-based page of fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: NonZeroU64,
    per_page: NonZeroU64,
}

impl PageRequest {
    /// Creates a page request, treating zero and negative page numbers as page 1.
    pub fn new(page: i64, per_page: NonZeroU64) -> Self {
        let page = u64::try_from(page)
            .ok()
            .and_then(NonZeroU64::new)
            .unwrap_or(NonZeroU64::MIN);

        Self { page, per_page }
    }

    /// First page of the given size.
    pub fn first(per_page: NonZeroU64) -> Self {
        Self {
            page: NonZeroU64::MIN,
            per_page,
        }
    }

    /// The 1-based page number.
    pub fn page(&self) -> u64 {
        self.page.get()
    }

    /// The page size.
    pub fn per_page(&self) -> u64 {
        self.per_page.get()
    }

    /// Number of matches skipped before this page.
    pub fn offset(&self) -> u64 {
        (self.page.get() - 1).saturating_mul(self.per_page.get())
    }

    /// Maximum number of matches on this page.
    pub fn limit(&self) -> u64 {
        self.per_page.get()
    }
}

/// Filter and page of a single search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSearch {
    /// Which products match
    pub filter: ProductFilter,

    /// Which slice of the matches to return
    pub page: PageRequest,
}

impl ProductSearch {
    /// Creates a search from request parameters.
    pub fn new(query: Option<&str>, page: i64, per_page: NonZeroU64) -> Self {
        Self {
            filter: ProductFilter::from_query(query),
            page: PageRequest::new(page, per_page),
        }
    }
}

/// One page of search results plus the total match count.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items on this page, in store order
    pub items: Vec<T>,

    /// 1-based page number
    pub page: u64,

    /// Page size the results were cut with
    pub per_page: u64,

    /// Matches across all pages
    pub total: u64,
}

impl<T> Page<T> {
    /// Assembles a page for `request`.
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            page: request.page(),
            per_page: request.per_page(),
            total,
        }
    }

    /// Number of pages needed to show every match; zero when nothing matched.
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.per_page.max(1))
    }

    /// Whether no further pages follow this one.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages()
    }

    /// Converts the items, keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
        }
    }
}

/// Runs a search over products held in memory.
///
/// Products are ordered by id before filtering, so the input order does not matter.
pub fn paginate(search: &ProductSearch, products: &[Product]) -> Page<Product> {
    let mut matching: Vec<&Product> = products
        .iter()
        .filter(|product| search.filter.matches(product))
        .collect();

    matching.sort_by_key(|product| product.id);

    let total = u64::try_from(matching.len()).unwrap_or(u64::MAX);

    let offset = usize::try_from(search.page.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(search.page.limit()).unwrap_or(usize::MAX);

    let items = matching
        .into_iter()
        .skip(offset)
        .take(limit)
        .cloned()
        .collect();

    Page::new(items, search.page, total)
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;

    use crate::products::{NewProduct, ProductId};

    use super::*;

    fn product(id: i64, name: &str) -> Product {
        Product::from_new(
            ProductId::new(id),
            NewProduct::new(name, Some("A widget".to_string()), Decimal::new(999, 2), 5)
                .with_created_at(Timestamp::UNIX_EPOCH),
        )
    }

    #[test]
    fn default_page_size_is_three() {
        assert_eq!(DEFAULT_PAGE_SIZE.get(), 3);
    }

    #[test]
    fn empty_query_lists_named_products() {
        assert_eq!(ProductFilter::from_query(None), ProductFilter::Listed);
        assert_eq!(ProductFilter::from_query(Some("")), ProductFilter::Listed);
    }

    #[test]
    fn query_is_kept_verbatim() {
        assert_eq!(
            ProductFilter::from_query(Some(" Wid")),
            ProductFilter::Matching(" Wid".to_string())
        );
    }

    #[test]
    fn listed_excludes_empty_names() {
        assert!(ProductFilter::Listed.matches(&product(1, "Widget")));
        assert!(!ProductFilter::Listed.matches(&product(2, "")));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let widget = Product::from_new(
            ProductId::new(1),
            NewProduct::new("Widget", None, Decimal::new(999, 2), 5)
                .with_created_at(Timestamp::UNIX_EPOCH),
        );

        assert!(ProductFilter::Matching("Widg".to_string()).matches(&widget));
        assert!(!ProductFilter::Matching("widg".to_string()).matches(&widget));
    }

    #[test]
    fn matching_checks_every_field() {
        let widget = product(1, "Widget");

        assert!(ProductFilter::Matching("widget".to_string()).matches(&widget));
        assert!(ProductFilter::Matching("9.9".to_string()).matches(&widget));
        assert!(ProductFilter::Matching("5".to_string()).matches(&widget));
        assert!(!ProductFilter::Matching("gizmo".to_string()).matches(&widget));
    }

    #[test]
    fn matching_can_select_unnamed_products() {
        assert!(ProductFilter::Matching("widget".to_string()).matches(&product(1, "")));
    }

    #[test]
    fn non_positive_pages_clamp_to_first() {
        assert_eq!(PageRequest::new(0, DEFAULT_PAGE_SIZE).page(), 1);
        assert_eq!(PageRequest::new(-4, DEFAULT_PAGE_SIZE).page(), 1);
        assert_eq!(PageRequest::new(3, DEFAULT_PAGE_SIZE).offset(), 6);
    }

    #[test]
    fn total_pages_rounds_up() {
        let request = PageRequest::first(DEFAULT_PAGE_SIZE);

        assert_eq!(Page::<()>::new(vec![], request, 0).total_pages(), 0);
        assert_eq!(Page::<()>::new(vec![], request, 3).total_pages(), 1);
        assert_eq!(Page::<()>::new(vec![], request, 7).total_pages(), 3);
    }

    #[test]
    fn paginate_orders_by_id() {
        let products = [product(3, "C"), product(1, "A"), product(2, "B")];

        let page = paginate(
            &ProductSearch::new(None, 1, DEFAULT_PAGE_SIZE),
            &products,
        );

        let ids: Vec<i64> = page.items.iter().map(|p| p.id.into_inner()).collect();

        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(page.total, 3);
        assert!(page.is_last());
    }
}
