//! In-memory products store.

use async_trait::async_trait;
use catalog::{
    products::{NewProduct, Product, ProductId, ProductUpdate},
    search::{Page, ProductFilter, ProductSearch, paginate},
};
use jiff::Timestamp;
use tokio::sync::Mutex;

use crate::domain::products::{ProductsService, errors::ProductsServiceError};

#[derive(Debug)]
struct MemoryState {
    next_id: i64,
    products: Vec<Product>,
}

impl MemoryState {
    fn insert(&mut self, product: NewProduct) -> Product {
        let id = ProductId::new(self.next_id);
        self.next_id += 1;

        let product = Product::from_new(id, product);
        self.products.push(product.clone());

        product
    }

    fn find_mut(&mut self, product: ProductId) -> Result<&mut Product, ProductsServiceError> {
        self.products
            .iter_mut()
            .find(|stored| stored.id == product)
            .ok_or(ProductsServiceError::NotFound)
    }
}

/// Products store held in process memory.
///
/// Used when no database is configured and in tests. Ids start at 1 and are never reused.
#[derive(Debug)]
pub struct MemoryProductsService {
    state: Mutex<MemoryState>,
}

impl MemoryProductsService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState {
                next_id: 1,
                products: Vec::new(),
            }),
        }
    }
}

impl Default for MemoryProductsService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductsService for MemoryProductsService {
    async fn count_products(&self, filter: ProductFilter) -> Result<u64, ProductsServiceError> {
        let state = self.state.lock().await;

        let total = state
            .products
            .iter()
            .filter(|product| filter.matches(product))
            .count();

        Ok(u64::try_from(total).unwrap_or(u64::MAX))
    }

    async fn list_products(
        &self,
        search: ProductSearch,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        let state = self.state.lock().await;

        Ok(paginate(&search, &state.products).items)
    }

    async fn search_products(
        &self,
        search: ProductSearch,
    ) -> Result<Page<Product>, ProductsServiceError> {
        let state = self.state.lock().await;

        Ok(paginate(&search, &state.products))
    }

    async fn get_product(&self, product: ProductId) -> Result<Product, ProductsServiceError> {
        let state = self.state.lock().await;

        state
            .products
            .iter()
            .find(|stored| stored.id == product)
            .cloned()
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        product.validate()?;

        Ok(self.state.lock().await.insert(product))
    }

    async fn create_products(
        &self,
        products: Vec<NewProduct>,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        for product in &products {
            product.validate()?;
        }

        let mut state = self.state.lock().await;

        Ok(products
            .into_iter()
            .map(|product| state.insert(product))
            .collect())
    }

    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        update.validate()?;

        let mut state = self.state.lock().await;
        let stored = state.find_mut(product)?;

        stored.apply(update, Timestamp::now());

        Ok(stored.clone())
    }

    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError> {
        let mut state = self.state.lock().await;
        let before = state.products.len();

        state.products.retain(|stored| stored.id != product);

        if state.products.len() == before {
            return Err(ProductsServiceError::NotFound);
        }

        Ok(())
    }
}
