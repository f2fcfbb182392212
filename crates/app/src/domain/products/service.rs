//! Products service.

use async_trait::async_trait;
use catalog::{
    products::{NewProduct, Product, ProductId, ProductUpdate},
    search::{Page, ProductFilter, ProductSearch},
};
use jiff::Timestamp;
use mockall::automock;

use crate::{
    database::Db,
    domain::products::{errors::ProductsServiceError, repository::PgProductsRepository},
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn count_products(&self, filter: ProductFilter) -> Result<u64, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let total = self.repository.count_products(&mut tx, &filter).await?;

        tx.commit().await?;

        Ok(total)
    }

    async fn list_products(
        &self,
        search: ProductSearch,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let records = self.repository.list_products(&mut tx, &search).await?;

        tx.commit().await?;

        records.into_iter().map(Product::try_from).collect()
    }

    async fn search_products(
        &self,
        search: ProductSearch,
    ) -> Result<Page<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        self.repository.snapshot(&mut tx).await?;

        let total = self.repository.count_products(&mut tx, &search.filter).await?;
        let records = self.repository.list_products(&mut tx, &search).await?;

        tx.commit().await?;

        let items = records
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<_, _>>()?;

        Ok(Page::new(items, search.page, total))
    }

    async fn get_product(&self, product: ProductId) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Product::try_from(record)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        product.validate()?;

        let mut tx = self.db.begin().await?;

        let record = self.repository.create_product(&mut tx, &product).await?;

        tx.commit().await?;

        Product::try_from(record)
    }

    async fn create_products(
        &self,
        products: Vec<NewProduct>,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        for product in &products {
            product.validate()?;
        }

        let mut tx = self.db.begin().await?;
        let mut records = Vec::with_capacity(products.len());

        for product in &products {
            records.push(self.repository.create_product(&mut tx, product).await?);
        }

        tx.commit().await?;

        records.into_iter().map(Product::try_from).collect()
    }

    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        update.validate()?;

        let mut tx = self.db.begin().await?;

        let record = self
            .repository
            .update_product(&mut tx, product, &update, Timestamp::now())
            .await?;

        tx.commit().await?;

        Product::try_from(record)
    }

    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Counts the products selected by `filter`.
    async fn count_products(&self, filter: ProductFilter) -> Result<u64, ProductsServiceError>;

    /// Retrieves one page of the products selected by the search, ordered by id.
    async fn list_products(
        &self,
        search: ProductSearch,
    ) -> Result<Vec<Product>, ProductsServiceError>;

    /// Counts and lists the products selected by the search from one consistent view of
    /// the store, so the total always agrees with the page.
    async fn search_products(
        &self,
        search: ProductSearch,
    ) -> Result<Page<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<Product, ProductsServiceError>;

    /// Stores a new product and assigns its id.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Stores every product, or none of them if any insert fails.
    async fn create_products(
        &self,
        products: Vec<NewProduct>,
    ) -> Result<Vec<Product>, ProductsServiceError>;

    /// Replaces the mutable fields of a product and stamps its update time.
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError>;

    /// Deletes a product.
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError>;
}
