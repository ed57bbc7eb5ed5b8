//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::products::{
        data::{NewProduct, ProductUpdate},
        errors::ProductsServiceError,
        records::{ProductId, ProductRecord},
        repository::MongoProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct MongoProductsService {
    repository: MongoProductsRepository,
}

impl MongoProductsService {
    #[must_use]
    pub fn new(db: &Db) -> Self {
        Self {
            repository: MongoProductsRepository::new(db),
        }
    }
}

#[async_trait]
impl ProductsService for MongoProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        Ok(self.repository.list_products().await?)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        Ok(self.repository.create_product(product).await?)
    }

    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<(), ProductsServiceError> {
        if update.is_empty() {
            return Err(ProductsServiceError::InvalidData);
        }

        let modified = self.repository.update_product(product, &update).await?;

        if modified != 1 {
            return Err(ProductsServiceError::NotFound);
        }

        Ok(())
    }

    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError> {
        let deleted = self.repository.delete_product(product).await?;

        if deleted == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products in storage order.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Stores a new product and returns it with its assigned ID.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Applies a partial update.
    ///
    /// Fails with `NotFound` when no document matched or the stored values
    /// were already equal to the update.
    async fn update_product(
        &self,
        product: ProductId,
        update: ProductUpdate,
    ) -> Result<(), ProductsServiceError>;

    /// Deletes a product by ID.
    async fn delete_product(&self, product: ProductId) -> Result<(), ProductsServiceError>;
}
