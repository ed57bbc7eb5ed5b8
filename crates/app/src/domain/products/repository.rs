//! Products Repository

use futures_util::TryStreamExt;
use mongodb::{
    Collection,
    bson::{DateTime, doc, to_document},
    error::Error,
};
use serde::Serialize;

use crate::{
    database::{Db, PRODUCTS_COLLECTION},
    domain::products::{
        ProductsServiceError,
        data::{NewProduct, ProductUpdate},
        records::{ProductId, ProductRecord},
    },
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProductDocument<'a> {
    #[serde(rename = "_id")]
    id: ProductId,
    #[serde(flatten)]
    product: &'a NewProduct,
    created_at: DateTime,
}

#[derive(Debug, Clone)]
pub(crate) struct MongoProductsRepository {
    collection: Collection<ProductRecord>,
}

impl MongoProductsRepository {
    #[must_use]
    pub(crate) fn new(db: &Db) -> Self {
        Self {
            collection: db.collection(PRODUCTS_COLLECTION),
        }
    }

    pub(crate) async fn list_products(&self) -> Result<Vec<ProductRecord>, Error> {
        self.collection.find(doc! {}).await?.try_collect().await
    }

    pub(crate) async fn create_product(&self, product: NewProduct) -> Result<ProductRecord, Error> {
        let id = ProductId::new();
        let created_at = DateTime::now();

        self.collection
            .clone_with_type::<ProductDocument<'_>>()
            .insert_one(ProductDocument {
                id,
                product: &product,
                created_at,
            })
            .await?;

        Ok(ProductRecord::from_new(id, product, created_at))
    }

    /// Apply `$set` for the given fields, returning the number of modified documents.
    pub(crate) async fn update_product(
        &self,
        product: ProductId,
        update: &ProductUpdate,
    ) -> Result<u64, ProductsServiceError> {
        let fields = to_document(update)?;

        let result = self
            .collection
            .update_one(doc! { "_id": product }, doc! { "$set": fields })
            .await?;

        Ok(result.modified_count)
    }

    pub(crate) async fn delete_product(&self, product: ProductId) -> Result<u64, Error> {
        let result = self
            .collection
            .delete_one(doc! { "_id": product })
            .await?;

        Ok(result.deleted_count)
    }
}
