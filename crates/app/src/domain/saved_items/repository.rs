//! Saved Items Repository

use futures_util::TryStreamExt;
use mongodb::{
    Collection,
    bson::{DateTime, doc},
    error::Error,
};
use serde::Serialize;

use crate::{
    database::Db,
    domain::saved_items::{
        data::{NewSavedItem, SavedList},
        records::{SavedItemId, SavedItemRecord},
    },
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SavedItemDocument<'a> {
    #[serde(rename = "_id")]
    id: SavedItemId,
    #[serde(flatten)]
    item: &'a NewSavedItem,
    created_at: DateTime,
}

#[derive(Debug, Clone)]
pub(crate) struct MongoSavedItemsRepository {
    collection: Collection<SavedItemRecord>,
}

impl MongoSavedItemsRepository {
    #[must_use]
    pub(crate) fn new(db: &Db, list: SavedList) -> Self {
        Self {
            collection: db.collection(list.collection_name()),
        }
    }

    pub(crate) async fn list_items(&self, user_email: &str) -> Result<Vec<SavedItemRecord>, Error> {
        self.collection
            .find(doc! { "userEmail": user_email })
            .await?
            .try_collect()
            .await
    }

    pub(crate) async fn find_item(
        &self,
        product_name: &str,
        user_email: &str,
    ) -> Result<Option<SavedItemRecord>, Error> {
        self.collection
            .find_one(doc! { "productName": product_name, "userEmail": user_email })
            .await
    }

    pub(crate) async fn create_item(&self, item: NewSavedItem) -> Result<SavedItemRecord, Error> {
        let id = SavedItemId::new();
        let created_at = DateTime::now();

        self.collection
            .clone_with_type::<SavedItemDocument<'_>>()
            .insert_one(SavedItemDocument {
                id,
                item: &item,
                created_at,
            })
            .await?;

        Ok(SavedItemRecord::from_new(id, item, created_at))
    }

    pub(crate) async fn delete_item(&self, user_email: &str, item: SavedItemId) -> Result<u64, Error> {
        let result = self
            .collection
            .delete_one(doc! { "userEmail": user_email, "_id": item })
            .await?;

        Ok(result.deleted_count)
    }
}
