//! Saved items service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::saved_items::{
        data::{NewSavedItem, SavedList},
        errors::SavedItemsServiceError,
        records::{SavedItemId, SavedItemRecord},
        repository::MongoSavedItemsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct MongoSavedItemsService {
    list: SavedList,
    repository: MongoSavedItemsRepository,
}

impl MongoSavedItemsService {
    #[must_use]
    pub fn new(db: &Db, list: SavedList) -> Self {
        Self {
            list,
            repository: MongoSavedItemsRepository::new(db, list),
        }
    }

    #[must_use]
    pub fn list(&self) -> SavedList {
        self.list
    }
}

#[async_trait]
impl SavedItemsService for MongoSavedItemsService {
    async fn list_items(
        &self,
        user_email: String,
    ) -> Result<Vec<SavedItemRecord>, SavedItemsServiceError> {
        Ok(self.repository.list_items(&user_email).await?)
    }

    async fn add_item(
        &self,
        item: NewSavedItem,
    ) -> Result<SavedItemRecord, SavedItemsServiceError> {
        let existing = self
            .repository
            .find_item(&item.product_name, &item.user_email)
            .await?;

        if existing.is_some() {
            debug!(list = %self.list, "item already saved for user");

            return Err(SavedItemsServiceError::AlreadyExists);
        }

        Ok(self.repository.create_item(item).await?)
    }

    async fn remove_item(
        &self,
        user_email: String,
        item: SavedItemId,
    ) -> Result<(), SavedItemsServiceError> {
        let deleted = self.repository.delete_item(&user_email, item).await?;

        if deleted != 1 {
            return Err(SavedItemsServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait SavedItemsService: Send + Sync {
    /// Retrieves every item saved by the given user.
    async fn list_items(
        &self,
        user_email: String,
    ) -> Result<Vec<SavedItemRecord>, SavedItemsServiceError>;

    /// Saves an item unless the user already saved a product with the same name.
    async fn add_item(
        &self,
        item: NewSavedItem,
    ) -> Result<SavedItemRecord, SavedItemsServiceError>;

    /// Removes the item with the given ID if it belongs to the user.
    async fn remove_item(
        &self,
        user_email: String,
        item: SavedItemId,
    ) -> Result<(), SavedItemsServiceError>;
}
