//! Saved items service errors.

use mongodb::error::Error;
use thiserror::Error;

use crate::database::is_duplicate_key;

#[derive(Debug, Error)]
pub enum SavedItemsServiceError {
    #[error("item already exists")]
    AlreadyExists,

    #[error("item not found")]
    NotFound,

    #[error("storage error")]
    Storage(#[source] Error),
}

impl From<Error> for SavedItemsServiceError {
    fn from(error: Error) -> Self {
        if is_duplicate_key(&error) {
            return Self::AlreadyExists;
        }

        Self::Storage(error)
    }
}
