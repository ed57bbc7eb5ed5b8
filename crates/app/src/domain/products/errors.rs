//! Products service errors.

use mongodb::error::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product not found")]
    NotFound,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Storage(#[source] Error),
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        Self::Storage(error)
    }
}

impl From<mongodb::bson::ser::Error> for ProductsServiceError {
    fn from(_error: mongodb::bson::ser::Error) -> Self {
        Self::InvalidData
    }
}
