//! Users service errors.

use mongodb::error::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UsersServiceError {
    #[error("user not found")]
    NotFound,

    #[error("storage error")]
    Storage(#[source] Error),
}

impl From<Error> for UsersServiceError {
    fn from(error: Error) -> Self {
        Self::Storage(error)
    }
}
