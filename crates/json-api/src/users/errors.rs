//! User Errors

use tracing::error;

use boutique_app::domain::users::UsersServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: UsersServiceError) -> ApiError {
    match error {
        UsersServiceError::NotFound => ApiError::unauthorized("Invalid email"),
        UsersServiceError::Storage(source) => {
            error!("user storage error: {source}");

            ApiError::internal_server_error("Internal Server Error")
        }
    }
}
