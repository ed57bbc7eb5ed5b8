//! Product Errors

use tracing::error;

use boutique_app::domain::products::ProductsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: ProductsServiceError) -> ApiError {
    match error {
        ProductsServiceError::InvalidData => ApiError::bad_request("Invalid product payload"),
        ProductsServiceError::NotFound => ApiError::not_found("Product not found"),
        ProductsServiceError::Storage(source) => {
            error!("product storage error: {source}");

            ApiError::internal_server_error("Internal Server Error")
        }
    }
}
