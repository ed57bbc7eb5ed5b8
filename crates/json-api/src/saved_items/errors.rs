//! Saved Item Errors

use tracing::error;

use boutique_app::domain::saved_items::{SavedItemsServiceError, SavedList};

use crate::{errors::ApiError, observability::record_saved_item_conflict};

pub(crate) fn into_api_error(error: SavedItemsServiceError, list: SavedList) -> ApiError {
    match error {
        SavedItemsServiceError::AlreadyExists => {
            record_saved_item_conflict(list);

            ApiError::conflict(format!("Item already exists in {list}"))
        }
        SavedItemsServiceError::NotFound => ApiError::not_found("Item not found"),
        SavedItemsServiceError::Storage(source) => {
            error!(%list, "saved item storage error: {source}");

            ApiError::internal_server_error(format!("Failed to update {list}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn conflict_message_names_the_list() {
        let error = into_api_error(SavedItemsServiceError::AlreadyExists, SavedList::Wishlist);

        assert_eq!(error.status, StatusCode::CONFLICT);
        assert_eq!(error.message, "Item already exists in wishlist");
    }
}
