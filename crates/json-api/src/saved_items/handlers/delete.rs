//! Remove Saved Item Handlers

use std::sync::Arc;

use salvo::prelude::*;

use boutique_app::{
    domain::saved_items::{SavedList, records::SavedItemRecord},
    validation::parse_object_id,
};

use crate::{
    errors::{ApiError, MessageResponse},
    extensions::*,
    saved_items::errors::into_api_error,
    state::State,
};

/// Remove Cart Item
///
/// Removes `?productId=` from the cart of `?userEmail=`.
#[endpoint(
    tags("cart"),
    summary = "Remove Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "Item removed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid item ID"),
        (status_code = StatusCode::NOT_FOUND, description = "Item not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "cart.delete", skip(req, depot), err)]
pub(crate) async fn cart(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, ApiError> {
    remove_item(SavedList::Cart, req, depot).await
}

/// Remove Wishlist Item
///
/// Removes `?productId=` from the wishlist of `?userEmail=`.
#[endpoint(
    tags("wishlist"),
    summary = "Remove Wishlist Item",
    responses(
        (status_code = StatusCode::OK, description = "Item removed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid item ID"),
        (status_code = StatusCode::NOT_FOUND, description = "Item not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "wishlist.delete", skip(req, depot), err)]
pub(crate) async fn wishlist(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, ApiError> {
    remove_item(SavedList::Wishlist, req, depot).await
}

async fn remove_item(
    list: SavedList,
    req: &Request,
    depot: &Depot,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user_email = req
        .query::<String>("userEmail")
        .filter(|email| !email.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("userEmail is required"))?;

    let raw_id = req.query::<String>("productId").unwrap_or_default();
    let item = parse_object_id::<SavedItemRecord>("item", &raw_id)?;

    state
        .app
        .saved_items(list)
        .remove_item(user_email, item)
        .await
        .map_err(|error| into_api_error(error, list))?;

    tracing::info!(%list, item_id = %item, "removed saved item");

    Ok(Json(MessageResponse::new(format!("Item removed from {list}"))))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use boutique_app::domain::saved_items::{
        MockSavedItemsService, SavedItemsServiceError, records::SavedItemId,
    };

    use crate::test_helpers::{Mocks, mocks_service};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        mocks_service(
            mocks,
            Router::new()
                .push(Router::with_path("cart").delete(cart))
                .push(Router::with_path("wishlist").delete(wishlist)),
        )
    }

    #[tokio::test]
    async fn test_remove_cart_item_success() -> TestResult {
        let id = SavedItemId::new();

        let mut items = MockSavedItemsService::new();

        items
            .expect_remove_item()
            .once()
            .withf(move |email, item| email == "ana@example.com" && *item == id)
            .return_once(|_, _| Ok(()));

        let mut res = TestClient::delete(format!(
            "http://example.com/cart?userEmail=ana@example.com&productId={id}"
        ))
        .send(&make_service(Mocks {
            cart: items,
            ..Mocks::default()
        }))
        .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.message, "Item removed from cart");

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_wishlist_item_not_found_returns_404() -> TestResult {
        let id = SavedItemId::new();

        let mut items = MockSavedItemsService::new();

        items
            .expect_remove_item()
            .once()
            .return_once(|_, _| Err(SavedItemsServiceError::NotFound));

        let mut res = TestClient::delete(format!(
            "http://example.com/wishlist?userEmail=ana@example.com&productId={id}"
        ))
        .send(&make_service(Mocks {
            wishlist: items,
            ..Mocks::default()
        }))
        .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "Item not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_item_malformed_id_never_reaches_storage() -> TestResult {
        let mut res =
            TestClient::delete("http://example.com/cart?userEmail=ana@example.com&productId=xyz")
                .send(&make_service(Mocks::default()))
                .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "Invalid item ID");

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_item_missing_email_returns_400() -> TestResult {
        let id = SavedItemId::new();

        let res = TestClient::delete(format!("http://example.com/cart?productId={id}"))
            .send(&make_service(Mocks::default()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
