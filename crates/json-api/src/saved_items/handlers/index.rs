//! Saved Item Index Handlers

use std::sync::Arc;

use salvo::prelude::*;

use boutique_app::domain::saved_items::SavedList;

use crate::{
    errors::ApiError, extensions::*, saved_items::models::SavedItemResponse, state::State,
};

/// List Cart Items
///
/// Returns the cart items saved by `?userEmail=`.
#[endpoint(
    tags("cart"),
    summary = "List Cart Items",
    responses(
        (status_code = StatusCode::OK, description = "Cart items"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing userEmail"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn cart(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<SavedItemResponse>>, ApiError> {
    list_items(SavedList::Cart, req, depot).await
}

/// List Wishlist Items
///
/// Returns the wishlist items saved by `?userEmail=`.
#[endpoint(
    tags("wishlist"),
    summary = "List Wishlist Items",
    responses(
        (status_code = StatusCode::OK, description = "Wishlist items"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing userEmail"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn wishlist(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Vec<SavedItemResponse>>, ApiError> {
    list_items(SavedList::Wishlist, req, depot).await
}

async fn list_items(
    list: SavedList,
    req: &Request,
    depot: &Depot,
) -> Result<Json<Vec<SavedItemResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user_email = req
        .query::<String>("userEmail")
        .filter(|email| !email.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("userEmail is required"))?;

    let items = state
        .app
        .saved_items(list)
        .list_items(user_email)
        .await
        .or_500(&format!("Failed to fetch {list} items"))?;

    Ok(Json(items.into_iter().map(Into::into).collect()))
}
