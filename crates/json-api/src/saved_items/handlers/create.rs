//! Add Saved Item Handlers

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use boutique_app::domain::saved_items::{SavedList, data::NewSavedItem};

use crate::{
    errors::ApiError,
    extensions::*,
    saved_items::{
        errors::into_api_error,
        models::{AddSavedItemRequest, SavedItemAddedResponse},
    },
    state::State,
};

/// Add Cart Item
#[endpoint(
    tags("cart"),
    summary = "Add Cart Item",
    responses(
        (status_code = StatusCode::CREATED, description = "Item added"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::CONFLICT, description = "Item already exists in cart"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn cart(
    json: JsonBody<AddSavedItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SavedItemAddedResponse>, ApiError> {
    add_item(SavedList::Cart, json.into_inner(), depot, res).await
}

/// Add Wishlist Item
#[endpoint(
    tags("wishlist"),
    summary = "Add Wishlist Item",
    responses(
        (status_code = StatusCode::CREATED, description = "Item added"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::CONFLICT, description = "Item already exists in wishlist"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn wishlist(
    json: JsonBody<AddSavedItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SavedItemAddedResponse>, ApiError> {
    add_item(SavedList::Wishlist, json.into_inner(), depot, res).await
}

async fn add_item(
    list: SavedList,
    request: AddSavedItemRequest,
    depot: &Depot,
    res: &mut Response,
) -> Result<Json<SavedItemAddedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let item = NewSavedItem::try_from(request)?;

    let id = state
        .app
        .saved_items(list)
        .add_item(item)
        .await
        .map_err(|error| into_api_error(error, list))?
        .id;

    res.status_code(StatusCode::CREATED);

    tracing::info!(%list, item_id = %id, "saved item");

    Ok(Json(SavedItemAddedResponse {
        message: format!("Item added to {list}"),
        item_id: id.to_hex(),
    }))
}
