//! Create Product Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use boutique_app::{
    bson::to_bson,
    domain::products::data::NewProduct,
    validation::{coerce_price, coerce_quantity, coerce_rating, normalize_flag},
};

use crate::{
    errors::ApiError, extensions::*, products::errors::into_api_error, state::State,
};

/// Create Product Request
///
/// Numeric fields accept numbers or numeric strings.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct CreateProductRequest {
    pub product_name: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub price: Value,
    pub discount: Value,
    pub rating: Value,
    pub details: Option<String>,
    pub admin_email: Option<String>,
    /// Only the JSON literal `true` counts as in stock
    pub is_stock: Value,
    pub product_quantity: Value,
    /// Only the JSON literal `true` counts as discounted
    pub is_discount: Value,
}

impl TryFrom<CreateProductRequest> for NewProduct {
    type Error = ApiError;

    fn try_from(request: CreateProductRequest) -> Result<Self, Self::Error> {
        Ok(NewProduct {
            price: coerce_price(&request.price)?,
            rating: coerce_rating(&request.rating)?,
            product_quantity: coerce_quantity(&request.product_quantity)?,
            is_stock: normalize_flag(&request.is_stock),
            is_discount: normalize_flag(&request.is_discount),
            discount: to_bson(&request.discount)
                .map_err(|_ignored| ApiError::bad_request("discount cannot be stored"))?,
            product_name: request.product_name.unwrap_or_default(),
            image: request.image.unwrap_or_default(),
            category: request.category.unwrap_or_default(),
            subcategory: request.subcategory.unwrap_or_default(),
            details: request.details.unwrap_or_default(),
            admin_email: request.admin_email.unwrap_or_default(),
        })
    }
}

/// Product Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductCreatedResponse {
    pub message: String,
    /// Created product ID
    pub product_id: String,
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Access denied"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductCreatedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = NewProduct::try_from(json.into_inner())?;

    let id = state
        .app
        .products
        .create_product(product)
        .await
        .map_err(into_api_error)?
        .id;

    res.add_header(LOCATION, format!("/products/{id}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(product_id = %id, "created product");

    Ok(Json(ProductCreatedResponse {
        message: "Product added successfully!".to_string(),
        product_id: id.to_hex(),
    }))
}
