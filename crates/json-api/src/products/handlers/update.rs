//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use boutique_app::{
    bson::to_bson,
    domain::products::{ProductsServiceError, data::ProductUpdate, records::ProductRecord},
    validation::{coerce_price, coerce_quantity, coerce_rating, normalize_flag, parse_object_id},
};

use crate::{
    errors::{ApiError, MessageResponse},
    extensions::*,
    products::errors::into_api_error,
    state::State,
};

/// Update Product Request
///
/// Any subset of the product fields; absent and `null` fields are left untouched.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct UpdateProductRequest {
    pub product_name: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub price: Option<Value>,
    pub discount: Option<Value>,
    pub rating: Option<Value>,
    pub details: Option<String>,
    pub admin_email: Option<String>,
    pub is_stock: Option<Value>,
    pub product_quantity: Option<Value>,
    pub is_discount: Option<Value>,
}

impl TryFrom<UpdateProductRequest> for ProductUpdate {
    type Error = ApiError;

    fn try_from(request: UpdateProductRequest) -> Result<Self, Self::Error> {
        Ok(ProductUpdate {
            price: request.price.as_ref().map(coerce_price).transpose()?,
            rating: request.rating.as_ref().map(coerce_rating).transpose()?,
            product_quantity: request
                .product_quantity
                .as_ref()
                .map(coerce_quantity)
                .transpose()?,
            is_stock: request.is_stock.as_ref().map(normalize_flag),
            is_discount: request.is_discount.as_ref().map(normalize_flag),
            discount: request
                .discount
                .as_ref()
                .map(to_bson)
                .transpose()
                .map_err(|_ignored| ApiError::bad_request("discount cannot be stored"))?,
            product_name: request.product_name,
            image: request.image,
            category: request.category,
            subcategory: request.subcategory,
            details: request.details,
            admin_email: request.admin_email,
        })
    }
}

/// Product Update Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found or no changes made"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(id, json, depot),
    fields(product_id = tracing::field::Empty, fields = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = parse_object_id::<ProductRecord>("product", &id.into_inner())?;
    let update = ProductUpdate::try_from(json.into_inner())?;

    let span = tracing::Span::current();

    span.record("product_id", tracing::field::display(product));

    if update.is_empty() {
        return Err(ApiError::bad_request("No product fields to update"));
    }

    state
        .app
        .products
        .update_product(product, update)
        .await
        .map_err(|error| match error {
            ProductsServiceError::NotFound => {
                ApiError::not_found("Product not found or no changes made")
            }
            error => into_api_error(error),
        })?;

    tracing::info!(product_id = %product, "updated product");

    Ok(Json(MessageResponse::new("Product updated successfully")))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use boutique_app::domain::products::{MockProductsService, records::ProductId};

    use crate::test_helpers::products_service;

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products/{id}").put(handler))
    }

    #[tokio::test]
    async fn test_update_product_success() -> TestResult {
        let id = ProductId::new();

        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .withf(move |product, update| {
                *product == id
                    && *update
                        == ProductUpdate {
                            price: Some(39.5),
                            is_stock: Some(false),
                            ..ProductUpdate::default()
                        }
            })
            .return_once(|_, _| Ok(()));

        repo.expect_list_products().never();
        repo.expect_create_product().never();
        repo.expect_delete_product().never();

        let mut res = TestClient::put(format!("http://example.com/products/{id}"))
            .json(&json!({ "price": "39.5", "isStock": "yes" }))
            .send(&make_service(repo))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.message, "Product updated successfully");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_invalid_id_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_update_product().never();

        let mut res = TestClient::put("http://example.com/products/123")
            .json(&json!({ "price": 10 }))
            .send(&make_service(repo))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "Invalid product ID");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_empty_body_returns_400() -> TestResult {
        let id = ProductId::new();

        let mut repo = MockProductsService::new();

        repo.expect_update_product().never();

        let res = TestClient::put(format!("http://example.com/products/{id}"))
            .json(&json!({ "unknownField": 1 }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_unknown_id_returns_404() -> TestResult {
        let id = ProductId::new();

        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .withf(move |product, _| *product == id)
            .return_once(|_, _| Err(ProductsServiceError::NotFound));

        let mut res = TestClient::put(format!("http://example.com/products/{id}"))
            .json(&json!({ "productName": "Winter Coat" }))
            .send(&make_service(repo))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "Product not found or no changes made");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_invalid_rating_returns_400() -> TestResult {
        let id = ProductId::new();

        let mut repo = MockProductsService::new();

        repo.expect_update_product().never();

        let mut res = TestClient::put(format!("http://example.com/products/{id}"))
            .json(&json!({ "rating": "great" }))
            .send(&make_service(repo))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "rating must be a number");

        Ok(())
    }
}
