//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use boutique_app::{domain::products::records::ProductRecord, validation::parse_object_id};

use crate::{
    errors::{ApiError, MessageResponse},
    extensions::*,
    products::errors::into_api_error,
    state::State,
};

/// Product Delete Handler
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid product ID"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.delete",
    skip(id, depot),
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = parse_object_id::<ProductRecord>("product", &id.into_inner())?;

    tracing::Span::current().record("product_id", tracing::field::display(product));

    state
        .app
        .products
        .delete_product(product)
        .await
        .map_err(into_api_error)?;

    tracing::info!(product_id = %product, "deleted product");

    Ok(Json(MessageResponse::new("Product deleted successfully")))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use boutique_app::domain::products::{
        MockProductsService, ProductsServiceError, records::ProductId,
    };

    use crate::test_helpers::products_service;

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_product_success() -> TestResult {
        let id = ProductId::new();

        let mut repo = MockProductsService::new();

        repo.expect_delete_product()
            .once()
            .withf(move |product| *product == id)
            .return_once(|_| Ok(()));

        repo.expect_list_products().never();
        repo.expect_create_product().never();
        repo.expect_update_product().never();

        let mut res = TestClient::delete(format!("http://example.com/products/{id}"))
            .send(&make_service(repo))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.message, "Product deleted successfully");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_product_not_found_returns_404() -> TestResult {
        let id = ProductId::new();

        let mut repo = MockProductsService::new();

        repo.expect_delete_product()
            .once()
            .withf(move |product| *product == id)
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let mut res = TestClient::delete(format!("http://example.com/products/{id}"))
            .send(&make_service(repo))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "Product not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_product_invalid_id_never_reaches_storage() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_delete_product().never();

        let mut res = TestClient::delete("http://example.com/products/not-an-object-id")
            .send(&make_service(repo))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.message, "Invalid product ID");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_product_twice_returns_200_then_404() -> TestResult {
        let id = ProductId::new();

        let mut repo = MockProductsService::new();
        let mut seq = mockall::Sequence::new();

        repo.expect_delete_product()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_| Ok(()));

        repo.expect_delete_product()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let service = make_service(repo);

        let first = TestClient::delete(format!("http://example.com/products/{id}"))
            .send(&service)
            .await;
        let second = TestClient::delete(format!("http://example.com/products/{id}"))
            .send(&service)
            .await;

        assert_eq!(first.status_code, Some(StatusCode::OK));
        assert_eq!(second.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
