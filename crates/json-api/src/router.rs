//! App Router

use salvo::Router;

use crate::{auth, products, saved_items, users};

pub fn app_router() -> Router {
    Router::new()
        .hoop(auth::middleware::authenticate)
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(
                    Router::new()
                        .hoop(auth::middleware::require_admin)
                        .post(products::create::handler),
                )
                .push(
                    Router::with_path("{id}")
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("cart")
                .get(saved_items::index::cart)
                .post(saved_items::create::cart)
                .delete(saved_items::delete::cart),
        )
        .push(
            Router::with_path("wishlist")
                .get(saved_items::index::wishlist)
                .post(saved_items::create::wishlist)
                .delete(saved_items::delete::wishlist),
        )
        .push(Router::with_path("register").post(users::register::handler))
        .push(Router::with_path("login").post(users::login::handler))
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        http::header::AUTHORIZATION,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::json;
    use testresult::TestResult;

    use boutique_app::{
        auth::{AuthServiceError, MockAuthService, Principal},
        domain::{
            products::{MockProductsService, records::ProductId},
            users::records::Role,
        },
    };

    use crate::{
        errors::MessageResponse,
        test_helpers::{Mocks, make_product},
    };

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(mocks.into_state()))
                .push(app_router()),
        )
        .catcher(crate::errors::catcher())
    }

    fn product_body() -> serde_json::Value {
        json!({
            "productName": "Summer Dress",
            "price": 49.99,
            "rating": 4,
            "productQuantity": 3
        })
    }

    #[tokio::test]
    async fn test_create_product_without_token_returns_403() -> TestResult {
        let mut res = TestClient::post("http://example.com/products")
            .json(&product_body())
            .send(&make_service(Mocks::default()))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));
        assert_eq!(body.message, "Access denied");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_as_plain_user_returns_403() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().once().return_once(|_| {
            Ok(Principal {
                email: "ana@example.com".to_string(),
                role: Role::User,
            })
        });

        let res = TestClient::post("http://example.com/products")
            .add_header(AUTHORIZATION, "Bearer bt_v1_token", true)
            .json(&product_body())
            .send(&make_service(Mocks {
                auth,
                ..Mocks::default()
            }))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_as_admin_returns_201() -> TestResult {
        let id = ProductId::new();

        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .withf(|token| token == "bt_v1_token")
            .return_once(|_| {
                Ok(Principal {
                    email: "admin@example.com".to_string(),
                    role: Role::Admin,
                })
            });

        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(move |_| Ok(make_product(id)));

        let res = TestClient::post("http://example.com/products")
            .add_header(AUTHORIZATION, "Bearer bt_v1_token", true)
            .json(&product_body())
            .send(&make_service(Mocks {
                auth,
                products,
                ..Mocks::default()
            }))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_list_products_is_public() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(|| Ok(vec![]));

        let res = TestClient::get("http://example.com/products")
            .send(&make_service(Mocks {
                products,
                ..Mocks::default()
            }))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_token_is_rejected_on_public_routes() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .return_once(|_| Err(AuthServiceError::NotFound));

        let mut res = TestClient::get("http://example.com/products")
            .add_header(AUTHORIZATION, "Bearer bt_v1_stale", true)
            .send(&make_service(Mocks {
                auth,
                ..Mocks::default()
            }))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
        assert_eq!(body.message, "Invalid API token");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_requires_no_token() -> TestResult {
        let id = ProductId::new();

        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .return_once(|_, _| Ok(()));

        let res = TestClient::put(format!("http://example.com/products/{id}"))
            .json(&json!({ "price": 10 }))
            .send(&make_service(Mocks {
                products,
                ..Mocks::default()
            }))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
