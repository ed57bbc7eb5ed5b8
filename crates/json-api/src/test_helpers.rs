//! Test helpers.

use std::sync::Arc;

use boutique_app::{
    auth::{MockAuthService, Principal},
    bson::{Bson, DateTime},
    context::AppContext,
    domain::{
        products::{
            MockProductsService,
            records::{ProductId, ProductRecord},
        },
        saved_items::{
            MockSavedItemsService,
            records::{SavedItemId, SavedItemRecord},
        },
        users::{
            MockUsersService,
            records::{Role, UserId, UserRecord},
        },
    },
};
use salvo::{affix_state::inject, prelude::*};

use crate::{errors::catcher, extensions::*, state::State};

pub(crate) const TEST_ADMIN_EMAIL: &str = "admin@example.com";

/// Service mocks backing a test [`State`]; every method defaults to `never()`.
pub(crate) struct Mocks {
    pub products: MockProductsService,
    pub cart: MockSavedItemsService,
    pub wishlist: MockSavedItemsService,
    pub users: MockUsersService,
    pub auth: MockAuthService,
}

impl Default for Mocks {
    fn default() -> Self {
        Self {
            products: strict_products_mock(),
            cart: strict_saved_items_mock(),
            wishlist: strict_saved_items_mock(),
            users: strict_users_mock(),
            auth: strict_auth_mock(),
        }
    }
}

impl Mocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::shared(AppContext {
            products: Arc::new(self.products),
            cart: Arc::new(self.cart),
            wishlist: Arc::new(self.wishlist),
            users: Arc::new(self.users),
            auth: Arc::new(self.auth),
        })
    }
}

#[salvo::handler]
pub(crate) async fn inject_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_principal(Principal {
        email: TEST_ADMIN_EMAIL.to_string(),
        role: Role::Admin,
    });
    ctrl.call_next(req, depot, res).await;
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();

    auth
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

fn strict_saved_items_mock() -> MockSavedItemsService {
    let mut items = MockSavedItemsService::new();

    items.expect_list_items().never();
    items.expect_add_item().never();
    items.expect_remove_item().never();

    items
}

fn strict_users_mock() -> MockUsersService {
    let mut users = MockUsersService::new();

    users.expect_register().never();
    users.expect_login().never();

    users
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    Mocks {
        auth,
        ..Mocks::default()
    }
    .into_state()
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(
                Mocks {
                    products,
                    ..Mocks::default()
                }
                .into_state(),
            ))
            .hoop(inject_admin)
            .push(route),
    )
    .catcher(catcher())
}

pub(crate) fn mocks_service(mocks: Mocks, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(mocks.into_state())).push(route)).catcher(catcher())
}

pub(crate) fn make_product(id: ProductId) -> ProductRecord {
    ProductRecord {
        id,
        product_name: "Summer Dress".to_string(),
        image: "https://img.example/dress.png".to_string(),
        category: "women".to_string(),
        subcategory: "dresses".to_string(),
        price: 49.99,
        discount: Bson::Int32(10),
        rating: 4.5,
        details: "Linen summer dress".to_string(),
        admin_email: TEST_ADMIN_EMAIL.to_string(),
        is_stock: true,
        product_quantity: 3,
        is_discount: false,
        created_at: DateTime::from_millis(0),
    }
}

pub(crate) fn make_saved_item(id: SavedItemId, user_email: &str) -> SavedItemRecord {
    SavedItemRecord {
        id,
        product_name: "Silk Scarf".to_string(),
        price: 25.0,
        image: "https://img.example/scarf.png".to_string(),
        user_email: user_email.to_string(),
        created_at: DateTime::from_millis(0),
    }
}

pub(crate) fn make_user(email: &str) -> UserRecord {
    UserRecord {
        id: UserId::new(),
        email: email.to_string(),
        name: "Ana".to_string(),
        photo_url: "https://img.example/ana.png".to_string(),
        role: Role::User,
        token_hash: None,
    }
}
