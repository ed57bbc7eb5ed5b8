//! Login Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    state::State,
    users::{
        errors::into_api_error,
        models::{LoginRequest, UserResponse},
    },
};

/// Login Handler
///
/// Looks the user up by email and returns the stored record.
#[endpoint(
    tags("users"),
    summary = "Login",
    responses(
        (status_code = StatusCode::OK, description = "User record"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid email"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "users.login", skip(json, depot), err)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let email = json.into_inner().email.unwrap_or_default();

    let user = state
        .app
        .users
        .login(&email)
        .await
        .map_err(into_api_error)?;

    Ok(Json(user.into()))
}
