//! Register User Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use boutique_app::domain::users::data::NewUser;

use crate::{
    errors::{ApiError, MessageResponse},
    extensions::*,
    state::State,
    users::{errors::into_api_error, models::RegisterRequest},
};

/// Register User Handler
///
/// Stores the user with the `user` role. Emails are not checked for duplicates.
#[endpoint(
    tags("users"),
    summary = "Register User",
    responses(
        (status_code = StatusCode::CREATED, description = "User registered"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RegisterRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = state
        .app
        .users
        .register(NewUser::from(json.into_inner()))
        .await
        .map_err(into_api_error)?;

    res.status_code(StatusCode::CREATED);

    tracing::info!(user_id = %user.id, "registered user");

    Ok(Json(MessageResponse::new("User registered successfully")))
}
