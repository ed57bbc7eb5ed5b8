//! Auth middleware.

use std::sync::Arc;

use boutique_app::auth::AuthServiceError;
use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::{debug, error};

use crate::{errors::ApiError, extensions::*, state::State};

/// Resolve an optional bearer token into a [`Principal`](boutique_app::auth::Principal).
///
/// Requests without an `Authorization` header pass through anonymously; a
/// header that is present but does not identify a user is rejected.
#[salvo::handler]
pub(crate) async fn authenticate(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if req.headers().get(AUTHORIZATION).is_none() {
        ctrl.call_next(req, depot, res).await;

        return;
    }

    let Some(token) = extract_bearer_token(req) else {
        res.render(ApiError::unauthorized("Missing or invalid Authorization header"));
        ctrl.skip_rest();

        return;
    };

    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state,
        Err(api_error) => {
            res.render(api_error);
            ctrl.skip_rest();

            return;
        }
    };

    let principal = match state.app.auth.authenticate_bearer(token).await {
        Ok(principal) => principal,
        Err(AuthServiceError::NotFound | AuthServiceError::UnknownUser) => {
            res.render(ApiError::unauthorized("Invalid API token"));
            ctrl.skip_rest();

            return;
        }
        Err(AuthServiceError::Storage(source)) => {
            error!("failed to validate api token: {source}");

            res.render(ApiError::internal_server_error("Internal Server Error"));
            ctrl.skip_rest();

            return;
        }
        Err(AuthServiceError::Token(source)) => {
            error!("failed to process api token: {source}");

            res.render(ApiError::internal_server_error("Internal Server Error"));
            ctrl.skip_rest();

            return;
        }
    };

    debug!(email = %principal.email, role = %principal.role, "authenticated request");

    depot.insert_principal(principal);

    ctrl.call_next(req, depot, res).await;
}

/// Reject the request with 403 unless an admin principal is present.
#[salvo::handler]
pub(crate) async fn require_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if !depot.principal().is_some_and(|principal| principal.is_admin()) {
        res.render(ApiError::forbidden("Access denied"));
        ctrl.skip_rest();

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
