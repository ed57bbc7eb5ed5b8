//! HTTP error responses.

use salvo::{
    catcher::Catcher,
    http::ResBody,
    oapi::{Components, EndpointOutRegister, Operation, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body shared by every error response and most acknowledgements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    /// Human readable outcome
    pub message: String,
}

impl MessageResponse {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// An error status rendered as `{"message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{status}: {message}")]
pub(crate) struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub(crate) fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub(crate) fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub(crate) fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl From<boutique_app::validation::ValidationError> for ApiError {
    fn from(error: boutique_app::validation::ValidationError) -> Self {
        Self::bad_request(error.to_string())
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(MessageResponse::new(self.message)));
    }
}

impl EndpointOutRegister for ApiError {
    // Error statuses are declared per endpoint in `responses(...)`.
    fn register(_components: &mut Components, _operation: &mut Operation) {}
}

/// Catcher for errors raised outside handlers, such as unreadable request
/// bodies, unmatched routes and caught panics.
pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(render_json_error)
}

#[handler]
async fn render_json_error(res: &mut Response, ctrl: &mut FlowCtrl) {
    let Some(status) = res.status_code else {
        return;
    };

    if !status.is_client_error() && !status.is_server_error() {
        return;
    }

    let message = match status {
        StatusCode::BAD_REQUEST => "Invalid request body",
        status => status.canonical_reason().unwrap_or("Request failed"),
    };

    res.body(ResBody::None);
    res.render(ApiError::new(status, message));
    ctrl.skip_rest();
}
