//! Trendy Boutique JSON API Healthcheck Handlers

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Plain text body served at `/`.
pub(crate) const LIVENESS_MESSAGE: &str = "Trendy Boutique Server is Running";

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
}

/// Healthcheck handler
///
/// Returns service health status
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Liveness handler
#[endpoint(tags("health"), summary = "Liveness message")]
pub(crate) async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}
