//! Health check and root handlers.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

/// Public health check response
///
/// Simple status indicator for load balancers and health monitoring.
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    /// Status indicator (always "ok")
    pub status: String,
}

/// Root response confirming the service is up.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
}

/// GET /
///
/// Liveness banner for the project root.
pub async fn read_root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Project is Live".to_string(),
    })
}

/// GET /health
///
/// Basic health monitoring endpoint; does not touch the database.
pub async fn health_check(State(_state): State<AppState>) -> Json<HealthCheckResponse> {
    tracing::debug!("health check requested");
    Json(HealthCheckResponse {
        status: "ok".to_string(),
    })
}
