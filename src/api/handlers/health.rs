//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /healthz`
///
/// # Response Codes
///
/// - **200 OK**: store reachable
/// - **503 Service Unavailable**: store unreachable
///
/// # Response
///
/// ```json
/// {
///   "ok": true,
///   "version": "0.1.0",
///   "uptime": 132.47,
///   "timestamp": "2025-01-01T12:00:00Z",
///   "database": "connected"
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse::from(state.status_service.check().await);

    let status = if response.ok {
        StatusCode::OK
    } else {
        tracing::warn!("Health check failed: database disconnected");
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
