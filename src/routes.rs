//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/api/links*`  - JSON API
//! - `GET /healthz` - Health check: store reachability, uptime
//! - `GET /{code}`  - Short link redirect
//!
//! The redirect route is registered last. Static segments win over the
//! `{code}` parameter in axum's matcher, so `/healthz` is never treated as a
//! short code.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Per-request deadline
//! - **CORS** - Browser dashboard access
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{cors, tracing};
use crate::config::Config;
use crate::state::AppState;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// HTTP-level settings applied as middleware.
#[derive(Debug, Clone)]
pub struct RouterSettings {
    /// Origins allowed by CORS; empty means any origin.
    pub cors_allowed_origins: Vec<String>,
    /// Deadline for a single request.
    pub request_timeout: Duration,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            cors_allowed_origins: Vec::new(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl From<&Config> for RouterSettings {
    fn from(config: &Config) -> Self {
        Self {
            cors_allowed_origins: config.cors_allowed_origins.clone(),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }
}

/// Builds the router with all routes and middleware, without path
/// normalization.
pub fn build_router(state: AppState, settings: &RouterSettings) -> Router {
    Router::new()
        .nest("/api", api::routes::routes())
        .route("/healthz", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(cors::layer(&settings.cors_allowed_origins))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            settings.request_timeout,
        ))
        .layer(tracing::layer())
}

/// Constructs the application router, trimming trailing slashes before
/// routing.
pub fn app_router(state: AppState, settings: &RouterSettings) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, settings))
}
