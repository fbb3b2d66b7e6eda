//! DTOs for health check endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::ServiceStatus;

/// Health check response.
///
/// A healthy service reports every field; a degraded one only `ok` and
/// `database`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Process uptime in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    pub database: &'static str,
}

impl From<ServiceStatus> for HealthResponse {
    fn from(status: ServiceStatus) -> Self {
        if status.database_connected {
            Self {
                ok: true,
                version: Some(status.version.to_string()),
                uptime: Some(status.uptime.as_secs_f64()),
                timestamp: Some(status.timestamp),
                database: "connected",
            }
        } else {
            Self {
                ok: false,
                version: None,
                uptime: None,
                timestamp: None,
                database: "disconnected",
            }
        }
    }
}
