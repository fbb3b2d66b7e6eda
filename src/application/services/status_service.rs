//! Process status reported by the health endpoint.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::domain::repositories::LinkRepository;

/// Snapshot of the service state at one point in time.
#[derive(Debug, Clone)]
pub struct ServiceStatus {
    pub database_connected: bool,
    pub version: &'static str,
    pub uptime: Duration,
    pub timestamp: DateTime<Utc>,
}

/// Reports store reachability and process uptime.
pub struct StatusService {
    link_repository: Arc<dyn LinkRepository>,
    started_at: Instant,
}

impl StatusService {
    /// Creates a status service; uptime is measured from this call.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self {
            link_repository,
            started_at: Instant::now(),
        }
    }

    /// Checks the store and captures uptime and wall-clock time.
    pub async fn check(&self) -> ServiceStatus {
        let database_connected = self.link_repository.health_check().await;

        ServiceStatus {
            database_connected,
            version: env!("CARGO_PKG_VERSION"),
            uptime: self.started_at.elapsed(),
            timestamp: Utc::now(),
        }
    }
}
