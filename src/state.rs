use std::sync::Arc;

use crate::application::services::{LinkService, StatusService};
use crate::domain::repositories::LinkRepository;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub status_service: Arc<StatusService>,
}

impl AppState {
    /// Builds the services on top of one link store.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository.clone())),
            status_service: Arc::new(StatusService::new(link_repository)),
        }
    }
}
