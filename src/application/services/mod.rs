//! Business logic services for the application layer.

pub mod link_service;
pub mod status_service;

pub use link_service::LinkService;
pub use status_service::{ServiceStatus, StatusService};
