//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI a single entry point per operation.
//!
//! - [`services::link_service::LinkService`] - create, list, get, delete, redirect
//! - [`services::status_service::StatusService`] - health and uptime reporting

pub mod services;
