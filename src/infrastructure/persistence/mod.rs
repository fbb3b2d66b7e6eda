//! Repository implementations.
//!
//! - [`PgLinkRepository`] - PostgreSQL storage through SQLx
//! - [`MemoryLinkRepository`] - in-process storage for tests and demos

pub mod memory_link_repository;
pub mod pg_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
