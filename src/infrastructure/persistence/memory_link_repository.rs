//! In-process implementation of link repository.
//!
//! Backs the service when `STORAGE_BACKEND=memory` and the HTTP tests. Data
//! lives only as long as the process.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;

#[derive(Default)]
struct Store {
    links: HashMap<String, Link>,
    last_id: i64,
}

/// Link repository keeping every link in a map keyed by short code.
///
/// Every mutation runs under the write lock, which gives the same guarantees
/// the Postgres unique constraint and row lock give: no duplicate codes and
/// no lost click updates.
#[derive(Default)]
pub struct MemoryLinkRepository {
    store: RwLock<Store>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut store = self.store.write().await;

        if store.links.contains_key(&new_link.short_code) {
            return Err(AppError::conflict(
                "Code already in use",
                json!({ "code": new_link.short_code }),
            ));
        }

        store.last_id += 1;
        let link = Link::new(
            store.last_id,
            new_link.original_url,
            new_link.short_code,
            0,
            None,
            Utc::now(),
        );
        store.links.insert(link.short_code.clone(), link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.store.read().await.links.get(code).cloned())
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let mut links: Vec<Link> = self.store.read().await.links.values().cloned().collect();
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(links)
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.store.write().await.links.remove(code).is_some())
    }

    async fn record_click(&self, code: &str) -> Result<Option<Link>, AppError> {
        let mut store = self.store.write().await;

        Ok(store.links.get_mut(code).map(|link| {
            link.register_click(Utc::now());
            link.clone()
        }))
    }

    async fn health_check(&self) -> bool {
        true
    }
}
