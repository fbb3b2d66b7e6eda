//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its click counters.
///
/// `short_code`, `original_url`, `id` and `created_at` never change after
/// creation. `clicks` and `last_clicked_at` are only touched by redirects.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub clicks: i64,
    pub last_clicked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        clicks: i64,
        last_clicked_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            clicks,
            last_clicked_at,
            created_at,
        }
    }

    /// Applies one redirect: bumps the counter and moves the last-click
    /// timestamp forward, never backward.
    pub fn register_click(&mut self, at: DateTime<Utc>) {
        self.clicks += 1;
        self.last_clicked_at = Some(match self.last_clicked_at {
            Some(previous) if previous > at => previous,
            _ => at,
        });
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub short_code: String,
    pub original_url: String,
}
