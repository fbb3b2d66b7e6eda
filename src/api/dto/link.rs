//! DTOs for the link endpoints.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::Link;

/// Empty, or 6-8 ASCII letters and digits. An empty code means "generate one".
static SHORT_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Za-z0-9]{6,8})?$").unwrap());

/// Request body for `POST /api/links`.
///
/// Both fields are optional at the JSON level so that a missing `url` is
/// reported as a validation error rather than a deserialization failure.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    /// Target URL; must be absolute with a host.
    pub url: Option<String>,

    /// Optional custom short code.
    #[validate(regex(
        path = *SHORT_CODE_REGEX,
        message = "Code must be 6-8 alphanumeric characters."
    ))]
    pub short_code: Option<String>,
}

/// JSON representation of a link.
///
/// ```json
/// {
///   "id": 1,
///   "originalUrl": "https://example.com",
///   "shortCode": "aB3xY9",
///   "clicks": 0,
///   "lastClickedAt": null,
///   "createdAt": "2025-01-01T12:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub clicks: i64,
    pub last_clicked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            original_url: link.original_url,
            short_code: link.short_code,
            clicks: link.clicks,
            last_clicked_at: link.last_clicked_at,
            created_at: link.created_at,
        }
    }
}
