//! Link creation, lookup, deletion and redirect tracking.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_short_code};
use crate::utils::url_validator::{UrlValidationError, validate_absolute_url};

/// Upper bound on candidate codes tried when the caller does not pick one.
pub const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Service orchestrating the code generator and the link store.
///
/// All input validation happens here, before the store is touched.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `original_url` - target URL; required, must be absolute with a host
    /// - `requested_code` - optional custom code; an empty string counts as
    ///   absent
    ///
    /// # Code Generation
    ///
    /// Without a requested code, up to [`MAX_GENERATION_ATTEMPTS`] random
    /// codes are tried. A candidate is skipped when the store already holds
    /// it, and an insert rejected by the unique constraint (a concurrent
    /// create won the race) also moves on to the next candidate.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is missing or invalid, or
    /// the requested code is malformed.
    /// Returns [`AppError::Conflict`] if the requested code is already in use.
    /// Returns [`AppError::Internal`] on store failure or when every
    /// generated candidate collided.
    pub async fn create_link(
        &self,
        original_url: Option<String>,
        requested_code: Option<String>,
    ) -> Result<Link, AppError> {
        let original_url = check_original_url(original_url)?;

        let requested_code = requested_code.filter(|code| !code.is_empty());

        let link = match requested_code {
            Some(code) => self.create_with_code(original_url, code).await?,
            None => self.create_with_generated_code(original_url).await?,
        };

        info!(
            code = %link.short_code,
            url = %link.original_url,
            "Created short link"
        );

        Ok(link)
    }

    /// Returns every link, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failure.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Retrieves a link and its click statistics by short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| link_not_found(code))
    }

    /// Permanently deletes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code, including a
    /// second delete of the same code.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if !self.link_repository.delete(code).await? {
            return Err(link_not_found(code));
        }

        info!(code, "Deleted short link");
        Ok(())
    }

    /// Resolves a short code to its target URL and counts the click.
    ///
    /// The counter increment, the timestamp update and the URL read are one
    /// store operation, so a click is counted if and only if a URL is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn resolve_and_track(&self, code: &str) -> Result<String, AppError> {
        let link = self
            .link_repository
            .record_click(code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "code": code }))
            })?;

        debug!(code, clicks = link.clicks, "Redirecting");

        Ok(link.original_url)
    }

    async fn create_with_code(&self, original_url: String, code: String) -> Result<Link, AppError> {
        validate_short_code(&code)?;

        if self.link_repository.find_by_code(&code).await?.is_some() {
            return Err(code_in_use(&code));
        }

        // The unique constraint still rejects a concurrent create of the same
        // code; the repository reports that as a conflict too.
        self.link_repository
            .create(NewLink {
                short_code: code,
                original_url,
            })
            .await
    }

    async fn create_with_generated_code(&self, original_url: String) -> Result<Link, AppError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let code = generate_code();

            if self.link_repository.find_by_code(&code).await?.is_some() {
                warn!(code, attempt, "Generated code collided with an existing link");
                continue;
            }

            let new_link = NewLink {
                short_code: code.clone(),
                original_url: original_url.clone(),
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => {
                    warn!(code, attempt, "Generated code was taken concurrently");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }
}

fn check_original_url(original_url: Option<String>) -> Result<String, AppError> {
    let Some(raw) = original_url else {
        return Err(AppError::bad_request("URL is required", json!({})));
    };

    validate_absolute_url(&raw).map_err(|e| match e {
        UrlValidationError::Empty => AppError::bad_request("URL is required", json!({})),
        other => AppError::bad_request(
            "Invalid URL format, must include http:// or https://",
            json!({ "url": raw, "reason": other.to_string() }),
        ),
    })
}

fn link_not_found(code: &str) -> AppError {
    AppError::not_found("Link not found", json!({ "code": code }))
}

fn code_in_use(code: &str) -> AppError {
    AppError::conflict("Code already in use", json!({ "code": code }))
}
