//! Validation of target URLs.
//!
//! A target must be an absolute URL with both a scheme and a non-empty host.
//! The URL is checked, not rewritten: the stored value is exactly what the
//! caller sent (minus surrounding whitespace), so a redirect for
//! `https://example.com` points at `https://example.com` rather than the
//! normalized `https://example.com/`.
//!
//! Control characters are refused outright. Spaces and non-ASCII text are
//! accepted and percent-encoded only when the `Location` header is built.

use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL must include a host")]
    MissingHost,

    #[error("URL contains control characters")]
    ControlCharacter,
}

/// Checks that `input` is an absolute URL with scheme and host.
///
/// Returns the trimmed input on success.
///
/// # Errors
///
/// - [`UrlValidationError::Empty`] for blank input
/// - [`UrlValidationError::ControlCharacter`] when the input holds tabs,
///   line breaks or other ASCII control bytes
/// - [`UrlValidationError::InvalidFormat`] when the URL does not parse
///   (relative references, missing scheme, bad characters)
/// - [`UrlValidationError::MissingHost`] for host-less URLs such as
///   `mailto:` or `javascript:`
pub fn validate_absolute_url(input: &str) -> Result<String, UrlValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if trimmed.chars().any(|c| c.is_ascii_control()) {
        return Err(UrlValidationError::ControlCharacter);
    }

    let url = Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(trimmed.to_string()),
        _ => Err(UrlValidationError::MissingHost),
    }
}

/// Renders a stored URL as a `Location` header value.
///
/// A URL made only of visible ASCII is sent back unchanged. Anything else
/// (spaces, non-ASCII paths or hosts) goes out in the parser's serialization,
/// which percent-encodes the path, query and fragment and punycodes the host.
pub fn location_value(stored: &str) -> String {
    if stored.bytes().all(|b| b.is_ascii_graphic()) {
        return stored.to_string();
    }

    match Url::parse(stored) {
        Ok(url) => url.into(),
        Err(_) => stored.to_string(),
    }
}
