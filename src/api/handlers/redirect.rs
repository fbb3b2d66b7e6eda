//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::location_value;

/// Redirects a short code to its original URL and counts the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Increment `clicks` and set `lastClickedAt` in one store update
/// 2. Return 302 Found with the original URL in `Location`, percent-encoded
///    where it holds spaces or non-ASCII text
///
/// # Errors
///
/// Returns 404 Not Found (JSON body) if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.link_service.resolve_and_track(&code).await?;

    let location = HeaderValue::try_from(location_value(&original_url)).map_err(|e| {
        AppError::internal(
            "Internal server error",
            json!({ "code": code, "reason": e.to_string() }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
