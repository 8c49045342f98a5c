//! Handler for short code redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its long URL.
///
/// # Endpoint
///
/// `GET /{short_url}`
///
/// Answers `307 Temporary Redirect`.
///
/// # Errors
///
/// - 400 with `{"message": "Url not found", "found": false}` if the code is
///   unknown
/// - 400 with `{"message": "could not get url"}` if the stored long URL is
///   not a valid `Location` header value
pub async fn redirect_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let mapping = state.url_service.get_by_short_url(&short_url).await?;

    let location = HeaderValue::try_from(mapping.long_url.as_str()).map_err(|e| {
        tracing::warn!(%short_url, error = %e, "Stored long URL is not a valid header value");
        AppError::bad_request("could not get url")
    })?;

    tracing::debug!(%short_url, long_url = %mapping.long_url, "Redirecting");

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]))
}
