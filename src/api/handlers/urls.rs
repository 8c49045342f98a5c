//! Handlers for URL shortener endpoints.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::message::DataResponse;
use crate::api::dto::url::{AddUrlRequest, GetUrlRequest, UrlEnvelope, UrlResponse};
use crate::api::extract::JsonBody;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the short code for a long URL, minting one if needed.
///
/// # Endpoint
///
/// `POST /api/addurl`
///
/// # Request Body
///
/// ```json
/// { "longUrl": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "message": "url has been added successfully",
///   "url": { "id": 1, "longUrl": "https://example.com", "shortUrl": "9f86d081884c7d659a2feaa0c55ad015" }
/// }
/// ```
///
/// Repeating the request returns the same `shortUrl` with the message
/// `"this url is already added"`.
///
/// # Errors
///
/// - 422 if the body is not valid JSON or `longUrl` is missing or empty
/// - 400 if the lookup or insert fails
pub async fn add_url_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AddUrlRequest>,
) -> Result<Json<UrlEnvelope>, AppError> {
    payload.validate()?;

    let outcome = state.url_service.add_url(payload.long_url).await?;

    let message = if outcome.is_created() {
        "url has been added successfully"
    } else {
        "this url is already added"
    };

    Ok(Json(UrlEnvelope {
        message: message.to_string(),
        url: outcome.into_mapping().into(),
    }))
}

/// Resolves a short code.
///
/// # Endpoint
///
/// `POST /api/geturl`
///
/// # Request Body
///
/// ```json
/// { "shortUrl": "9f86d081884c7d659a2feaa0c55ad015" }
/// ```
///
/// # Errors
///
/// - 500 if neither `shortUrl` nor `longUrl` is given
/// - 400 with `{"message": "Url not found", "found": false}` for unknown codes
/// - 400 for a `longUrl`-only request, which is not supported
pub async fn get_url_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<GetUrlRequest>,
) -> Result<Json<UrlEnvelope>, AppError> {
    let query = payload.into_query()?;

    let mapping = state.url_service.find_url(query).await?;

    Ok(Json(UrlEnvelope {
        message: "Url fetched successfully".to_string(),
        url: mapping.into(),
    }))
}

/// Lists every URL mapping.
///
/// # Endpoint
///
/// `GET /api/get-all-urls`
pub async fn list_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<UrlResponse>>>, AppError> {
    let urls = state.url_service.list_urls().await?;

    Ok(Json(DataResponse::new(
        "url's fetched successfully",
        urls.into_iter().map(UrlResponse::from).collect(),
    )))
}
