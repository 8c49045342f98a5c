//! DTOs for URL shortener endpoints.
//!
//! Field names on the wire are camelCase (`longUrl`, `shortUrl`).

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::UrlQuery;
use crate::domain::entities::UrlMapping;
use crate::error::AppError;

/// Request body for `POST /api/addurl`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddUrlRequest {
    #[validate(length(min = 1, message = "longUrl must not be empty"))]
    pub long_url: String,
}

/// Request body for `POST /api/geturl`.
///
/// Both keys are optional on the wire; [`GetUrlRequest::into_query`]
/// decides which lookup is performed.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUrlRequest {
    pub short_url: Option<String>,
    pub long_url: Option<String>,
}

impl GetUrlRequest {
    /// Picks the lookup key. A non-empty `shortUrl` wins over `longUrl`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if neither key is present.
    pub fn into_query(self) -> Result<UrlQuery, AppError> {
        let short_url = self.short_url.filter(|s| !s.is_empty());
        let long_url = self.long_url.filter(|s| !s.is_empty());

        match (short_url, long_url) {
            (Some(short_url), _) => Ok(UrlQuery::ShortUrl(short_url)),
            (None, Some(long_url)) => Ok(UrlQuery::LongUrl(long_url)),
            (None, None) => Err(AppError::validation("search url cannot be empty")),
        }
    }
}

/// JSON representation of a URL mapping.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlResponse {
    pub id: i64,
    pub long_url: String,
    pub short_url: String,
}

impl From<UrlMapping> for UrlResponse {
    fn from(m: UrlMapping) -> Self {
        Self {
            id: m.id,
            long_url: m.long_url,
            short_url: m.short_url,
        }
    }
}

/// `{ "message": ..., "url": ... }`
#[derive(Debug, Serialize)]
pub struct UrlEnvelope {
    pub message: String,
    pub url: UrlResponse,
}
