//! Cross-origin resource sharing policy.

use axum::http::{HeaderName, HeaderValue, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Request headers a cross-origin caller may send.
const ALLOWED_HEADERS: [HeaderName; 3] = [header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT];

/// Builds a CORS layer that admits only the given origins.
///
/// Origins that are not valid header values are skipped with a warning.
pub fn layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_headers(ALLOWED_HEADERS)
}
