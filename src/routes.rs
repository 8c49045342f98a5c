//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{short_url}` - Short code redirect
//! - `GET  /health`      - Health check
//! - `/api/*`            - REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Allow-listed origins and headers
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::cors;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `allowed_origins` - origins admitted by the CORS policy
pub fn app_router(state: AppState, allowed_origins: &[String]) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/{short_url}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(cors::layer(allowed_origins))
        .layer(api::middleware::tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
