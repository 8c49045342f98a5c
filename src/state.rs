//! Shared application state injected into every handler.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{BookService, UrlService};
use crate::infrastructure::persistence::{PgBookRepository, PgUrlRepository};

/// Services and handles shared by all requests.
///
/// Cloned per request by axum; every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub book_service: Arc<BookService<PgBookRepository>>,
    pub url_service: Arc<UrlService<PgUrlRepository>>,
    pub pool: Arc<PgPool>,
}

impl AppState {
    /// Wires repositories and services on top of a connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let book_repository = Arc::new(PgBookRepository::new(pool.clone()));
        let url_repository = Arc::new(PgUrlRepository::new(pool.clone()));

        Self {
            book_service: Arc::new(BookService::new(book_repository)),
            url_service: Arc::new(UrlService::new(url_repository)),
            pool,
        }
    }
}
