#![allow(dead_code)]

use axum::Router;
use book_url_service::api;
use book_url_service::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_ORIGIN: &str = "http://localhost:3000";

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

/// `/api` routes mounted the way the server mounts them.
pub fn create_api_router(pool: PgPool) -> Router {
    Router::new()
        .nest("/api", api::routes::api_routes())
        .with_state(create_test_state(pool))
}

pub async fn create_test_book(pool: &PgPool, author: &str, title: &str, publisher: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO books (author, title, publisher) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(author)
    .bind(title)
    .bind(publisher)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_url(pool: &PgPool, long_url: &str, short_url: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO urls (long_url, short_url) VALUES ($1, $2) RETURNING id",
    )
    .bind(long_url)
    .bind(short_url)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}
