mod common;

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use book_url_service::routes::app_router;
use sqlx::PgPool;

/// The full application as `server::run` serves it.
fn app_server(pool: PgPool) -> TestServer {
    let app = app_router(
        common::create_test_state(pool),
        &[common::TEST_ORIGIN.to_string()],
    );
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

#[sqlx::test]
async fn test_trailing_slash_on_list_is_normalized(pool: PgPool) {
    common::create_test_book(&pool, "Frank Herbert", "Dune", "Chilton Books").await;
    let server = app_server(pool);

    let response = server.get("/api/books/").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "books fetched successfully");
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test]
async fn test_trailing_slash_without_id_reaches_validation(pool: PgPool) {
    let server = app_server(pool);

    let response = server.get("/api/get_books/").await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(
        response.json::<serde_json::Value>()["message"],
        "id cannot be empty"
    );

    let response = server.delete("/api/delete_book/").await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(
        response.json::<serde_json::Value>()["message"],
        "id cannot be empty"
    );
}

#[sqlx::test]
async fn test_health_is_not_taken_as_short_code(pool: PgPool) {
    common::create_test_url(&pool, "https://example.com/health", "health").await;
    let server = app_server(pool);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert!(response.headers().get("location").is_none());
}

#[sqlx::test]
async fn test_short_code_redirects_through_app(pool: PgPool) {
    common::create_test_url(&pool, "https://example.com/page", "abc123").await;
    let server = app_server(pool);

    let response = server.get("/abc123/").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/page");
}

#[sqlx::test]
async fn test_cors_applies_under_path_normalization(pool: PgPool) {
    let server = app_server(pool);

    let response = server
        .get("/api/books/")
        .add_header("Origin", common::TEST_ORIGIN)
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.header("access-control-allow-origin"),
        common::TEST_ORIGIN
    );

    let response = server
        .get("/api/books")
        .add_header("Origin", "https://evil.example")
        .await;

    assert!(
        response
            .headers()
            .get("access-control-allow-origin")
            .is_none()
    );
}
