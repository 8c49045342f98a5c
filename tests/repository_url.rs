mod common;

use book_url_service::domain::entities::NewUrlMapping;
use book_url_service::domain::repositories::UrlRepository;
use book_url_service::error::AppError;
use book_url_service::infrastructure::persistence::PgUrlRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_mapping(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let mapping = repo
        .create(NewUrlMapping {
            long_url: "https://example.com".to_string(),
            short_url: "abc123".to_string(),
        })
        .await
        .unwrap();

    assert!(mapping.id > 0);
    assert_eq!(mapping.long_url, "https://example.com");
    assert_eq!(mapping.short_url, "abc123");
}

#[sqlx::test]
async fn test_duplicate_short_url_is_rejected(pool: PgPool) {
    common::create_test_url(&pool, "https://one.example", "samecode").await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let result = repo
        .create(NewUrlMapping {
            long_url: "https://two.example".to_string(),
            short_url: "samecode".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Persistence { .. })));
}

#[sqlx::test]
async fn test_find_by_short_url(pool: PgPool) {
    common::create_test_url(&pool, "https://rust-lang.org", "xyz789").await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let mapping = repo.find_by_short_url("xyz789").await.unwrap();

    assert_eq!(mapping.unwrap().long_url, "https://rust-lang.org");
    assert!(repo.find_by_short_url("missing").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_find_by_long_url_returns_oldest(pool: PgPool) {
    // Duplicate long URLs can be left behind by racing inserts.
    common::create_test_url(&pool, "https://dup.example", "first").await;
    common::create_test_url(&pool, "https://dup.example", "second").await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let mapping = repo
        .find_by_long_url("https://dup.example")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(mapping.short_url, "first");
}

#[sqlx::test]
async fn test_list_and_count(pool: PgPool) {
    common::create_test_url(&pool, "https://a.example", "a").await;
    common::create_test_url(&pool, "https://b.example", "b").await;
    let repo = PgUrlRepository::new(Arc::new(pool));

    let urls = repo.list().await.unwrap();

    assert_eq!(urls.len(), 2);
    assert_eq!(urls[0].short_url, "a");
    assert_eq!(repo.count().await.unwrap(), 2);
}
