mod common;

use book_url_service::domain::entities::NewBook;
use book_url_service::domain::repositories::BookRepository;
use book_url_service::infrastructure::persistence::PgBookRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_book(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool));

    let result = repo
        .create(NewBook {
            author: "Octavia E. Butler".to_string(),
            title: "Kindred".to_string(),
            publisher: "Doubleday".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let book = result.unwrap();
    assert!(book.id > 0);
    assert_eq!(book.author, "Octavia E. Butler");
    assert_eq!(book.title, "Kindred");
    assert_eq!(book.publisher, "Doubleday");
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let id = common::create_test_book(&pool, "Stanisław Lem", "Solaris", "MON").await;
    let repo = PgBookRepository::new(Arc::new(pool));

    let book = repo.find_by_id(id).await.unwrap();

    assert!(book.is_some());
    assert_eq!(book.unwrap().title, "Solaris");
}

#[sqlx::test]
async fn test_find_by_id_not_found(pool: PgPool) {
    let repo = PgBookRepository::new(Arc::new(pool));

    let result = repo.find_by_id(424242).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_in_id_order(pool: PgPool) {
    let first = common::create_test_book(&pool, "A", "First", "P").await;
    let second = common::create_test_book(&pool, "B", "Second", "P").await;
    let repo = PgBookRepository::new(Arc::new(pool));

    let books = repo.list().await.unwrap();

    assert_eq!(books.len(), 2);
    assert_eq!(books[0].id, first);
    assert_eq!(books[1].id, second);
}

#[sqlx::test]
async fn test_delete_reports_rows_affected(pool: PgPool) {
    let id = common::create_test_book(&pool, "A", "Gone", "P").await;
    let repo = PgBookRepository::new(Arc::new(pool.clone()));

    assert_eq!(repo.delete(id).await.unwrap(), 1);
    assert_eq!(repo.delete(id).await.unwrap(), 0);
    assert_eq!(repo.count().await.unwrap(), 0);
}
