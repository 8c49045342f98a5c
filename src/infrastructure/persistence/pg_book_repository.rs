//! PostgreSQL implementation of book repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Book, NewBook};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

/// Row shape of the `books` table.
#[derive(Debug, sqlx::FromRow)]
struct BookRecord {
    id: i64,
    author: String,
    title: String,
    publisher: String,
}

impl From<BookRecord> for Book {
    fn from(r: BookRecord) -> Self {
        Book::new(r.id, r.author, r.title, r.publisher)
    }
}

/// PostgreSQL repository for the book catalog.
///
/// All statements use bound parameters.
pub struct PgBookRepository {
    pool: Arc<PgPool>,
}

impl PgBookRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn create(&self, new_book: NewBook) -> Result<Book, AppError> {
        let row = sqlx::query_as::<_, BookRecord>(
            r#"
            INSERT INTO books (author, title, publisher)
            VALUES ($1, $2, $3)
            RETURNING id, author, title, publisher
            "#,
        )
        .bind(new_book.author)
        .bind(new_book.title)
        .bind(new_book.publisher)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Book>, AppError> {
        let rows = sqlx::query_as::<_, BookRecord>(
            "SELECT id, author, title, publisher FROM books ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, AppError> {
        let row = sqlx::query_as::<_, BookRecord>(
            "SELECT id, author, title, publisher FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Book::from))
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM books")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
