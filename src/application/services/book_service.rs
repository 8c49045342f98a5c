//! Book catalog service.

use std::sync::Arc;

use crate::domain::entities::{Book, NewBook};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

/// Service for creating, listing, fetching and deleting books.
pub struct BookService<B: BookRepository> {
    book_repository: Arc<B>,
}

impl<B: BookRepository> BookService<B> {
    /// Creates a new book service.
    pub fn new(book_repository: Arc<B>) -> Self {
        Self { book_repository }
    }

    /// Adds a book to the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the insert fails.
    pub async fn create_book(&self, new_book: NewBook) -> Result<Book, AppError> {
        let book = self
            .book_repository
            .create(new_book)
            .await
            .map_err(|e| e.with_message("could not create book"))?;

        metrics::counter!("books_created_total").increment(1);
        tracing::debug!(id = book.id, "Book created");

        Ok(book)
    }

    /// Returns every book in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on query failure.
    pub async fn list_books(&self) -> Result<Vec<Book>, AppError> {
        self.book_repository
            .list()
            .await
            .map_err(|e| e.with_message("could not get books"))
    }

    /// Fetches a book by its raw path id.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `id` is empty (no query is issued)
    /// - [`AppError::BadRequest`] if `id` is not an integer
    /// - [`AppError::BadRequest`] if no book has this id (the body is a plain
    ///   `{message}`, without the `found` flag URL lookups carry)
    /// - [`AppError::Persistence`] on query failure
    pub async fn get_book(&self, id: &str) -> Result<Book, AppError> {
        const FAILURE: &str = "could not get the book";

        let id = parse_id(id, FAILURE)?;

        self.book_repository
            .find_by_id(id)
            .await
            .map_err(|e| e.with_message(FAILURE))?
            .ok_or_else(|| AppError::bad_request(FAILURE))
    }

    /// Deletes a book by its raw path id.
    ///
    /// Deleting an id that does not exist succeeds.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `id` is empty (no query is issued)
    /// - [`AppError::BadRequest`] if `id` is not an integer
    /// - [`AppError::Persistence`] on delete failure
    pub async fn delete_book(&self, id: &str) -> Result<(), AppError> {
        const FAILURE: &str = "could not delete book";

        let id = parse_id(id, FAILURE)?;

        let removed = self
            .book_repository
            .delete(id)
            .await
            .map_err(|e| e.with_message(FAILURE))?;

        metrics::counter!("books_deleted_total").increment(removed);
        tracing::debug!(id, removed, "Book delete executed");

        Ok(())
    }

    /// Counts the books in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on query failure.
    pub async fn count_books(&self) -> Result<i64, AppError> {
        self.book_repository.count().await
    }
}

/// Parses a book id taken from a request path.
fn parse_id(raw: &str, failure: &str) -> Result<i64, AppError> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(AppError::validation("id cannot be empty"));
    }

    raw.parse::<i64>().map_err(|_| AppError::bad_request(failure))
}
