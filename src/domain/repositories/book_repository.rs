//! Repository trait for book data access.

use crate::domain::entities::{Book, NewBook};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the book catalog.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBookRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Inserts a new book and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn create(&self, new_book: NewBook) -> Result<Book, AppError>;

    /// Lists every book in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn list(&self) -> Result<Vec<Book>, AppError>;

    /// Finds a book by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Book))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, AppError>;

    /// Deletes the book with the given id.
    ///
    /// Returns the number of rows removed (zero when no book matched).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn delete(&self, id: i64) -> Result<u64, AppError>;

    /// Counts all books.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
