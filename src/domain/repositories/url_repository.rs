//! Repository trait for URL mapping data access.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for URL mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors, including a
    /// violated `short_url` uniqueness constraint.
    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError>;

    /// Finds the oldest mapping whose long URL matches exactly.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Finds the mapping for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Lists every mapping in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn list(&self) -> Result<Vec<UrlMapping>, AppError>;

    /// Counts all mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
