//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; PostgreSQL
//! implementations live in `crate::infrastructure::persistence`. Mock
//! implementations are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`BookRepository`] - Book catalog CRUD
//! - [`UrlRepository`] - URL mapping lookups and inserts
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod book_repository;
pub mod url_repository;

pub use book_repository::BookRepository;
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use book_repository::MockBookRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
