//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Rows are
//! decoded through `sqlx::FromRow` record types and converted into domain
//! entities.
//!
//! # Repositories
//!
//! - [`PgBookRepository`] - Book catalog storage
//! - [`PgUrlRepository`] - URL mapping storage

pub mod pg_book_repository;
pub mod pg_url_repository;

pub use pg_book_repository::PgBookRepository;
pub use pg_url_repository::PgUrlRepository;
