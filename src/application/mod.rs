//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide the API used by HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::book_service::BookService`] - Book catalog operations
//! - [`services::url_service::UrlService`] - URL shortening and resolution

pub mod services;
