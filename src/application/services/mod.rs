//! Business logic services for the application layer.

pub mod book_service;
pub mod url_service;

pub use book_service::BookService;
pub use url_service::{AddUrlOutcome, UrlQuery, UrlService};
