//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod books;
pub mod health;
pub mod redirect;
pub mod urls;

pub use books::{
    create_book_handler, delete_book_handler, delete_book_without_id_handler, get_book_handler,
    get_book_without_id_handler, list_books_handler,
};
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use urls::{add_url_handler, get_url_handler, list_urls_handler};
