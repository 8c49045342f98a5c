//! API route configuration.

use crate::api::handlers::{
    add_url_handler, create_book_handler, delete_book_handler, delete_book_without_id_handler,
    get_book_handler, get_book_without_id_handler, get_url_handler, list_books_handler,
    list_urls_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All `/api` routes. No authentication.
///
/// # Endpoints
///
/// - `POST   /create_books`       - Add a book
/// - `DELETE /delete_book/{id}`   - Delete a book
/// - `GET    /get_books/{id}`     - Fetch one book
/// - `GET    /books`              - List books
/// - `POST   /addurl`             - Shorten a long URL (or return its existing code)
/// - `POST   /geturl`             - Resolve a short code
/// - `GET    /get-all-urls`       - List URL mappings
///
/// `/delete_book` and `/get_books` are also mounted without an id so that a
/// missing id reaches the handler and is rejected there.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/create_books", post(create_book_handler))
        .route("/delete_book", delete(delete_book_without_id_handler))
        .route("/delete_book/{id}", delete(delete_book_handler))
        .route("/get_books", get(get_book_without_id_handler))
        .route("/get_books/{id}", get(get_book_handler))
        .route("/books", get(list_books_handler))
        .route("/addurl", post(add_url_handler))
        .route("/geturl", post(get_url_handler))
        .route("/get-all-urls", get(list_urls_handler))
}
