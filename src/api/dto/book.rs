//! DTOs for book catalog endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Book, NewBook};

/// Request body for `POST /api/create_books`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookRequest {
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,

    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "publisher must not be empty"))]
    pub publisher: String,
}

impl From<CreateBookRequest> for NewBook {
    fn from(req: CreateBookRequest) -> Self {
        NewBook {
            author: req.author,
            title: req.title,
            publisher: req.publisher,
        }
    }
}

/// JSON representation of a book.
#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: i64,
    pub author: String,
    pub title: String,
    pub publisher: String,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            author: book.author,
            title: book.title,
            publisher: book.publisher,
        }
    }
}
