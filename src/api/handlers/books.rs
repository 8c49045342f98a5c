//! Handlers for book catalog endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::book::{BookResponse, CreateBookRequest};
use crate::api::dto::message::{DataResponse, MessageResponse};
use crate::api::extract::JsonBody;
use crate::error::AppError;
use crate::state::AppState;

/// Adds a book to the catalog.
///
/// # Endpoint
///
/// `POST /api/create_books`
///
/// # Request Body
///
/// ```json
/// { "author": "Frank Herbert", "title": "Dune", "publisher": "Chilton Books" }
/// ```
///
/// # Errors
///
/// - 422 if the body is not valid JSON or a field is missing or empty
/// - 400 if the insert fails
pub async fn create_book_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateBookRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    payload.validate()?;

    state.book_service.create_book(payload.into()).await?;

    Ok(Json(MessageResponse::new("book has been added")))
}

/// Lists every book.
///
/// # Endpoint
///
/// `GET /api/books`
pub async fn list_books_handler(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<BookResponse>>>, AppError> {
    let books = state.book_service.list_books().await?;

    Ok(Json(DataResponse::new(
        "books fetched successfully",
        books.into_iter().map(BookResponse::from).collect(),
    )))
}

/// Fetches one book by id.
///
/// # Endpoint
///
/// `GET /api/get_books/{id}`
///
/// # Errors
///
/// - 500 if the id is empty
/// - 400 if the id is malformed, unknown, or the query fails
pub async fn get_book_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<BookResponse>>, AppError> {
    let book = state.book_service.get_book(&id).await?;

    Ok(Json(DataResponse::new(
        "book id fetched successfully",
        BookResponse::from(book),
    )))
}

/// `GET /api/get_books` with no id segment.
///
/// Always answers with the empty-id validation error.
pub async fn get_book_without_id_handler(
    state: State<AppState>,
) -> Result<Json<DataResponse<BookResponse>>, AppError> {
    get_book_handler(state, Path(String::new())).await
}

/// Deletes a book by id.
///
/// # Endpoint
///
/// `DELETE /api/delete_book/{id}`
///
/// Succeeds whether or not a book with this id existed.
///
/// # Errors
///
/// - 500 if the id is empty
/// - 400 if the id is malformed or the delete fails
pub async fn delete_book_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.book_service.delete_book(&id).await?;

    Ok(Json(MessageResponse::new("book delete successfully")))
}

/// `DELETE /api/delete_book` with no id segment.
///
/// Always answers with the empty-id validation error.
pub async fn delete_book_without_id_handler(
    state: State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    delete_book_handler(state, Path(String::new())).await
}
