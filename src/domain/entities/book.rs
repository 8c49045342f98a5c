//! Book entity representing a catalog entry.

/// A book stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub author: String,
    pub title: String,
    pub publisher: String,
}

impl Book {
    /// Creates a new Book instance.
    pub fn new(id: i64, author: String, title: String, publisher: String) -> Self {
        Self {
            id,
            author,
            title,
            publisher,
        }
    }
}

/// Input data for creating a new book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub author: String,
    pub title: String,
    pub publisher: String,
}
