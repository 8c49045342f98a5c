//! Core domain entities.
//!
//! Entities are plain, fully populated data structures. Each one has a
//! companion `New*` struct holding the data needed to create a record
//! (everything except the database-assigned id).
//!
//! # Entity Types
//!
//! - [`Book`] - A catalog entry
//! - [`UrlMapping`] - A long URL and the short code that resolves to it

pub mod book;
pub mod url_mapping;

pub use book::{Book, NewBook};
pub use url_mapping::{NewUrlMapping, UrlMapping};
