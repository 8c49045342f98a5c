//! URL mapping entity: a long URL and its short code.

/// A stored mapping between a long URL and its short code.
///
/// Mappings are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: i64,
    pub long_url: String,
    pub short_url: String,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(id: i64, long_url: String, short_url: String) -> Self {
        Self {
            id,
            long_url,
            short_url,
        }
    }
}

/// Input data for creating a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub long_url: String,
    pub short_url: String,
}
