//! URL shortening and resolution service.

use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Result of [`UrlService::add_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddUrlOutcome {
    /// A new mapping was inserted with a freshly generated code.
    Created(UrlMapping),
    /// The long URL was already mapped; the stored mapping is returned.
    Existing(UrlMapping),
}

impl AddUrlOutcome {
    /// The mapping, whether new or pre-existing.
    pub fn mapping(&self) -> &UrlMapping {
        match self {
            Self::Created(m) | Self::Existing(m) => m,
        }
    }

    pub fn into_mapping(self) -> UrlMapping {
        match self {
            Self::Created(m) | Self::Existing(m) => m,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// Lookup key accepted by [`UrlService::find_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlQuery {
    ShortUrl(String),
    LongUrl(String),
}

/// Service for minting and resolving short codes.
pub struct UrlService<U: UrlRepository> {
    url_repository: Arc<U>,
}

impl<U: UrlRepository> UrlService<U> {
    /// Creates a new URL service.
    pub fn new(url_repository: Arc<U>) -> Self {
        Self { url_repository }
    }

    /// Returns the mapping for `long_url`, creating one if none exists.
    ///
    /// A candidate code is generated up front and discarded when the long
    /// URL is already mapped.
    ///
    /// The lookup and the insert are separate statements. Two concurrent
    /// first requests for the same long URL can both miss the lookup and
    /// both insert, leaving two rows with different codes. Later lookups
    /// return the oldest of them.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] if the lookup or the insert fails.
    pub async fn add_url(&self, long_url: String) -> Result<AddUrlOutcome, AppError> {
        const FAILURE: &str = "could not add Url";

        let short_url = generate_code();

        if let Some(existing) = self
            .url_repository
            .find_by_long_url(&long_url)
            .await
            .map_err(|e| e.with_message(FAILURE))?
        {
            tracing::debug!(short_url = %existing.short_url, "Long URL already mapped");
            return Ok(AddUrlOutcome::Existing(existing));
        }

        let mapping = self
            .url_repository
            .create(NewUrlMapping {
                long_url,
                short_url,
            })
            .await
            .map_err(|e| e.with_message(FAILURE))?;

        metrics::counter!("urls_created_total").increment(1);
        tracing::info!(id = mapping.id, short_url = %mapping.short_url, "Short URL created");

        Ok(AddUrlOutcome::Created(mapping))
    }

    /// Looks up a mapping by the given key.
    ///
    /// Only short-code lookups are implemented.
    ///
    /// # Errors
    ///
    /// - [`AppError::BadRequest`] for a long-URL lookup
    /// - see [`Self::get_by_short_url`] for short-code lookups
    pub async fn find_url(&self, query: UrlQuery) -> Result<UrlMapping, AppError> {
        match query {
            UrlQuery::ShortUrl(short_url) => self.get_by_short_url(&short_url).await,
            UrlQuery::LongUrl(_) => Err(AppError::bad_request(
                "lookup by longUrl is not supported",
            )),
        }
    }

    /// Resolves a short code to its mapping.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the code is unknown
    /// - [`AppError::Persistence`] on query failure
    pub async fn get_by_short_url(&self, short_url: &str) -> Result<UrlMapping, AppError> {
        self.url_repository
            .find_by_short_url(short_url)
            .await
            .map_err(|e| e.with_message("could not get url"))?
            .ok_or_else(|| AppError::not_found("Url not found"))
    }

    /// Returns every mapping in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on query failure.
    pub async fn list_urls(&self) -> Result<Vec<UrlMapping>, AppError> {
        self.url_repository
            .list()
            .await
            .map_err(|e| e.with_message("could not get urls"))
    }

    /// Counts the stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on query failure.
    pub async fn count_urls(&self) -> Result<i64, AppError> {
        self.url_repository.count().await
    }
}
