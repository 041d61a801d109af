mod api;
mod model;
mod wire;

pub use model::RawArticle;

use crate::core::{
    NewsClient, NewsError,
    client::constants::{DEFAULT_LANGUAGE, DEFAULT_PAGE_SIZE, SORT_BY_PUBLISHED_AT},
};

/// A builder for one article-search request against the `everything`
/// endpoint.
///
/// Issues a single `GET` for recent articles matching a free-text query,
/// sorted by publish time, and normalizes the provider records into
/// [`RawArticle`]s. No retry is attempted and nothing is cached between
/// calls; a failed or empty fetch is the caller's cue to substitute the
/// fallback dataset.
#[derive(Debug)]
pub struct EverythingBuilder {
    client: NewsClient,
    query: String,
    page_size: u32,
    language: String,
}

impl EverythingBuilder {
    /// Creates a new `EverythingBuilder` for a free-text query.
    pub fn new(client: &NewsClient, query: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            query: query.into(),
            page_size: DEFAULT_PAGE_SIZE,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Sets the maximum number of articles to request. Default: 20.
    #[must_use]
    pub const fn page_size(mut self, n: u32) -> Self {
        self.page_size = n;
        self
    }

    /// Sets the article language filter. Default: `"en"`.
    #[must_use]
    pub fn language(mut self, lang: impl Into<String>) -> Self {
        self.language = lang.into();
        self
    }

    /// Executes the request and normalizes the response.
    ///
    /// # Errors
    ///
    /// Returns a `NewsError` if the network request fails, the server
    /// answers with a non-success status, the body cannot be parsed, or the
    /// article list is empty ([`NewsError::DataUnavailable`]).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(query = %self.query)))]
    pub async fn fetch(self) -> Result<Vec<RawArticle>, NewsError> {
        api::fetch_everything(
            &self.client,
            &self.query,
            self.page_size,
            &self.language,
            SORT_BY_PUBLISHED_AT,
        )
        .await
    }
}
