//! Centralized constants for default endpoints, UA, and request defaults.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// NewsAPI-style "everything" search endpoint.
pub(crate) const DEFAULT_BASE_EVERYTHING: &str = "https://newsapi.org/v2/everything";

/// API key used when the builder is given none. NewsAPI rejects it with a
/// 401, which lands the feed on the fallback dataset.
pub(crate) const DEFAULT_API_KEY: &str = "demo";

/// Default page size for article requests.
pub(crate) const DEFAULT_PAGE_SIZE: u32 = 20;

/// Default article language filter.
pub(crate) const DEFAULT_LANGUAGE: &str = "en";

/// Sort key requesting the most recent articles first.
pub(crate) const SORT_BY_PUBLISHED_AT: &str = "publishedAt";
