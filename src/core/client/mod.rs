//! Public client surface + builder.

pub(crate) mod constants;

use crate::core::NewsError;
use constants::{DEFAULT_API_KEY, DEFAULT_BASE_EVERYTHING, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// A cheaply cloneable handle to the news provider.
///
/// Holds the `reqwest` client, the search endpoint base, and the API key.
/// Build one with [`NewsClient::builder`] and share it across feeds and
/// request builders.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: Client,
    base_everything: Url,
    api_key: String,
}

impl Default for NewsClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl NewsClient {
    /// Create a new builder.
    pub fn builder() -> NewsClientBuilder {
        NewsClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_everything(&self) -> &Url {
        &self.base_everything
    }
    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct NewsClientBuilder {
    user_agent: Option<String>,
    base_everything: Option<Url>,
    api_key: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl NewsClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the "everything" search endpoint
    /// (e.g. `https://newsapi.org/v2/everything`). Useful for tests.
    pub fn base_everything(mut self, url: Url) -> Self {
        self.base_everything = Some(url);
        self
    }

    /// Set the API key sent with every request. Defaults to `"demo"`.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns a `NewsError` if a base URL fails to parse or the underlying
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<NewsClient, NewsError> {
        let base_everything = match self.base_everything {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_EVERYTHING)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(NewsClient {
            http,
            base_everything,
            api_key: self.api_key.unwrap_or_else(|| DEFAULT_API_KEY.to_string()),
        })
    }
}
