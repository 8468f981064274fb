//! Public client surface + builder.
//! Defaults (UA + base URL) live in `constants`.

pub(crate) mod constants;

use crate::core::{IexError, net};
use crate::stock::StockQuery;
use constants::{DEFAULT_BASE_URL, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Thin HTTP transport for URLs produced by [`StockQuery`].
///
/// One GET per call, a status check, and the raw body handed back. There is no
/// retry, rate limiting or authentication here; response bodies are either
/// returned as text or passed straight to `serde_json`.
#[derive(Debug, Clone)]
pub struct IexClient {
    http: Client,
    base_url: Url,
}

impl Default for IexClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl IexClient {
    /// Create a new builder.
    pub fn builder() -> IexClientBuilder {
        IexClientBuilder::default()
    }

    /// The prefix every query and raw path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Fetches the URL assembled by `query` under this client's base URL.
    ///
    /// The query's own prefix is ignored; the client's base URL wins.
    ///
    /// # Errors
    ///
    /// Returns [`IexError::InvalidArgument`] if the query has no endpoints or too many
    /// for one batch, and transport errors (`Http`, `Status`) from the request itself.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, query), err, fields(url = %query.to_url_with(&self.base_url))))]
    pub async fn fetch(&self, query: &StockQuery) -> Result<String, IexError> {
        let url = query.url_with(&self.base_url)?;
        self.get(url).await
    }

    /// Fetches `query` and decodes the body into `T`.
    ///
    /// # Errors
    ///
    /// Everything [`IexClient::fetch`] returns, plus [`IexError::Json`] when the body
    /// does not match `T`.
    pub async fn fetch_json<T: DeserializeOwned>(&self, query: &StockQuery) -> Result<T, IexError> {
        let body = self.fetch(query).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Resolves an arbitrary API path against the base URL, appending `params` as a query string.
    ///
    /// This is the escape hatch for endpoints [`StockQuery`] does not model.
    ///
    /// # Errors
    ///
    /// Returns [`IexError::Url`] if `path` cannot be joined onto the base URL.
    pub fn raw_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, IexError> {
        let mut url = self.base_url.join(path.trim_start_matches('/'))?;
        if !params.is_empty() {
            let mut qp = url.query_pairs_mut();
            for (k, v) in params {
                qp.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Fetches a raw path built by [`IexClient::raw_url`].
    ///
    /// # Errors
    ///
    /// URL join failures and transport errors.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, params), err))]
    pub async fn fetch_raw(&self, path: &str, params: &[(&str, &str)]) -> Result<String, IexError> {
        let url = self.raw_url(path, params)?;
        self.get(url).await
    }

    /// Fetches a raw path and decodes the body into `T`.
    ///
    /// # Errors
    ///
    /// Everything [`IexClient::fetch_raw`] returns, plus [`IexError::Json`].
    pub async fn fetch_raw_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, IexError> {
        let body = self.fetch_raw(path, params).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get(&self, url: Url) -> Result<String, IexError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(url = %url, "iex request");

        let resp = self.http().get(url).send().await?;
        net::get_text(resp).await
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct IexClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl IexClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the API base (e.g., `https://api.iextrading.com/1.0/`).
    ///
    /// A missing trailing slash is added so relative paths join under it.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL fails to parse or the underlying
    /// `reqwest` client cannot be constructed.
    pub fn build(self) -> Result<IexClient, IexError> {
        let mut base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(IexClient { http, base_url })
    }
}
