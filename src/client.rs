//! Core HTTP client for the Alpha Vantage query endpoint.
//!
//! The [`AlphaVantageClient`] struct wraps [`reqwest::Client`] with the API key
//! and a bounded timeout, and exposes a single `query` helper. Endpoint
//! methods are added to `AlphaVantageClient` via `impl` blocks in the
//! [`crate::api`] module.

use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use serde_json::Value;
use url::Url;

use crate::constants::{API_BASE_URL, QUERY_PATH, REQUEST_TIMEOUT};
use crate::error::{AlphaVantageError, Result};

/// HTTP client for the Alpha Vantage REST API.
///
/// One instance is built per invocation and dropped with it; nothing is pooled
/// across requests.
///
/// # Example
///
/// ```no_run
/// use stock_data_lambda::client::AlphaVantageClient;
///
/// # #[tokio::main]
/// # async fn main() -> stock_data_lambda::error::Result<()> {
/// let client = AlphaVantageClient::new("demo")?;
/// let raw = client.query(&[("function", "TIME_SERIES_DAILY"), ("symbol", "IBM")]).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    http: reqwest::Client,
    /// Provider API key, appended to every query.
    api_key: String,
    /// Base URL for REST requests (defaults to [`API_BASE_URL`]).
    base_url: String,
}

impl AlphaVantageClient {
    /// Create a client for the public Alpha Vantage endpoint with the default
    /// 10-second timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, API_BASE_URL)
    }

    /// Create a client pointing at a custom base URL.
    ///
    /// Useful for testing against a sandbox or mock server.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(api_key, base_url, REQUEST_TIMEOUT)
    }

    /// Create a client with an explicit base URL and request timeout.
    pub fn with_timeout(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .default_headers(Self::default_headers())
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        })
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform a GET on the query endpoint and return the parsed JSON value.
    ///
    /// `params` are appended in order, followed by `apikey`.
    pub async fn query(&self, params: &[(&str, &str)]) -> Result<Value> {
        let url = self.query_url(params)?;
        // apikey stays out of logs.
        tracing::debug!(base_url = %self.base_url, ?params, "GET query");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    /// Build the query URL, percent-encoding every value.
    pub(crate) fn query_url(&self, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, QUERY_PATH))?;
        url.query_pairs_mut()
            .extend_pairs(params)
            .append_pair("apikey", &self.api_key);
        Ok(url)
    }

    /// Default headers applied to every request.
    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Read a response, returning either the parsed body or an
    /// [`AlphaVantageError`].
    async fn handle_response(&self, resp: reqwest::Response) -> Result<Value> {
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if status.is_success() {
            serde_json::from_slice(&bytes).map_err(AlphaVantageError::Json)
        } else {
            Err(AlphaVantageError::HttpStatus {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_url_appends_key_last_and_encodes_values() {
        let client = AlphaVantageClient::with_base_url("k&y", "http://localhost:9000/").unwrap();
        let url = client
            .query_url(&[("function", "TIME_SERIES_DAILY"), ("symbol", "BRK B")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:9000/query?function=TIME_SERIES_DAILY&symbol=BRK+B&apikey=k%26y"
        );
    }

    #[test]
    fn invalid_base_url_is_a_url_error() {
        let client = AlphaVantageClient::with_base_url("key", "not a url").unwrap();
        let err = client.query_url(&[]).unwrap_err();
        assert!(matches!(err, AlphaVantageError::Url(_)));
    }
}
