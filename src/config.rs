//! Runtime configuration for the handler.
//!
//! The binaries build a [`Config`] from the process environment once per
//! invocation and pass it down explicitly; the library never reads the
//! environment itself.

use std::env;
use std::time::Duration;

use crate::constants::{API_BASE_URL, ENV_API_KEY, ENV_BASE_URL, REQUEST_TIMEOUT};

#[derive(Debug, Clone)]
pub struct Config {
    /// Provider API key. `None` when unset or empty.
    pub api_key: Option<String>,
    /// Provider base URL (defaults to [`API_BASE_URL`]).
    pub base_url: String,
    /// Timeout for the outbound request.
    pub timeout: Duration,
}

impl Config {
    /// Create a config for the public provider endpoint.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.is_empty()),
            base_url: API_BASE_URL.to_owned(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Read `ALPHA_VANTAGE_API_KEY` and the optional `ALPHA_VANTAGE_BASE_URL`.
    pub fn from_env() -> Self {
        let config = Self::new(env::var(ENV_API_KEY).ok());
        match env::var(ENV_BASE_URL) {
            Ok(base_url) if !base_url.is_empty() => config.with_base_url(base_url),
            _ => config,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_counts_as_missing() {
        assert!(Config::new(Some(String::new())).api_key.is_none());
        assert!(Config::new(None).api_key.is_none());
        assert_eq!(Config::new(Some("k".into())).api_key.as_deref(), Some("k"));
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = Config::new(None)
            .with_base_url("http://127.0.0.1:8080")
            .with_timeout(Duration::from_millis(250));
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.timeout, Duration::from_millis(250));
        assert_eq!(Config::new(None).timeout, REQUEST_TIMEOUT);
    }
}
