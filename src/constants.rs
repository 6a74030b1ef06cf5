//! Constants for the Alpha Vantage time-series proxy.
//!
//! Contains the provider base URL, query parameter values, environment
//! variable names, and the fixed response header values. These are used
//! internally by [`AlphaVantageClient`](crate::client::AlphaVantageClient) and
//! the response builders, but are also exported for advanced usage.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Provider
// ---------------------------------------------------------------------------

/// Base URL for the Alpha Vantage REST API.
pub const API_BASE_URL: &str = "https://www.alphavantage.co";

/// Path of the single query endpoint.
pub const QUERY_PATH: &str = "/query";

/// Timeout applied to the one outbound request of an invocation.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Upstream functions and parameters.
pub mod query {
    /// Daily time-series function name.
    pub const FUNCTION_DAILY: &str = "TIME_SERIES_DAILY";
    /// Intraday time-series function name.
    pub const FUNCTION_INTRADAY: &str = "TIME_SERIES_INTRADAY";
    /// Intraday granularity. Fixed; not configurable per request.
    pub const INTRADAY_GRANULARITY: &str = "5min";
}

/// Field names used by the provider's JSON payload.
pub mod fields {
    pub const META_DATA: &str = "Meta Data";
    pub const LAST_REFRESHED: &str = "3. Last Refreshed";
    pub const OPEN: &str = "1. open";
    pub const HIGH: &str = "2. high";
    pub const LOW: &str = "3. low";
    pub const CLOSE: &str = "4. close";
    pub const VOLUME: &str = "5. volume";

    /// Keys the provider uses for single-key notice payloads (rate limit,
    /// premium endpoint, invalid call).
    pub const NOTICES: [&str; 3] = ["Note", "Information", "Error Message"];
}

/// Maximum number of time-series points returned per request.
pub const MAX_POINTS: usize = 30;

// ---------------------------------------------------------------------------
// Request defaults
// ---------------------------------------------------------------------------

/// Symbol used when the request body does not name one.
pub const DEFAULT_SYMBOL: &str = "AAPL";

/// Interval used when the request body does not name one.
pub const DEFAULT_INTERVAL: &str = "daily";

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// Environment variable holding the provider API key.
pub const ENV_API_KEY: &str = "ALPHA_VANTAGE_API_KEY";

/// Optional environment variable overriding [`API_BASE_URL`].
pub const ENV_BASE_URL: &str = "ALPHA_VANTAGE_BASE_URL";

// ---------------------------------------------------------------------------
// Response headers
// ---------------------------------------------------------------------------

/// Fixed CORS header values attached to handler responses.
pub mod cors {
    pub const ALLOW_ORIGIN: &str = "*";
    pub const ALLOW_HEADERS: &str = "Content-Type,X-Amz-Date,Authorization,X-Api-Key";
    pub const ALLOW_METHODS: &str = "GET,POST,OPTIONS";
}
