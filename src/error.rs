//! Error types for the `stock-data-lambda` crate.
//!
//! Client-side operations return [`Result<T>`], an alias for
//! `std::result::Result<T, AlphaVantageError>`.
//!
//! [`AlphaVantageError`] covers:
//! - **HTTP status errors** — Unexpected status codes with response body
//! - **HTTP transport errors** — Network, TLS, timeout failures
//! - **JSON errors** — Deserialization failures
//! - **URL errors** — Malformed base URL
//! - **Shape errors** — Payloads without a time-series container
//! - **Field errors** — Missing or non-numeric OHLCV values
//!
//! [`HandlerError`] is the closed set of failures the request handler
//! surfaces to callers. Its `Display` text is the `error` string placed in the
//! response body.

use lambda_http::http::StatusCode;

/// All possible errors produced while talking to Alpha Vantage.
#[derive(Debug, thiserror::Error)]
pub enum AlphaVantageError {
    /// The server returned an unexpected HTTP status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code.
        status: reqwest::StatusCode,
        /// The response body text.
        body: String,
    },

    /// A network or transport-level error from `reqwest`, timeouts included.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to deserialize a JSON response body.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// An error building the request URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// The payload does not carry a time-series container where one is expected.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),

    /// A time-series entry is missing a field or holds a non-numeric value.
    #[error("invalid field `{field}` at {timestamp}")]
    InvalidField {
        /// Timestamp key of the offending entry.
        timestamp: String,
        /// Provider field name, e.g. `4. close`.
        field: &'static str,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AlphaVantageError>;

/// Failures surfaced by [`handle_request`](crate::handler::handle_request).
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// No API key was available for the upstream provider.
    #[error("API key not configured")]
    MissingApiKey,

    /// The fetch produced no data; the underlying cause was logged.
    #[error("Failed to fetch stock data")]
    FetchFailed,

    /// The inbound request body was not a valid request object.
    #[error("{0}")]
    InvalidBody(#[from] serde_json::Error),

    /// The outbound client could not be set up.
    #[error("{0}")]
    Client(#[from] AlphaVantageError),
}

impl HandlerError {
    /// HTTP status reported for this failure.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingApiKey | Self::FetchFailed | Self::InvalidBody(_) | Self::Client(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
