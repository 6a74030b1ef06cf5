//! Request handler — one linear pass per invocation.
//!
//! Parses the request body, checks the credential, runs the fetch, and turns
//! the outcome into a response. Every failure becomes a
//! [`HandlerError`], is logged, and is rendered by
//! [`error_response`](crate::response::error_response).

use lambda_http::{Body, Response};

use crate::client::AlphaVantageClient;
use crate::config::Config;
use crate::error::HandlerError;
use crate::response::{error_response, success_response};
use crate::types::{StockData, StockRequest};

/// Handle one invocation. `body` is the raw request body; empty means `{}`.
pub async fn handle_request(config: &Config, body: &[u8]) -> Response<Body> {
    match process(config, body).await {
        Ok(data) => success_response(&data),
        Err(err) => {
            tracing::error!(error = %err, "request failed");
            error_response(&err.to_string(), err.status())
        }
    }
}

async fn process(config: &Config, body: &[u8]) -> Result<StockData, HandlerError> {
    let request = parse_request(body)?;

    let api_key = config
        .api_key
        .as_deref()
        .ok_or(HandlerError::MissingApiKey)?;

    tracing::info!(symbol = %request.symbol, interval = %request.interval, "fetching stock data");

    let client = AlphaVantageClient::with_timeout(api_key, &config.base_url, config.timeout)?;
    client
        .fetch_stock_data(&request.symbol, &request.interval)
        .await
        .ok_or(HandlerError::FetchFailed)
}

fn parse_request(body: &[u8]) -> Result<StockRequest, HandlerError> {
    if body.is_empty() {
        return Ok(StockRequest::default());
    }
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_uses_defaults() {
        let req = parse_request(b"").unwrap();
        assert_eq!(req.symbol, "AAPL");
        assert_eq!(req.interval, "daily");
    }

    #[test]
    fn malformed_body_is_invalid_body() {
        assert!(matches!(
            parse_request(b"{not json"),
            Err(HandlerError::InvalidBody(_))
        ));
        // A non-object document cannot carry the request fields.
        assert!(matches!(
            parse_request(b"null"),
            Err(HandlerError::InvalidBody(_))
        ));
        assert!(matches!(
            parse_request(br#"{"symbol": 42}"#),
            Err(HandlerError::InvalidBody(_))
        ));
    }
}
