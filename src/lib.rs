//! # stock-data-lambda
//!
//! A serverless handler that proxies [Alpha Vantage](https://www.alphavantage.co/documentation/)
//! daily and intraday time series, reshaped into a flat OHLCV schema with
//! permissive CORS headers.
//!
//! ## Quick Start
//!
//! ```no_run
//! use stock_data_lambda::{Config, handler::handle_request};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::new(Some("your-api-key".into()));
//!     let resp = handle_request(&config, br#"{"symbol":"IBM","interval":"intraday"}"#).await;
//!     println!("{}", resp.status());
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod handler;
pub mod response;
pub mod types;

/// Re-export the main client type at crate root for convenience.
pub use client::AlphaVantageClient;
pub use config::Config;
/// Re-export the error types and Result alias.
pub use error::{AlphaVantageError, HandlerError, Result};
