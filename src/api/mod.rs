//! Provider endpoint implementations.
//!
//! Each sub-module adds high-level `async` methods to
//! [`AlphaVantageClient`](crate::client::AlphaVantageClient) via `impl` blocks.
//!
//! ## Usage
//!
//! ```no_run
//! use stock_data_lambda::AlphaVantageClient;
//! use stock_data_lambda::types::Interval;
//!
//! # #[tokio::main]
//! # async fn main() -> stock_data_lambda::Result<()> {
//! let client = AlphaVantageClient::new("your-api-key")?;
//! let data = client.get_time_series("IBM", Interval::Daily, "daily").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! | Module | Endpoints | Description |
//! |---|---|---|
//! | [`time_series`] | 2 | Daily & 5-minute intraday OHLCV |

pub mod time_series;
