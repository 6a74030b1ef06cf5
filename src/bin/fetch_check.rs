//! Run one fetch against the live provider and print the reshaped payload.
//!
//! # Usage
//!
//! ```sh
//! export ALPHA_VANTAGE_API_KEY="your-api-key"
//! cargo run --bin fetch_check -- IBM intraday
//! ```

use std::env;
use std::process::ExitCode;

use stock_data_lambda::Config;
use stock_data_lambda::constants::{DEFAULT_INTERVAL, DEFAULT_SYMBOL};
use stock_data_lambda::handler::handle_request;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = env::args().skip(1);
    let symbol = args.next().unwrap_or_else(|| DEFAULT_SYMBOL.to_owned());
    let interval = args.next().unwrap_or_else(|| DEFAULT_INTERVAL.to_owned());

    let config = Config::from_env();
    let body = serde_json::json!({ "symbol": symbol, "interval": interval }).to_string();

    println!("Fetching {symbol} ({interval}) from {}…", config.base_url);
    let resp = handle_request(&config, body.as_bytes()).await;

    println!("HTTP {}", resp.status());
    for (name, value) in resp.headers() {
        println!("{name}: {}", value.to_str().unwrap_or("<binary>"));
    }
    println!();

    let bytes: &[u8] = resp.body();
    let text = String::from_utf8_lossy(bytes).into_owned();
    match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(value) => println!("{value:#}"),
        Err(_) => println!("{text}"),
    }

    if resp.status().is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
