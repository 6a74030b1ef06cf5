//! AWS Lambda entry point.
//!
//! Serves API Gateway / function URL events through [`handle_request`].
//! Configuration is read from the environment on every invocation:
//!
//! ```sh
//! export ALPHA_VANTAGE_API_KEY="your-api-key"
//! cargo lambda watch --bin stock_data_lambda
//! ```

use lambda_http::{Error, Request, run, service_fn};
use stock_data_lambda::Config;
use stock_data_lambda::handler::handle_request;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    run(service_fn(|event: Request| async move {
        let config = Config::from_env();
        let body: &[u8] = event.body();
        Ok::<_, Error>(handle_request(&config, body).await)
    }))
    .await
}
