//! Time Series endpoints — Daily and 5-minute Intraday OHLCV.

use serde_json::Value;

use crate::client::AlphaVantageClient;
use crate::constants::fields;
use crate::error::Result;
use crate::types::time_series::*;

impl AlphaVantageClient {
    /// Retrieve the raw provider payload for `symbol`.
    ///
    /// **Endpoint:** `GET /query?function=TIME_SERIES_DAILY` or
    /// `GET /query?function=TIME_SERIES_INTRADAY&interval=5min`
    pub async fn get_raw_time_series(&self, symbol: &str, interval: Interval) -> Result<Value> {
        let mut params = vec![("function", interval.function()), ("symbol", symbol)];
        if let Some(granularity) = interval.granularity() {
            params.push(("interval", granularity));
        }
        self.query(&params).await
    }

    /// Retrieve and reshape a time series.
    ///
    /// `requested` is the interval string as the caller sent it, echoed in the
    /// payload metadata.
    pub async fn get_time_series(
        &self,
        symbol: &str,
        interval: Interval,
        requested: &str,
    ) -> Result<StockData> {
        let raw = self.get_raw_time_series(symbol, interval).await?;
        if let Some(notice) = provider_notice(&raw) {
            tracing::warn!(%symbol, notice, "provider returned a notice instead of data");
        }
        StockData::from_upstream(symbol, requested, &raw)
    }

    /// Fetch a time series, collapsing every failure into `None`.
    ///
    /// Timeouts, transport errors, non-2xx statuses, malformed JSON and
    /// unexpected payload shapes are logged and otherwise indistinguishable.
    pub async fn fetch_stock_data(&self, symbol: &str, interval: &str) -> Option<StockData> {
        match self
            .get_time_series(symbol, Interval::from_request(interval), interval)
            .await
        {
            Ok(data) => {
                tracing::debug!(%symbol, points = data.time_series.len(), "fetched time series");
                Some(data)
            }
            Err(err) => {
                tracing::warn!(%symbol, interval, error = %err, "fetch error");
                None
            }
        }
    }
}

/// Text of a single-key notice payload (`Note`, `Information`,
/// `Error Message`), if `raw` is one.
fn provider_notice(raw: &Value) -> Option<&str> {
    let object = raw.as_object()?;
    if object.len() != 1 {
        return None;
    }
    fields::NOTICES
        .iter()
        .find_map(|key| object.get(*key))
        .and_then(Value::as_str)
}
