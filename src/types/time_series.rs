//! Time-series types — inbound request, interval mode, and the simplified
//! payload returned to callers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{DEFAULT_INTERVAL, DEFAULT_SYMBOL, MAX_POINTS, fields, query};
use crate::error::{AlphaVantageError, Result};

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Inbound request body.
///
/// Both fields are optional on the wire and `null` counts as absent; unknown
/// fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "StockRequestWire")]
pub struct StockRequest {
    pub symbol: String,
    /// `"daily"` or `"intraday"`. Anything else is served as daily, but the raw
    /// value is echoed in [`Metadata::interval`].
    pub interval: String,
}

#[derive(Deserialize)]
struct StockRequestWire {
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    interval: Option<String>,
}

impl From<StockRequestWire> for StockRequest {
    fn from(wire: StockRequestWire) -> Self {
        Self {
            symbol: wire.symbol.unwrap_or_else(|| DEFAULT_SYMBOL.to_owned()),
            interval: wire.interval.unwrap_or_else(|| DEFAULT_INTERVAL.to_owned()),
        }
    }
}

impl Default for StockRequest {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_SYMBOL.to_owned(),
            interval: DEFAULT_INTERVAL.to_owned(),
        }
    }
}

// ---------------------------------------------------------------------------
// Interval
// ---------------------------------------------------------------------------

/// Upstream series selected by the request's `interval` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    Daily,
    /// 5-minute bars.
    Intraday,
}

impl Interval {
    /// Map a request string to an interval. Only `"intraday"` selects
    /// [`Interval::Intraday`].
    pub fn from_request(value: &str) -> Self {
        match value {
            "intraday" => Self::Intraday,
            _ => Self::Daily,
        }
    }

    /// Upstream `function` parameter.
    pub fn function(self) -> &'static str {
        match self {
            Self::Daily => query::FUNCTION_DAILY,
            Self::Intraday => query::FUNCTION_INTRADAY,
        }
    }

    /// Upstream `interval` parameter, sent for intraday only.
    pub fn granularity(self) -> Option<&'static str> {
        match self {
            Self::Daily => None,
            Self::Intraday => Some(query::INTRADAY_GRANULARITY),
        }
    }
}

// ---------------------------------------------------------------------------
// Response payload
// ---------------------------------------------------------------------------

/// One OHLCV record. `price` duplicates `close`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub timestamp: String,
    pub price: f64,
    pub volume: f64,
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub close: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Provider's `3. Last Refreshed`, or empty when absent.
    pub last_refreshed: String,
    pub interval: String,
}

/// Success payload returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockData {
    pub symbol: String,
    /// At most [`MAX_POINTS`] entries, in provider order.
    pub time_series: Vec<TimeSeriesPoint>,
    pub metadata: Metadata,
}

impl StockData {
    /// Reshape a raw provider payload.
    ///
    /// The time-series container is the *second* top-level key of `raw`, in
    /// document order. The first [`MAX_POINTS`] entries are kept; any entry
    /// with a missing or non-numeric field fails the whole conversion.
    pub fn from_upstream(symbol: &str, interval: &str, raw: &Value) -> Result<Self> {
        let object = raw
            .as_object()
            .ok_or_else(|| AlphaVantageError::UnexpectedShape("payload is not an object".into()))?;

        let (series_key, series) = object.iter().nth(1).ok_or_else(|| {
            AlphaVantageError::UnexpectedShape(format!(
                "expected a time-series key, found {} top-level key(s)",
                object.len()
            ))
        })?;

        let series = series.as_object().ok_or_else(|| {
            AlphaVantageError::UnexpectedShape(format!("`{series_key}` is not an object"))
        })?;

        let time_series = series
            .iter()
            .take(MAX_POINTS)
            .map(|(timestamp, values)| parse_point(timestamp, values))
            .collect::<Result<Vec<_>>>()?;

        let last_refreshed = raw
            .get(fields::META_DATA)
            .and_then(|meta| meta.get(fields::LAST_REFRESHED))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();

        Ok(Self {
            symbol: symbol.to_owned(),
            time_series,
            metadata: Metadata {
                last_refreshed,
                interval: interval.to_owned(),
            },
        })
    }
}

fn parse_point(timestamp: &str, values: &Value) -> Result<TimeSeriesPoint> {
    let field = |name: &'static str| -> Result<f64> {
        values
            .get(name)
            .and_then(as_number)
            .ok_or_else(|| AlphaVantageError::InvalidField {
                timestamp: timestamp.to_owned(),
                field: name,
            })
    };

    let close = field(fields::CLOSE)?;
    Ok(TimeSeriesPoint {
        timestamp: timestamp.to_owned(),
        price: close,
        volume: field(fields::VOLUME)?,
        high: field(fields::HIGH)?,
        low: field(fields::LOW)?,
        open: field(fields::OPEN)?,
        close,
    })
}

/// The provider quotes numbers as strings; plain JSON numbers are accepted too.
/// `NaN` and infinities are rejected since they have no JSON form.
fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };
    number.filter(|v| v.is_finite())
}
