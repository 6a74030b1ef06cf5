//! Request and response types for the time-series proxy.
//!
//! ## Organization
//!
//! - [`time_series`] — Inbound request, interval mode, and the simplified
//!   OHLCV payload returned to callers
//!
//! All types are re-exported at the module root via `pub use time_series::*`.

pub mod time_series;

pub use time_series::*;
