//! Response data formatters for JSON APIs.

use bytes::Bytes;
use serde_json::Value;

/// Pretty prints JSON response data, keeping key order. Data that is not
/// JSON is passed through untouched.
///
/// ```rust
/// use network_logger::{formatter::json_formatter::pretty_json, NetworkLoggerPlugin};
///
/// let plugin = NetworkLoggerPlugin::builder()
///     .verbose(true)
///     .response_data_formatter(pretty_json)
///     .build();
/// ```
pub fn pretty_json(data: &[u8]) -> Bytes {
    serde_json::from_slice::<Value>(data)
        .and_then(|value| serde_json::to_vec_pretty(&value))
        .map(Bytes::from)
        .unwrap_or_else(|_| Bytes::copy_from_slice(data))
}
