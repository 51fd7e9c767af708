mod body_text;
mod curl_formatter;
mod http_request_record;
mod http_response_metadata;
mod http_response_record;
pub mod json_formatter;
mod text_formatter;

use std::sync::Arc;

use bytes::Bytes;

pub use http_request_record::{HttpRequest, RequestBody, StreamInfo};
pub use http_response_metadata::{HttpHeader, HttpResponseMetadata};
pub use http_response_record::HttpResponse;

use crate::config::{LoggerConfig, RequestOutput};
use curl_formatter::CurlFormatter;
pub(crate) use text_formatter::TextFormatter;

pub(crate) const REQUEST: &str = "Request";
pub(crate) const RESPONSE: &str = "Response";

/// Transforms response data before it is decoded and logged.
pub type ResponseDataFormatter = Arc<dyn Fn(&[u8]) -> Bytes + Send + Sync>;

/// One rendered line and the label it is emitted under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LogLine {
    pub label: &'static str,
    pub message: String,
}

impl LogLine {
    pub fn new(label: &'static str, message: impl Into<String>) -> Self {
        Self {
            label,
            message: message.into(),
        }
    }
}

/// Conditions that stop normal rendering of a whole event. None of them
/// reach the pipeline, each one has a fallback line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum FormatError {
    #[error("request has no URL")]
    MissingRequest,
    #[error("no network response for {0}")]
    EmptyNetworkResponse(String),
}

impl FormatError {
    pub fn fallback(&self) -> LogLine {
        match self {
            FormatError::MissingRequest => LogLine::new(REQUEST, "Request: (invalid request)"),
            FormatError::EmptyNetworkResponse(target) => LogLine::new(
                RESPONSE,
                format!("Response: Received empty network response for {target}."),
            ),
        }
    }
}

/// A body that cannot be shown as it is. The rest of the event still renders.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum BodyError {
    #[error("{0} bytes of body data are not text")]
    Undecodable(usize),
    #[error("streamed body cannot be replayed with curl")]
    UnsupportedReplay,
}

pub(crate) trait RequestFormatter {
    fn format_request(&self, request: &HttpRequest) -> Result<Vec<LogLine>, FormatError>;
}

pub(crate) fn request_formatter(config: &LoggerConfig) -> Arc<dyn RequestFormatter + Sync + Send> {
    match config.request_output {
        RequestOutput::Text => Arc::new(TextFormatter::new(config.verbosity, None)),
        RequestOutput::Curl => Arc::new(CurlFormatter {
            include_response_headers: config.include_response_headers,
        }),
    }
}
