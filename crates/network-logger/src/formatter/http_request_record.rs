use std::collections::BTreeMap;
use std::fmt;

use bytes::Bytes;
use http::Method;
use url::Url;

/// An outgoing request as seen by the logger.
///
/// Headers are kept sorted by name so that rendering the same request twice
/// yields the same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Option<Url>,
    pub headers: BTreeMap<String, String>,
    pub body: RequestBody,
}

/// Body of an outgoing request. Only one representation can be present.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum RequestBody {
    #[default]
    Empty,
    Bytes(Bytes),
    Stream(StreamInfo),
}

/// What is known about a streamed body without reading from it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StreamInfo {
    pub declared_len: Option<u64>,
}

impl fmt::Display for StreamInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.declared_len {
            Some(len) => write!(f, "<stream: {len} bytes>"),
            None => write!(f, "<stream: unknown length>"),
        }
    }
}

impl HttpRequest {
    pub fn new(method: Method, url: Option<Url>) -> Self {
        Self {
            method,
            url,
            headers: BTreeMap::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = RequestBody::Bytes(body.into());
        self
    }

    pub fn stream(mut self, declared_len: Option<u64>) -> Self {
        self.body = RequestBody::Stream(StreamInfo { declared_len });
        self
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(http::header::CONTENT_TYPE.as_str()))
            .map(|(_, value)| value.as_str())
    }
}

impl From<&reqwest::Request> for HttpRequest {
    fn from(request: &reqwest::Request) -> Self {
        let headers: BTreeMap<String, String> = request
            .headers()
            .iter()
            .map(|(key, value)| {
                (
                    key.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        let body = match request.body() {
            None => RequestBody::Empty,
            Some(body) => match body.as_bytes() {
                Some(bytes) => RequestBody::Bytes(Bytes::copy_from_slice(bytes)),
                // streamed bodies are only described, reading them would consume the upload
                None => RequestBody::Stream(StreamInfo {
                    declared_len: request
                        .headers()
                        .get(http::header::CONTENT_LENGTH)
                        .and_then(|value| value.to_str().ok())
                        .and_then(|value| value.parse().ok()),
                }),
            },
        };

        Self {
            method: request.method().clone(),
            url: Some(request.url().clone()),
            headers,
            body,
        }
    }
}
