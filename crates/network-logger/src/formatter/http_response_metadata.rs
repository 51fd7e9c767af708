use reqwest::Response;
use url::Url;

/// Network-level details of a response. A response without metadata means
/// the transport never produced one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HttpResponseMetadata {
    pub url: Option<Url>,
    pub version: Option<String>,
    pub status_string: Option<&'static str>,
    pub headers: Vec<HttpHeader>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpHeader {
    pub name: String,
    pub value: String,
}

impl HttpHeader {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl HttpResponseMetadata {
    pub fn new(response: &Response) -> Self {
        let status_string = response.status().canonical_reason();
        let version = Some(format!("{:?}", response.version()));
        // header values are not guaranteed to be text, keep what we can
        let headers = response
            .headers()
            .iter()
            .map(|(key, value)| {
                HttpHeader::new(key.as_str(), String::from_utf8_lossy(value.as_bytes()))
            })
            .collect();

        Self {
            url: Some(response.url().clone()),
            version,
            status_string,
            headers,
        }
    }

    pub fn with_url(url: Url) -> Self {
        Self {
            url: Some(url),
            ..Default::default()
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|hdr| hdr.name.eq_ignore_ascii_case(name))
            .map(|hdr| hdr.value.as_str())
    }
}
