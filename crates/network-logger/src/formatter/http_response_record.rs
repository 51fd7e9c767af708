use anyhow::{Context, Result};
use bytes::Bytes;

use super::http_response_metadata::HttpResponseMetadata;

/// A completed response as seen by the logger.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status_code: u16,
    pub data: Bytes,
    pub metadata: Option<HttpResponseMetadata>,
}

impl HttpResponse {
    pub fn new(
        status_code: u16,
        data: impl Into<Bytes>,
        metadata: Option<HttpResponseMetadata>,
    ) -> Self {
        Self {
            status_code,
            data: data.into(),
            metadata,
        }
    }

    /// Reads the whole body of a `reqwest` response.
    pub async fn from_reqwest(response: reqwest::Response) -> Result<Self> {
        let status_code = response.status().as_u16();
        let metadata = HttpResponseMetadata::new(&response);
        let data = response
            .bytes()
            .await
            .context("Failed to read response body")?;

        Ok(Self {
            status_code,
            data,
            metadata: Some(metadata),
        })
    }
}
