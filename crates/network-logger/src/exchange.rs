use crate::formatter::HttpResponse;

/// Result of a request/response exchange as handed to the logger.
pub type ExchangeOutcome = Result<HttpResponse, ExchangeError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExchangeError {
    #[error("unexpected status code {}", .0.status_code)]
    StatusCode(HttpResponse),
    #[error("failed to map response data")]
    Data(HttpResponse),
    #[error("{message}")]
    Underlying {
        message: String,
        response: Option<HttpResponse>,
    },
    #[error("failed to build request: {0}")]
    RequestMapping(String),
}

impl ExchangeError {
    /// The response that came with the failure, if the transport produced one.
    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            ExchangeError::StatusCode(response) | ExchangeError::Data(response) => Some(response),
            ExchangeError::Underlying { response, .. } => response.as_ref(),
            ExchangeError::RequestMapping(_) => None,
        }
    }
}

impl From<reqwest::Error> for ExchangeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            return ExchangeError::RequestMapping(err.to_string());
        }
        ExchangeError::Underlying {
            message: err.to_string(),
            response: None,
        }
    }
}
