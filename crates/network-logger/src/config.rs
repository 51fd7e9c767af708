use serde::Deserialize;

const DEFAULT_INCLUDE_RESPONSE_HEADERS: bool = true;

/// Settings fixed for the lifetime of a [`NetworkLoggerPlugin`](crate::NetworkLoggerPlugin).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggerConfig {
    /// Amount of detail per request/response: summary | verbose
    pub verbosity: Verbosity,

    /// How outgoing requests are rendered: text | curl
    pub request_output: RequestOutput,

    /// Adds `-i` to curl commands so the replayed call prints response headers
    pub include_response_headers: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            request_output: RequestOutput::default(),
            include_response_headers: DEFAULT_INCLUDE_RESPONSE_HEADERS,
        }
    }
}

impl LoggerConfig {
    pub fn is_verbose(&self) -> bool {
        matches!(self.verbosity, Verbosity::Verbose)
    }
}

#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    #[default]
    Summary,
    Verbose,
}

#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RequestOutput {
    #[default]
    Text,
    Curl,
}

impl From<bool> for Verbosity {
    fn from(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Summary
        }
    }
}

impl From<bool> for RequestOutput {
    fn from(curl: bool) -> Self {
        if curl {
            RequestOutput::Curl
        } else {
            RequestOutput::Text
        }
    }
}
