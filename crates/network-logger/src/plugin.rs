use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use tracing::debug;

use crate::{
    config::{LoggerConfig, RequestOutput, Verbosity},
    emitter::{Emitter, TracingEmitter},
    exchange::ExchangeOutcome,
    formatter::{
        request_formatter, HttpRequest, LogLine, RequestFormatter, ResponseDataFormatter,
        TextFormatter,
    },
    target::Target,
};

/// Extension points of a request pipeline.
pub trait Plugin: Send + Sync {
    /// Called before the request is handed to the transport.
    fn will_send(&self, _request: &HttpRequest, _target: &dyn Target) {}

    /// Called once the exchange resolved, successfully or not.
    fn did_receive(&self, _outcome: &ExchangeOutcome, _target: &dyn Target) {}
}

/// Plugin that renders every request and response and hands the text to an
/// [`Emitter`].
///
/// Rendering problems never reach the pipeline: a missing URL, a missing
/// response or undecodable data each produce a fallback line instead.
#[derive(Clone)]
pub struct NetworkLoggerPlugin {
    config: LoggerConfig,
    request_formatter: Arc<dyn RequestFormatter + Sync + Send>,
    response_formatter: TextFormatter,
    emitter: Arc<dyn Emitter>,
}

impl NetworkLoggerPlugin {
    /// Plugin with the given settings, emitting through `tracing`.
    pub fn new(config: LoggerConfig) -> Self {
        NetworkLoggerPluginBuilder::default().config(config).build()
    }

    pub fn builder() -> NetworkLoggerPluginBuilder {
        NetworkLoggerPluginBuilder::default()
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    fn output(&self, lines: Vec<LogLine>) {
        if self.config.is_verbose() {
            for line in lines {
                self.emitter.emit(line.label, &[line.message]);
            }
            return;
        }

        let label = match lines.first() {
            Some(line) => line.label,
            None => return,
        };
        let values: Vec<String> = lines.into_iter().map(|line| line.message).collect();
        self.emitter.emit(label, &values);
    }
}

impl Default for NetworkLoggerPlugin {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl fmt::Debug for NetworkLoggerPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkLoggerPlugin")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Plugin for NetworkLoggerPlugin {
    fn will_send(&self, request: &HttpRequest, target: &dyn Target) {
        let lines = self
            .request_formatter
            .format_request(request)
            .unwrap_or_else(|err| {
                debug!(%err, endpoint = %target, "logging degraded request");
                vec![err.fallback()]
            });
        self.output(lines);
    }

    fn did_receive(&self, outcome: &ExchangeOutcome, target: &dyn Target) {
        let lines = self
            .response_formatter
            .format_response(outcome, target)
            .unwrap_or_else(|err| {
                debug!(%err, endpoint = %target, "logging degraded response");
                vec![err.fallback()]
            });
        self.output(lines);
    }
}

#[derive(Default)]
pub struct NetworkLoggerPluginBuilder {
    config: LoggerConfig,
    response_data_formatter: Option<ResponseDataFormatter>,
    emitter: Option<Arc<dyn Emitter>>,
}

impl NetworkLoggerPluginBuilder {
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbosity = Verbosity::from(verbose);
        self
    }

    /// Render requests as `curl` commands instead of log lines.
    pub fn curl(mut self, curl: bool) -> Self {
        self.config.request_output = RequestOutput::from(curl);
        self
    }

    pub fn include_response_headers(mut self, include: bool) -> Self {
        self.config.include_response_headers = include;
        self
    }

    /// Applied to response data before it is decoded and logged.
    pub fn response_data_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&[u8]) -> Bytes + Send + Sync + 'static,
    {
        self.response_data_formatter = Some(Arc::new(formatter));
        self
    }

    pub fn output<E>(mut self, emitter: E) -> Self
    where
        E: Emitter + 'static,
    {
        self.emitter = Some(Arc::new(emitter));
        self
    }

    pub fn build(self) -> NetworkLoggerPlugin {
        let request_formatter = request_formatter(&self.config);
        let response_formatter =
            TextFormatter::new(self.config.verbosity, self.response_data_formatter);
        let emitter = self
            .emitter
            .unwrap_or_else(|| Arc::new(TracingEmitter) as Arc<dyn Emitter>);

        NetworkLoggerPlugin {
            config: self.config,
            request_formatter,
            response_formatter,
            emitter,
        }
    }
}
