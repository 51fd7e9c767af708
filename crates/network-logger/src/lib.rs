//! # network-logger
//!
//! A logging plugin for HTTP request pipelines. Before a request is sent it
//! renders the method, URL, headers and body (or a `curl` command that
//! replays the request); after the exchange resolves it renders the status,
//! URL, headers and body of the response. The text goes to an [`Emitter`],
//! which owns the actual output.
//!
//! ```rust
//! use network_logger::{HttpRequest, NetworkLoggerPlugin, Plugin, Target};
//! use url::Url;
//!
//! struct Zen;
//!
//! impl std::fmt::Display for Zen {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         write!(f, "zen")
//!     }
//! }
//!
//! impl Target for Zen {
//!     fn base_url(&self) -> Option<Url> {
//!         Url::parse("https://api.github.com").ok()
//!     }
//!
//!     fn path(&self) -> String {
//!         "/zen".into()
//!     }
//! }
//!
//! let plugin = NetworkLoggerPlugin::builder()
//!     .verbose(true)
//!     .output(|label: &str, values: &[String]| println!("[{label}] {}", values.join(", ")))
//!     .build();
//!
//! let request = HttpRequest::new(http::Method::GET, Zen.url())
//!     .header("Content-Type", "application/json")
//!     .body("cool body");
//! plugin.will_send(&request, &Zen);
//! ```
//!
//! Rendering never fails the exchange: missing URLs, missing responses and
//! binary bodies all degrade to placeholder lines.

mod config;
mod emitter;
mod exchange;
pub mod formatter;
mod plugin;
mod target;

pub use config::{LoggerConfig, RequestOutput, Verbosity};
pub use emitter::{Emitter, TracingEmitter};
pub use exchange::{ExchangeError, ExchangeOutcome};
pub use formatter::{
    HttpHeader, HttpRequest, HttpResponse, HttpResponseMetadata, RequestBody,
    ResponseDataFormatter, StreamInfo,
};
pub use plugin::{NetworkLoggerPlugin, NetworkLoggerPluginBuilder, Plugin};
pub use target::Target;
