use tracing::info;

const SEPARATOR: &str = ", ";

/// Receives the rendered values of one log event and writes them somewhere.
///
/// Closures taking `(label, values)` are emitters:
///
/// ```rust
/// use network_logger::NetworkLoggerPlugin;
///
/// let plugin = NetworkLoggerPlugin::builder()
///     .output(|label: &str, values: &[String]| eprintln!("{label}: {}", values.join(", ")))
///     .build();
/// ```
pub trait Emitter: Send + Sync {
    fn emit(&self, label: &str, values: &[String]);
}

impl<F> Emitter for F
where
    F: Fn(&str, &[String]) + Send + Sync,
{
    fn emit(&self, label: &str, values: &[String]) {
        self(label, values)
    }
}

/// Default emitter, forwards every event to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEmitter;

impl Emitter for TracingEmitter {
    fn emit(&self, label: &str, values: &[String]) {
        info!(target: "network_logger", label = %label, "{}", values.join(SEPARATOR));
    }
}
