pub mod exposition;
pub mod registry;

pub use registry::MetricsRegistry;

/// One finished request as seen by the instrumentation layer.
/// Folded into the registry immediately and then dropped.
#[derive(Debug, Clone)]
pub struct Sample {
    /// Request path as received, e.g. "/images/upload"
    pub path: String,
    /// HTTP method of the actual request
    pub method: String,
    /// Final response status
    pub status: u16,
    /// Wall time spent in the wrapped handler
    pub elapsed_secs: f64,
}
