use prometheus::{
    CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};

use super::Sample;

// ─── Metric families ─────────────────────────────────────────────

const REQUESTS_TOTAL: &str = "http_requests_total";
const REQUEST_DURATION: &str = "http_request_duration_seconds";

/// Label order shared by both families.
const LABELS: &[&str] = &["path", "method", "code"];

// ─── Public types ────────────────────────────────────────────────

/// Per-route request counter and latency histogram.
///
/// Built once at startup and shared through `AppState`; tests build
/// their own so counts never leak between cases. Both families do
/// their own locking, so every method takes `&self`.
pub struct MetricsRegistry {
    registry: Registry,
    requests: CounterVec,
    durations: HistogramVec,
}

impl MetricsRegistry {
    /// Fresh registry with both families registered.
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::with_registry(Registry::new())
    }

    /// Register both families into an existing `Registry`.
    ///
    /// Fails with `AlreadyReg` if the families are already present.
    pub fn with_registry(registry: Registry) -> Result<Self, prometheus::Error> {
        let requests = CounterVec::new(
            Opts::new(REQUESTS_TOTAL, "Total number of HTTP requests."),
            LABELS,
        )?;
        let durations = HistogramVec::new(
            HistogramOpts::new(REQUEST_DURATION, "Duration of HTTP requests in seconds.")
                .buckets(prometheus::DEFAULT_BUCKETS.to_vec()),
            LABELS,
        )?;

        registry.register(Box::new(requests.clone()))?;
        registry.register(Box::new(durations.clone()))?;

        Ok(Self {
            registry,
            requests,
            durations,
        })
    }

    pub fn increment_request(&self, path: &str, method: &str, code: u16) {
        let code = code.to_string();
        self.requests
            .with_label_values(&[path, method, code.as_str()])
            .inc();
    }

    pub fn observe_duration(&self, path: &str, method: &str, code: u16, seconds: f64) {
        let code = code.to_string();
        self.durations
            .with_label_values(&[path, method, code.as_str()])
            .observe(seconds);
    }

    /// Fold one finished request into both families.
    pub fn record(&self, sample: &Sample) {
        self.increment_request(&sample.path, &sample.method, sample.status);
        self.observe_duration(
            &sample.path,
            &sample.method,
            sample.status,
            sample.elapsed_secs,
        );
    }

    /// Current value of `http_requests_total` for one label set.
    pub fn requests_total(&self, path: &str, method: &str, code: u16) -> u64 {
        let code = code.to_string();
        self.requests
            .get_metric_with_label_values(&[path, method, code.as_str()])
            .map(|c| c.get() as u64)
            .unwrap_or(0)
    }

    /// Number of observations in `http_request_duration_seconds` for one label set.
    pub fn duration_count(&self, path: &str, method: &str, code: u16) -> u64 {
        let code = code.to_string();
        self.durations
            .get_metric_with_label_values(&[path, method, code.as_str()])
            .map(|h| h.get_sample_count())
            .unwrap_or(0)
    }

    /// Everything gathered so far, in the Prometheus text format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
