use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

mod config;
mod handlers;
mod metrics;
mod middleware;
mod server;
mod storage;

/// Shared application state available to every handler via `State<Arc<AppState>>`.
pub struct AppState {
    /// Listen address, upload directory, public link prefix.
    pub config: config::ServiceConfig,

    /// Request counters and latency histograms. The instrumentation
    /// layer writes, `/metrics` reads.
    pub metrics: Arc<metrics::MetricsRegistry>,
}

/// Anything that stops the service from coming up.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("metric registration failed: {0}")]
    Metrics(#[from] prometheus::Error),

    #[error("cannot listen on {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },

    #[error("server exited with error: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run(config::ServiceConfig::default()).await {
        tracing::error!(error = %e, "image service failed");
        std::process::exit(1);
    }
}

async fn run(config: config::ServiceConfig) -> Result<(), StartupError> {
    // ── 1. Metrics ───────────────────────────────────────────────
    let metrics = Arc::new(metrics::MetricsRegistry::new()?);

    // ── 2. Shared state + router ─────────────────────────────────
    let addr = config.listen_addr;
    let state = Arc::new(AppState { config, metrics });
    let app = server::create_router(state);

    // ── 3. Bind & serve ──────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!(%addr, "image service listening on port {}", addr.port());

    axum::serve(listener, app)
        .await
        .map_err(StartupError::Serve)
}
