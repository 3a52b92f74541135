use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_mw,
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::handlers;
use crate::metrics::exposition;
use crate::middleware::instrument;
use crate::AppState;

/// Builds the full Axum `Router` with all routes, instrumentation, and static serving.
pub fn create_router(state: Arc<AppState>) -> Router {
    let instrumented = Router::new()
        // ── Health / readiness ──────────────────────────────────
        .route("/", any(handlers::status::root))
        .route("/images", any(handlers::status::images_ready))
        // ── Upload (no body size cap) ───────────────────────────
        .route(
            "/images/upload",
            any(handlers::upload::upload_image).layer(DefaultBodyLimit::disable()),
        )
        // ── Stored files ────────────────────────────────────────
        .nest_service("/uploads", ServeDir::new(&state.config.upload_dir))
        // ── Unknown paths answer like "/" ───────────────────────
        .fallback(handlers::status::root)
        // ── Applied to everything registered above ──────────────
        .layer(axum_mw::from_fn_with_state(
            state.clone(),
            instrument::instrument_middleware,
        ));

    Router::new()
        .route("/metrics", get(exposition::get_metrics))
        .merge(instrumented)
        .with_state(state)
}
