use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use std::time::Instant;

use crate::metrics::Sample;
use crate::AppState;

/// Records `http_requests_total` and `http_request_duration_seconds`
/// for every request passing through it.
///
/// The path label is the request path as received and the method label
/// is the request's own method. The status is read off the finished
/// response; a handler that never picks one produces 200. The response
/// itself is passed through untouched.
pub async fn instrument_middleware(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    let start = Instant::now();
    let response = next.run(req).await;
    let elapsed = start.elapsed();

    let status = response.status().as_u16();
    tracing::debug!(
        status,
        method = %method,
        path = %path,
        elapsed_us = elapsed.as_micros() as u64,
        "request finished"
    );

    state.metrics.record(&Sample {
        path,
        method,
        status,
        elapsed_secs: elapsed.as_secs_f64(),
    });

    response
}
