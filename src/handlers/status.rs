use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub message: &'static str,
}

// ─── / (and anything unmatched) ──────────────────────────────────

pub async fn root() -> &'static str {
    "Image Service is running!"
}

// ─── /images ─────────────────────────────────────────────────────

pub async fn images_ready() -> Json<ReadyResponse> {
    Json(ReadyResponse {
        message: "Image service is ready to handle images",
    })
}
