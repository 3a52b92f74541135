pub mod status;
pub mod upload;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

// ─── Unified error type ──────────────────────────────────────────

/// Everything a handler can fail with. Bodies are plain text.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Only POST is allowed")]
    MethodNotAllowed,

    #[error("Error reading file: {0}")]
    Form(String),

    #[error("Error creating upload directory: {0}")]
    CreateDir(#[source] std::io::Error),

    #[error("Error saving file: {0}")]
    CreateFile(#[source] std::io::Error),

    #[error("Error writing file to disk: {0}")]
    WriteFile(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Form(_) => StatusCode::BAD_REQUEST,
            Self::CreateDir(_) | Self::CreateFile(_) | Self::WriteFile(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
