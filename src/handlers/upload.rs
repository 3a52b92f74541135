use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::Method,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;

use crate::storage;
use crate::AppState;

use super::AppError;

/// Multipart field carrying the file.
pub const IMAGE_FIELD: &str = "image";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub image_url: String,
}

// ─── /images/upload ──────────────────────────────────────────────

/// Stores the `image` part of a multipart body under the upload
/// directory and answers with a link to it.
///
/// Runs straight through: method check, form read, directory, file
/// creation, copy, response. Any failure ends the request on the spot.
/// The whole `image` part is read before the disk is touched, so a
/// broken body never leaves a file behind. A write that fails halfway
/// does.
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    method: Method,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    tracing::info!("received image upload request");

    if method != Method::POST {
        tracing::warn!(%method, "method not allowed");
        return Err(AppError::MethodNotAllowed);
    }

    let mut multipart = multipart.map_err(|e| {
        tracing::warn!(error = %e.body_text(), "error reading file from form");
        AppError::Form(e.body_text())
    })?;

    // ── Locate the file part ────────────────────────────────────
    let (field, original) = loop {
        let field = multipart.next_field().await.map_err(|e| {
            tracing::warn!(error = %e, "error reading file from form");
            AppError::Form(e.body_text())
        })?;
        let Some(field) = field else {
            tracing::warn!("no '{IMAGE_FIELD}' file in form");
            return Err(AppError::Form("no such file".into()));
        };
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        // A plain value under the same name is not a file.
        if let Some(name) = field.file_name().and_then(storage::client_file_name) {
            break (field, name);
        }
    };

    let data = field.bytes().await.map_err(|e| {
        tracing::warn!(error = %e, "error reading file from form");
        AppError::Form(e.body_text())
    })?;

    // ── Directory ───────────────────────────────────────────────
    let dir = &state.config.upload_dir;
    match storage::ensure_upload_dir(dir).await {
        Ok(true) => tracing::info!(dir = %dir.display(), "created uploads directory"),
        Ok(false) => {}
        Err(e) => {
            tracing::error!(dir = %dir.display(), error = %e, "error creating uploads directory");
            return Err(AppError::CreateDir(e));
        }
    }

    // ── Destination file ────────────────────────────────────────
    let filename = storage::timestamped_file_name(&original);
    let path = storage::destination(dir, &filename);
    let mut dst = tokio::fs::File::create(&path).await.map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "error creating file on disk");
        AppError::CreateFile(e)
    })?;

    // ── Copy ────────────────────────────────────────────────────
    let write = async {
        dst.write_all(&data).await?;
        dst.flush().await
    };
    write.await.map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "error writing file to disk");
        AppError::WriteFile(e.to_string())
    })?;

    tracing::info!(bytes = data.len(), path = %path.display(), "image upload processed");

    Ok(Json(UploadResponse {
        image_url: state.config.image_url(&filename),
    }))
}
