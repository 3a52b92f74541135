//! Upload directory handling and on-disk naming.
//!
//! The filesystem is the only record of what has been uploaded: one file
//! per upload, named `<unix_seconds>_<client_filename>`. Two uploads of the
//! same name within the same second map to the same path and the later
//! writer wins.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

/// Make sure `dir` exists, creating it and any parents if needed.
///
/// Returns `true` when this call found the directory missing and created it.
/// The check and the create are not atomic. Racing callers still succeed
/// because recursive creation accepts a directory that already exists.
/// A path that cannot be looked up (missing, or a parent that is not a
/// directory) goes to the create step, which reports the real error.
pub async fn ensure_upload_dir(dir: &Path) -> io::Result<bool> {
    if fs::metadata(dir).await.is_ok() {
        return Ok(false);
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(0o777);
    builder.create(dir).await?;
    Ok(true)
}

/// Strip any directory components a client put in its filename.
///
/// Returns `None` when nothing usable is left.
pub fn client_file_name(raw: &str) -> Option<String> {
    let base = raw.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or_default();
    match base {
        "" | "." | ".." => None,
        name => Some(name.to_owned()),
    }
}

/// `<unix_seconds>_<original>`, the name a file is stored under.
pub fn stored_file_name(unix_secs: i64, original: &str) -> String {
    format!("{unix_secs}_{original}")
}

/// Stored name for an upload arriving now.
pub fn timestamped_file_name(original: &str) -> String {
    stored_file_name(chrono::Utc::now().timestamp(), original)
}

/// Full destination path inside the upload directory.
pub fn destination(dir: &Path, stored_name: &str) -> PathBuf {
    dir.join(stored_name)
}
