use std::net::SocketAddr;
use std::path::PathBuf;

/// Port the service has always listened on.
pub const DEFAULT_PORT: u16 = 8082;

/// Directory (relative to the working directory) holding uploaded files.
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Placeholder host used when building links to stored images.
pub const DEFAULT_PUBLIC_BASE_URL: &str = "https://images.local";

/// Runtime settings for the service.
///
/// There is no config file or environment lookup; `Default` carries the
/// fixed values and tests override individual fields.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub listen_addr: SocketAddr,
    pub upload_dir: PathBuf,
    /// Prefix for the `image_url` returned after an upload. Not derived
    /// from the request's Host header.
    pub public_base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            public_base_url: DEFAULT_PUBLIC_BASE_URL.to_owned(),
        }
    }
}

impl ServiceConfig {
    /// Public link for a stored file, e.g. `https://images.local/uploads/1700000000_cat.png`.
    pub fn image_url(&self, filename: &str) -> String {
        let base = self.public_base_url.trim_end_matches('/');
        format!("{base}/uploads/{filename}")
    }
}
