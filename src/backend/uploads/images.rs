/**
 * Image Storage
 *
 * Post images live as plain files in a single directory, served publicly
 * under `/images`. Stored paths are handed back to clients as
 * `images/<file>` and later passed back to `clear`.
 */

use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Public path prefix of stored images
pub const PUBLIC_PREFIX: &str = "images";

/// Accepted upload content types and the extension stored for each
const ACCEPTED_TYPES: [(&str, &str); 3] = [
    ("image/png", "png"),
    ("image/jpg", "jpg"),
    ("image/jpeg", "jpg"),
];

/// Directory-backed image store
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the image directory if it does not exist
    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await
    }

    /// File extension for an accepted content type, `None` if rejected
    pub fn extension_for(content_type: &str) -> Option<&'static str> {
        ACCEPTED_TYPES
            .iter()
            .find(|(accepted, _)| *accepted == content_type)
            .map(|(_, extension)| *extension)
    }

    /// Write an image under a fresh name and return its public path
    pub async fn save(&self, bytes: &[u8], extension: &str) -> std::io::Result<String> {
        let file_name = format!("{}.{}", Uuid::new_v4(), extension);
        tokio::fs::write(self.dir.join(&file_name), bytes).await?;
        tracing::info!("Stored image {}", file_name);
        Ok(format!("{PUBLIC_PREFIX}/{file_name}"))
    }

    /// Location on disk of a public image path
    ///
    /// Only the final path component is used, so a path can never point
    /// outside the image directory.
    pub fn resolve(&self, public_path: &str) -> Option<PathBuf> {
        Path::new(public_path)
            .file_name()
            .map(|file_name| self.dir.join(file_name))
    }

    /// Delete a previously stored image
    ///
    /// Failures are logged and otherwise ignored.
    pub async fn clear(&self, public_path: &str) {
        if public_path.is_empty() {
            return;
        }
        let Some(path) = self.resolve(public_path) else {
            tracing::warn!("Refusing to clear image path {:?}", public_path);
            return;
        };
        match tokio::fs::remove_file(&path).await {
            Ok(()) => tracing::info!("Cleared image {}", path.display()),
            Err(e) => tracing::warn!("Failed to clear image {}: {}", path.display(), e),
        }
    }
}
