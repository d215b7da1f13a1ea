//! Icon store for link type images.
//!
//! Icons live flat in a single directory, keyed by their original upload
//! filename. Writes overwrite silently (last writer wins) and are not
//! atomic. There is no delete: icons outlive the link types that pointed
//! at them.

use std::path::{Path, PathBuf};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Content types accepted for icon uploads.
pub const ALLOWED_ICON_CONTENT_TYPES: &[&str] =
    &["image/png", "image/jpeg", "image/bmp", "image/svg+xml"];

/// Default icon directory, relative to the working directory.
pub const DEFAULT_ICON_DIR: &str = "tmp/links_icons";

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Reject any declared content type outside [`ALLOWED_ICON_CONTENT_TYPES`].
pub fn validate_content_type(content_type: &str) -> Result<(), CoreError> {
    if ALLOWED_ICON_CONTENT_TYPES.contains(&content_type) {
        Ok(())
    } else {
        Err(CoreError::UnsupportedMediaType {
            content_type: content_type.to_string(),
            allowed: ALLOWED_ICON_CONTENT_TYPES.join(", "),
        })
    }
}

/// Reject filenames that would escape the flat icon directory.
pub fn validate_filename(filename: &str) -> Result<(), CoreError> {
    let bad = filename.is_empty()
        || filename == "."
        || filename == ".."
        || filename.contains('/')
        || filename.contains('\\')
        || filename.contains('\0');
    if bad {
        return Err(CoreError::Validation(format!(
            "Invalid icon filename '{filename}'"
        )));
    }
    Ok(())
}

/// Response content type for a stored icon, inferred from its extension.
pub fn content_type_for(filename: &str) -> &'static str {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Filesystem-backed icon storage rooted at a single directory.
#[derive(Debug, Clone)]
pub struct IconStore {
    root: PathBuf,
}

impl IconStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path an icon with this filename is (or would be) stored at.
    ///
    /// No existence check is made.
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    /// Validate and write an uploaded icon, returning the stored filename.
    ///
    /// The directory is created on first use. An existing file with the same
    /// name is overwritten.
    pub async fn store(
        &self,
        filename: &str,
        content_type: &str,
        data: &[u8],
    ) -> Result<String, CoreError> {
        validate_content_type(content_type)?;
        validate_filename(filename)?;

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| CoreError::Internal(e.to_string()))?;

        let path = self.path_for(filename);
        tokio::fs::write(&path, data)
            .await
            .map_err(|e| CoreError::Internal(e.to_string()))?;

        tracing::debug!(filename, bytes = data.len(), "Stored icon");
        Ok(filename.to_string())
    }

    /// Confirm the icon directory exists (creating it if needed) and accepts
    /// writes.
    pub async fn check_writable(&self) -> Result<(), CoreError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| CoreError::Internal(e.to_string()))?;

        let metadata = tokio::fs::metadata(&self.root)
            .await
            .map_err(|e| CoreError::Internal(e.to_string()))?;
        if !metadata.is_dir() || metadata.permissions().readonly() {
            return Err(CoreError::Internal(format!(
                "Icon directory {} is not writable",
                self.root.display()
            )));
        }
        Ok(())
    }

    /// Read back a stored icon.
    pub async fn retrieve(&self, filename: &str) -> Result<Vec<u8>, CoreError> {
        validate_filename(filename)?;
        match tokio::fs::read(self.path_for(filename)).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(CoreError::FileNotFound(filename.to_string()))
            }
            Err(e) => Err(CoreError::Internal(e.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
