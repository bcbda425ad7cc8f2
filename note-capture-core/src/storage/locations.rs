use std::fs;
use std::path::PathBuf;

use crate::models::error::CaptureError;
use crate::traits::storage_resolver::StorageResolver;

/// Resolves the app-private documents directory for captured media.
///
/// Uses the platform documents folder when present, falling back to the
/// local data directory (headless Linux sessions often have no XDG
/// documents entry).
pub struct DocumentsDirResolver {
    app_name: String,
}

impl DocumentsDirResolver {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl StorageResolver for DocumentsDirResolver {
    fn documents_dir(&self) -> Result<PathBuf, CaptureError> {
        let base = dirs::document_dir()
            .or_else(dirs::data_local_dir)
            .ok_or_else(|| {
                CaptureError::Storage("no documents directory on this platform".into())
            })?;
        let dir = base.join(&self.app_name);
        fs::create_dir_all(&dir).map_err(|e| {
            CaptureError::Storage(format!("failed to create {}: {}", dir.display(), e))
        })?;
        Ok(dir)
    }
}
