use std::path::PathBuf;

use crate::models::error::CaptureError;

/// Resolves the private persistent-storage area where recordings land.
pub trait StorageResolver {
    /// Base directory for captured media files. The directory exists when
    /// this returns `Ok`.
    fn documents_dir(&self) -> Result<PathBuf, CaptureError>;
}
