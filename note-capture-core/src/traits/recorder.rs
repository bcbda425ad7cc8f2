use std::path::Path;

use crate::models::config::RecorderConfig;
use crate::models::error::CaptureError;

/// A live encode-to-file operation.
///
/// Handles are bound to the UI thread (platform recorder objects are not
/// thread-safe), so this trait deliberately has no `Send` bound. A handle
/// that is dropped without `stop` must release its device resources, but
/// the resulting file contents are then unspecified.
pub trait RecorderHandle {
    /// Begin capturing to the target file.
    fn start(&mut self) -> Result<(), CaptureError>;

    /// Finalize and flush the target file, then release the device.
    ///
    /// Idempotent: a second call is a no-op.
    fn stop(&mut self) -> Result<(), CaptureError>;
}

/// Factory for recorder handles, implemented by platform backends.
pub trait RecorderProvider {
    /// Open a new capture resource targeting `path` with the given
    /// encoding configuration. Does not begin capturing.
    fn open(
        &self,
        path: &Path,
        config: &RecorderConfig,
    ) -> Result<Box<dyn RecorderHandle>, CaptureError>;
}
