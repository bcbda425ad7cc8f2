use std::path::Path;

use crate::models::error::CaptureError;

/// Reads playback duration from a finalized media file's metadata.
///
/// Local file I/O only; expected to resolve quickly.
pub trait MediaProbe {
    /// Duration of the media at `file`, in seconds.
    fn read_duration(&self, file: &Path) -> Result<f64, CaptureError>;
}
