//! Duration probing for finalized media files.

use std::path::Path;
use std::process::Command;

use note_capture_core::{CaptureError, MediaProbe};

/// Reads media duration from file metadata: WAV headers directly via
/// `hound`, everything else through `ffprobe`.
#[derive(Default)]
pub struct MediaDurationProbe;

impl MediaDurationProbe {
    pub fn new() -> Self {
        Self
    }
}

impl MediaProbe for MediaDurationProbe {
    fn read_duration(&self, file: &Path) -> Result<f64, CaptureError> {
        match file.extension().and_then(|e| e.to_str()) {
            Some("wav") => wav_duration(file),
            _ => ffprobe_duration(file),
        }
    }
}

fn wav_duration(file: &Path) -> Result<f64, CaptureError> {
    let reader = hound::WavReader::open(file)
        .map_err(|e| CaptureError::MetadataRead(format!("{}: {}", file.display(), e)))?;
    let spec = reader.spec();
    Ok(reader.duration() as f64 / spec.sample_rate as f64)
}

fn ffprobe_duration(file: &Path) -> Result<f64, CaptureError> {
    let output = Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-show_entries",
            "format=duration",
            "-of",
            "default=noprint_wrappers=1:nokey=1",
        ])
        .arg(file)
        .output()
        .map_err(|e| CaptureError::MetadataRead(format!("failed to run ffprobe: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CaptureError::MetadataRead(format!(
            "ffprobe failed for {}: {}",
            file.display(),
            stderr.trim()
        )));
    }

    let text = String::from_utf8_lossy(&output.stdout);
    let duration: f64 = text
        .trim()
        .parse()
        .map_err(|e| CaptureError::MetadataRead(format!("unparseable duration: {}", e)))?;

    if duration.is_finite() && duration >= 0.0 {
        Ok(duration)
    } else {
        Err(CaptureError::MetadataRead(format!(
            "invalid duration {} for {}",
            duration,
            file.display()
        )))
    }
}
