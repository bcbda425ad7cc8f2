//! Lossy encoding of finalized PCM captures via an ffmpeg subprocess.

use std::path::{Path, PathBuf};
use std::process::Command;

use note_capture_core::{AudioCodec, CaptureError, EncoderQuality, RecorderConfig};

/// Locate the ffmpeg binary: `PATH` first, then common install locations.
pub fn find_ffmpeg() -> Result<PathBuf, CaptureError> {
    let candidates = [
        "ffmpeg",
        "/usr/bin/ffmpeg",
        "/usr/local/bin/ffmpeg",
        "/opt/homebrew/bin/ffmpeg",
    ];
    for candidate in candidates {
        let found = Command::new(candidate)
            .arg("-version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false);
        if found {
            return Ok(PathBuf::from(candidate));
        }
    }
    Err(CaptureError::Encoding("ffmpeg not found on this system".into()))
}

/// Bitrate for a quality tier at voice sample rates.
fn bitrate_kbps(quality: EncoderQuality) -> u32 {
    match quality {
        EncoderQuality::Low => 32,
        EncoderQuality::Medium => 64,
        EncoderQuality::High => 96,
    }
}

fn codec_name(codec: AudioCodec) -> &'static str {
    match codec {
        AudioCodec::Aac => "aac",
        AudioCodec::Mp3 => "libmp3lame",
        AudioCodec::Wav => "pcm_s16le",
    }
}

/// Build the ffmpeg argument list for one encode. Split out so the
/// mapping from config to arguments is testable without running ffmpeg.
pub fn encode_args(input: &Path, output: &Path, config: &RecorderConfig) -> Vec<String> {
    let mut args = vec![
        "-loglevel".to_string(),
        "error".to_string(),
        "-y".to_string(),
        "-i".to_string(),
        input.to_string_lossy().into_owned(),
        "-acodec".to_string(),
        codec_name(config.codec).to_string(),
        "-ac".to_string(),
        config.channels.to_string(),
        "-ar".to_string(),
        config.sample_rate.to_string(),
    ];
    if config.codec.is_lossy() {
        args.push("-b:a".to_string());
        args.push(format!("{}k", bitrate_kbps(config.quality)));
    }
    args.push(output.to_string_lossy().into_owned());
    args
}

/// Encode `input` (PCM WAV) to `output` per the recorder configuration.
pub fn encode(input: &Path, output: &Path, config: &RecorderConfig) -> Result<(), CaptureError> {
    let ffmpeg = find_ffmpeg()?;

    let result = Command::new(&ffmpeg)
        .args(encode_args(input, output, config))
        .output()
        .map_err(|e| CaptureError::Encoding(format!("failed to run ffmpeg: {}", e)))?;

    if result.status.success() {
        log::debug!("encoded {} to {}", input.display(), output.display());
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&result.stderr);
        Err(CaptureError::Encoding(format!(
            "ffmpeg failed: {}",
            stderr.trim()
        )))
    }
}
