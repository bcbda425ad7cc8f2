//! Microphone capture via cpal, finalized to the configured codec.
//!
//! Capture runs at the device's native rate and channel count; the stream
//! callback averages channels down to mono. On stop the samples are
//! written as PCM WAV and, for lossy codecs, re-encoded by ffmpeg at the
//! configured sample rate and bitrate.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use hound::WavWriter;
use parking_lot::Mutex;

use note_capture_core::{
    AudioCodec, CaptureError, RecorderConfig, RecorderHandle, RecorderProvider,
};

use crate::encoder;

/// Opens cpal-backed recorder handles on the default or a named input
/// device.
pub struct CpalRecorderProvider {
    device_name: String,
}

impl CpalRecorderProvider {
    /// `device_name` is a cpal device name, or `"default"` for the system
    /// default input.
    pub fn new(device_name: impl Into<String>) -> Self {
        Self {
            device_name: device_name.into(),
        }
    }
}

impl Default for CpalRecorderProvider {
    fn default() -> Self {
        Self::new("default")
    }
}

impl RecorderProvider for CpalRecorderProvider {
    fn open(
        &self,
        path: &Path,
        config: &RecorderConfig,
    ) -> Result<Box<dyn RecorderHandle>, CaptureError> {
        config.validate().map_err(CaptureError::RecorderOpen)?;
        Ok(Box::new(CpalRecorderHandle {
            device_name: self.device_name.clone(),
            target: path.to_path_buf(),
            config: config.clone(),
            samples: Arc::new(Mutex::new(Vec::new())),
            capture_rate: 0,
            stream: None,
            finalized: false,
        }))
    }
}

/// One in-progress encode-to-file operation.
///
/// Holds the live `cpal::Stream`, which ties the handle to the thread it
/// was started on.
pub struct CpalRecorderHandle {
    device_name: String,
    target: PathBuf,
    config: RecorderConfig,
    /// Mono i16 PCM at the device's native rate, shared with the stream
    /// callback.
    samples: Arc<Mutex<Vec<i16>>>,
    capture_rate: u32,
    stream: Option<cpal::Stream>,
    finalized: bool,
}

impl RecorderHandle for CpalRecorderHandle {
    fn start(&mut self) -> Result<(), CaptureError> {
        let host = cpal::default_host();
        let device = if self.device_name == "default" {
            host.default_input_device()
                .ok_or(CaptureError::DeviceNotAvailable)?
        } else {
            find_device_by_name(&host, &self.device_name)?
        };

        let device_config = device.default_input_config().map_err(|e| {
            CaptureError::RecorderOpen(format!("failed to read input config: {}", e))
        })?;
        let channels = device_config.channels() as usize;
        self.capture_rate = device_config.sample_rate().0;

        if self.capture_rate != self.config.sample_rate {
            log::debug!(
                "device records at {} Hz; target rate {} Hz applied at encode time",
                self.capture_rate,
                self.config.sample_rate
            );
        }

        let sample_format = device_config.sample_format();
        let stream_config: cpal::StreamConfig = device_config.into();

        let stream = match sample_format {
            cpal::SampleFormat::I16 => {
                let samples = Arc::clone(&self.samples);
                device.build_input_stream(
                    &stream_config,
                    move |data: &[i16], _: &cpal::InputCallbackInfo| {
                        push_mono_i16(data, &samples, channels);
                    },
                    |err| log::error!("audio stream error: {}", err),
                    None,
                )
            }
            cpal::SampleFormat::F32 => {
                let samples = Arc::clone(&self.samples);
                device.build_input_stream(
                    &stream_config,
                    move |data: &[f32], _: &cpal::InputCallbackInfo| {
                        push_mono_f32(data, &samples, channels);
                    },
                    |err| log::error!("audio stream error: {}", err),
                    None,
                )
            }
            other => {
                return Err(CaptureError::RecorderOpen(format!(
                    "unsupported device sample format: {:?}",
                    other
                )))
            }
        }
        .map_err(|e| CaptureError::RecorderOpen(format!("failed to build input stream: {}", e)))?;

        stream
            .play()
            .map_err(|e| CaptureError::RecorderOpen(format!("failed to start stream: {}", e)))?;
        self.stream = Some(stream);

        log::debug!("capture started at {} Hz", self.capture_rate);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), CaptureError> {
        if self.finalized {
            return Ok(());
        }
        self.finalized = true;

        // Dropping the stream releases the device and ends the callbacks.
        self.stream = None;

        let samples = std::mem::take(&mut *self.samples.lock());
        log::debug!(
            "capture stopped: {} samples at {} Hz",
            samples.len(),
            self.capture_rate
        );

        if self.config.codec == AudioCodec::Wav {
            return write_wav(&samples, self.capture_rate, &self.target);
        }

        let temp_wav = std::env::temp_dir().join(format!(
            "note_capture_{}_{}.wav",
            std::process::id(),
            self.target
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        ));
        write_wav(&samples, self.capture_rate, &temp_wav)?;

        let encoded = encoder::encode(&temp_wav, &self.target, &self.config);
        if let Err(e) = fs::remove_file(&temp_wav) {
            log::debug!("failed to remove temp wav: {}", e);
        }
        encoded
    }
}

impl Drop for CpalRecorderHandle {
    fn drop(&mut self) {
        // An unfinalized handle still releases the device; the target
        // file is simply never produced.
        self.stream = None;
    }
}

/// Append device samples to the mono buffer, averaging channels.
fn push_mono_i16(data: &[i16], samples: &Mutex<Vec<i16>>, channels: usize) {
    let mut samples = samples.lock();
    match channels {
        0 => {}
        1 => samples.extend_from_slice(data),
        n => {
            for frame in data.chunks_exact(n) {
                let sum: i32 = frame.iter().map(|&s| s as i32).sum();
                samples.push((sum / n as i32) as i16);
            }
        }
    }
}

fn push_mono_f32(data: &[f32], samples: &Mutex<Vec<i16>>, channels: usize) {
    if channels == 0 {
        return;
    }
    let mut samples = samples.lock();
    for frame in data.chunks_exact(channels) {
        let avg = frame.iter().sum::<f32>() / channels as f32;
        samples.push((avg.clamp(-1.0, 1.0) * i16::MAX as f32) as i16);
    }
}

fn write_wav(samples: &[i16], sample_rate: u32, path: &Path) -> Result<(), CaptureError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)
        .map_err(|e| CaptureError::Storage(format!("failed to create {}: {}", path.display(), e)))?;
    for &sample in samples {
        writer
            .write_sample(sample)
            .map_err(|e| CaptureError::Storage(format!("failed to write sample: {}", e)))?;
    }
    writer
        .finalize()
        .map_err(|e| CaptureError::Storage(format!("failed to finalize wav: {}", e)))?;
    Ok(())
}

fn find_device_by_name(host: &cpal::Host, name: &str) -> Result<cpal::Device, CaptureError> {
    let devices = host
        .input_devices()
        .map_err(|e| CaptureError::RecorderOpen(format!("failed to enumerate devices: {}", e)))?;
    for device in devices {
        if device.name().map(|n| n == name).unwrap_or(false) {
            return Ok(device);
        }
    }
    Err(CaptureError::RecorderOpen(format!(
        "audio input device '{}' not found",
        name
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stereo_i16_frames_average_to_mono() {
        let samples = Mutex::new(Vec::new());
        push_mono_i16(&[100, 300, -50, 50], &samples, 2);
        assert_eq!(*samples.lock(), vec![200, 0]);
    }

    #[test]
    fn f32_frames_convert_to_i16_range() {
        let samples = Mutex::new(Vec::new());
        push_mono_f32(&[1.0, 1.0, -1.0, -1.0, 0.0, 0.0], &samples, 2);

        let captured = samples.lock();
        assert_eq!(captured.len(), 3);
        assert_eq!(captured[0], i16::MAX);
        assert_eq!(captured[1], -i16::MAX);
        assert_eq!(captured[2], 0);
    }

    #[test]
    fn written_wav_has_requested_rate() {
        let path = std::env::temp_dir().join(format!("note_capture_test_{}.wav", uuid::Uuid::new_v4()));
        write_wav(&[0i16; 1200], 12_000, &path).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().sample_rate, 12_000);
        assert_eq!(reader.spec().channels, 1);
        assert_eq!(reader.duration(), 1200);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn provider_rejects_invalid_config() {
        let provider = CpalRecorderProvider::default();
        let bad = RecorderConfig {
            channels: 5,
            ..Default::default()
        };
        assert!(provider.open(Path::new("/tmp/x.m4a"), &bad).is_err());
    }
}
