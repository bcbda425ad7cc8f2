//! # note-capture-cpal
//!
//! Cross-platform microphone backend for note-capture-kit.
//!
//! Provides:
//! - `CpalCapabilityProvider` — microphone availability check by probing
//!   the default input device
//! - `CpalRecorderProvider` / `CpalRecorderHandle` — PCM capture via cpal,
//!   finalized to the configured codec (lossy codecs via ffmpeg)
//! - `MediaDurationProbe` — duration from WAV headers or ffprobe
//!
//! ## Usage
//! ```ignore
//! use std::sync::Arc;
//! use note_capture_core::{DocumentsDirResolver, RecorderConfig, RecordingController};
//! use note_capture_cpal::{CpalCapabilityProvider, CpalRecorderProvider, MediaDurationProbe};
//!
//! let mut controller = RecordingController::new(
//!     Arc::new(CpalCapabilityProvider::new()),
//!     Arc::new(CpalRecorderProvider::default()),
//!     Arc::new(MediaDurationProbe::new()),
//!     Arc::new(DocumentsDirResolver::new("my-notes-app")),
//!     delegate,
//!     RecorderConfig::default(),
//! );
//! controller.start_recording()?;
//! ```

pub mod capability;
pub mod encoder;
pub mod probe;
pub mod recorder;

pub use capability::{CpalAudioCapability, CpalCapabilityProvider};
pub use probe::MediaDurationProbe;
pub use recorder::{CpalRecorderHandle, CpalRecorderProvider};
