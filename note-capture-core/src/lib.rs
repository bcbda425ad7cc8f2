//! # note-capture-core
//!
//! Platform-agnostic core of a note-taking capture stack.
//!
//! Owns the audio recording session lifecycle and the full-screen media
//! presentation dispatch. Platform backends implement the trait seams
//! (capability acquisition, recorder handles, duration probing, playback
//! surfaces) and plug into the generic controller and presenter.
//!
//! ## Architecture
//!
//! ```text
//! note-capture-core (this crate)
//! ├── traits/      ← AudioCapabilityProvider, RecorderProvider, MediaProbe,
//! │                  StorageResolver, SessionDelegate, PlaybackSurface
//! ├── models/      ← NoteItem, NotePayload, RecorderConfig, RecordingState,
//! │                  CaptureError
//! ├── session/     ← RecordingController (start/stop lifecycle)
//! ├── presenter/   ← FullScreenPresenter, PhotoView, VideoView
//! └── storage/     ← documents-dir resolver, JSON note persistence
//! ```
//!
//! Everything runs on the UI thread in response to discrete user actions;
//! there is no background worker pool in this crate.

pub mod collection;
pub mod models;
pub mod presenter;
pub mod session;
pub mod storage;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use collection::NoteCollection;
pub use models::config::{AudioCodec, EncoderQuality, RecorderConfig};
pub use models::error::CaptureError;
pub use models::note::{NoteItem, NotePayload};
pub use models::state::RecordingState;
pub use presenter::full_screen::{FullScreenPresenter, MediaContent, PresentationBinding};
pub use presenter::photo::{PhotoView, ZoomState};
pub use presenter::video::VideoView;
pub use session::recording_controller::RecordingController;
pub use storage::locations::DocumentsDirResolver;
pub use traits::audio_capability::{AudioCapability, AudioCapabilityProvider, CaptureMode};
pub use traits::media_probe::MediaProbe;
pub use traits::playback::{PlaybackHandle, PlaybackSurface};
pub use traits::recorder::{RecorderHandle, RecorderProvider};
pub use traits::session_delegate::SessionDelegate;
pub use traits::storage_resolver::StorageResolver;
