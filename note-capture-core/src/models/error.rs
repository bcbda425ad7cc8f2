use thiserror::Error;

/// Errors that can occur during note capture and presentation.
///
/// Nothing here is fatal. Capability and recorder-open failures leave the
/// session idle; metadata failures after a successful stop only suppress
/// note creation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaptureError {
    #[error("audio session unavailable: {0}")]
    AudioSession(String),

    #[error("no audio input device available")]
    DeviceNotAvailable,

    #[error("recorder failed to open: {0}")]
    RecorderOpen(String),

    #[error("a recording is already in progress")]
    AlreadyRecording,

    #[error("encoding failed: {0}")]
    Encoding(String),

    #[error("metadata read failed: {0}")]
    MetadataRead(String),

    #[error("storage error: {0}")]
    Storage(String),
}
