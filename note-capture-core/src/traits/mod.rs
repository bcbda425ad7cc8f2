pub mod audio_capability;
pub mod media_probe;
pub mod playback;
pub mod recorder;
pub mod session_delegate;
pub mod storage_resolver;
