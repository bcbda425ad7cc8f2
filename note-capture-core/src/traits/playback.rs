use std::path::Path;

/// Transport controls of a platform media player.
///
/// Playback stops implicitly when the handle is dropped; the presenter
/// performs no explicit cleanup on dismiss.
pub trait PlaybackHandle {
    fn play(&mut self);
    fn pause(&mut self);
    /// Seek to an absolute position in seconds.
    fn seek(&mut self, position_secs: f64);
    /// Set output volume in `0.0..=1.0`.
    fn set_volume(&mut self, volume: f32);
    fn is_playing(&self) -> bool;
}

/// Platform-provided player surface.
///
/// Construction is infallible: platform players accept any file reference
/// and surface failures during playback, not at open time.
pub trait PlaybackSurface {
    fn open(&self, file: &Path) -> Box<dyn PlaybackHandle>;
}
