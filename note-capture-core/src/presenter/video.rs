use std::path::Path;

use crate::traits::playback::{PlaybackHandle, PlaybackSurface};

/// Full-screen video content: a platform player bound to the note's file,
/// exposing the standard transport controls.
///
/// Playback stops implicitly when this view is dropped; there is no
/// explicit cleanup on dismiss.
pub struct VideoView {
    player: Box<dyn PlaybackHandle>,
}

impl VideoView {
    pub fn new(surface: &dyn PlaybackSurface, file: &Path) -> Self {
        Self {
            player: surface.open(file),
        }
    }

    pub fn play(&mut self) {
        self.player.play();
    }

    pub fn pause(&mut self) {
        self.player.pause();
    }

    pub fn seek(&mut self, position_secs: f64) {
        self.player.seek(position_secs);
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.player.set_volume(volume);
    }

    pub fn is_playing(&self) -> bool {
        self.player.is_playing()
    }
}
