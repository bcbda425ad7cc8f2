use std::path::Path;

/// Outbound events from a recording session to its host.
///
/// `on_audio_note_captured` fires at most once per session, only after a
/// successful stop with a resolvable duration. `request_dismiss` fires
/// exactly once after every stop, whether or not a note was created.
pub trait SessionDelegate {
    /// A finalized recording is ready to be added to the note collection.
    fn on_audio_note_captured(&self, file: &Path, duration_secs: f64);

    /// The hosting screen should navigate away from the recording view.
    fn request_dismiss(&self);
}
