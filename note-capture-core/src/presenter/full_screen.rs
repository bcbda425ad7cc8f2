use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::models::note::{NoteItem, NotePayload};
use crate::presenter::photo::PhotoView;
use crate::presenter::video::VideoView;
use crate::traits::playback::PlaybackSurface;

/// Shared presented/dismissed flag, owned by the caller.
///
/// The presenter only ever clears it; presenting again is the caller's
/// responsibility.
#[derive(Clone)]
pub struct PresentationBinding(Arc<AtomicBool>);

impl PresentationBinding {
    pub fn new(presented: bool) -> Self {
        Self(Arc::new(AtomicBool::new(presented)))
    }

    pub fn is_presented(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Caller-side: mark the full-screen view presented.
    pub fn present(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Presenter-side: mark the full-screen view dismissed.
    pub fn dismiss(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// What the full-screen surface shows for a given note.
pub enum MediaContent {
    Photo(PhotoView),
    Video(VideoView),
    /// Deliberate empty render for non-media payloads. Named so a new
    /// payload variant forces a decision here instead of falling through.
    Empty,
}

impl MediaContent {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Full-screen media presenter: render dispatch over the note payload plus
/// a single dismiss affordance.
pub struct FullScreenPresenter {
    surface: Arc<dyn PlaybackSurface>,
    binding: PresentationBinding,
}

impl FullScreenPresenter {
    pub fn new(surface: Arc<dyn PlaybackSurface>, binding: PresentationBinding) -> Self {
        Self { surface, binding }
    }

    /// Build the content for `note`. Photo and video payloads get real
    /// content; text and audio payloads render nothing.
    pub fn render(&self, note: &NoteItem) -> MediaContent {
        match &note.payload {
            NotePayload::Photo { file } => MediaContent::Photo(PhotoView::load(file)),
            NotePayload::Video { file, .. } => {
                MediaContent::Video(VideoView::new(self.surface.as_ref(), file))
            }
            NotePayload::Text { .. } | NotePayload::Audio { .. } => MediaContent::Empty,
        }
    }

    /// The dismiss control: clears the externally-owned presentation flag
    /// and nothing else. Content teardown happens when the caller drops
    /// the rendered `MediaContent`.
    pub fn dismiss(&self) {
        self.binding.dismiss();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;
    use std::path::Path;
    use std::rc::Rc;

    use crate::traits::playback::PlaybackHandle;

    struct NullPlayer {
        playing: bool,
    }

    impl PlaybackHandle for NullPlayer {
        fn play(&mut self) {
            self.playing = true;
        }

        fn pause(&mut self) {
            self.playing = false;
        }

        fn seek(&mut self, _position_secs: f64) {}

        fn set_volume(&mut self, _volume: f32) {}

        fn is_playing(&self) -> bool {
            self.playing
        }
    }

    struct CountingSurface {
        opens: Rc<Cell<usize>>,
    }

    impl PlaybackSurface for CountingSurface {
        fn open(&self, _file: &Path) -> Box<dyn PlaybackHandle> {
            self.opens.set(self.opens.get() + 1);
            Box::new(NullPlayer { playing: false })
        }
    }

    fn presenter() -> (FullScreenPresenter, Rc<Cell<usize>>, PresentationBinding) {
        let opens = Rc::new(Cell::new(0));
        let binding = PresentationBinding::new(true);
        let presenter = FullScreenPresenter::new(
            Arc::new(CountingSurface {
                opens: Rc::clone(&opens),
            }),
            binding.clone(),
        );
        (presenter, opens, binding)
    }

    #[test]
    fn text_note_renders_empty_without_constructing_a_player() {
        let (presenter, opens, _) = presenter();

        let content = presenter.render(&NoteItem::text("not media"));
        assert!(content.is_empty());
        assert_eq!(opens.get(), 0);
    }

    #[test]
    fn audio_note_renders_empty() {
        let (presenter, opens, _) = presenter();

        let content = presenter.render(&NoteItem::audio("/tmp/clip.m4a", 4.0));
        assert!(content.is_empty());
        assert_eq!(opens.get(), 0);
    }

    #[test]
    fn photo_note_renders_photo_content() {
        let (presenter, opens, _) = presenter();

        let content = presenter.render(&NoteItem::photo("/nonexistent/p.png"));
        assert!(matches!(content, MediaContent::Photo(_)));
        assert_eq!(opens.get(), 0);
    }

    #[test]
    fn video_note_opens_exactly_one_player() {
        let (presenter, opens, _) = presenter();

        let content = presenter.render(&NoteItem::video("/tmp/v.mp4", 10.0));
        assert!(matches!(content, MediaContent::Video(_)));
        assert_eq!(opens.get(), 1);
    }

    #[test]
    fn video_content_exposes_transport_controls() {
        let (presenter, _, _) = presenter();

        let MediaContent::Video(mut video) = presenter.render(&NoteItem::video("/tmp/v.mp4", 10.0))
        else {
            panic!("expected video content");
        };

        assert!(!video.is_playing());
        video.play();
        assert!(video.is_playing());
        video.pause();
        assert!(!video.is_playing());
    }

    #[test]
    fn dismiss_clears_the_binding_for_any_variant() {
        for note in [
            NoteItem::photo("/tmp/p.png"),
            NoteItem::video("/tmp/v.mp4", 1.0),
            NoteItem::text("plain"),
        ] {
            let (presenter, _, binding) = presenter();
            let _content = presenter.render(&note);

            assert!(binding.is_presented());
            presenter.dismiss();
            assert!(!binding.is_presented());

            // Repeat dismiss stays false; the presenter never re-presents.
            presenter.dismiss();
            assert!(!binding.is_presented());
        }
    }
}
