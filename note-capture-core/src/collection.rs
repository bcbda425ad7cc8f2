use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use uuid::Uuid;

use crate::models::error::CaptureError;
use crate::models::note::{NoteItem, NotePayload};
use crate::storage::persistence;

/// Reference note collection: an ordered, interior-mutexed note list with
/// JSON persistence.
///
/// The recording session and the presenter only see this through their
/// trait seams; apps with their own store can ignore it entirely.
#[derive(Default)]
pub struct NoteCollection {
    notes: Mutex<Vec<NoteItem>>,
}

impl NoteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.lock().is_empty()
    }

    /// Snapshot of the current notes, newest last.
    pub fn notes(&self) -> Vec<NoteItem> {
        self.notes.lock().clone()
    }

    /// Append a prebuilt note, returning it for further use.
    pub fn add(&self, note: NoteItem) -> NoteItem {
        self.notes.lock().push(note.clone());
        note
    }

    pub fn add_text_note(&self, content: impl Into<String>) -> NoteItem {
        self.add(NoteItem::text(content))
    }

    pub fn add_photo_note(&self, file: impl Into<PathBuf>) -> NoteItem {
        self.add(NoteItem::photo(file))
    }

    pub fn add_video_note(&self, file: impl Into<PathBuf>, duration_secs: f64) -> NoteItem {
        self.add(NoteItem::video(file, duration_secs))
    }

    pub fn add_audio_note(&self, file: impl Into<PathBuf>, duration_secs: f64) -> NoteItem {
        self.add(NoteItem::audio(file, duration_secs))
    }

    /// Remove a note by id. Returns whether a note was removed.
    pub fn delete_note(&self, id: Uuid) -> bool {
        let mut notes = self.notes.lock();
        let before = notes.len();
        notes.retain(|n| n.id != id);
        notes.len() != before
    }

    pub fn save_to(&self, path: &Path) -> Result<(), CaptureError> {
        persistence::save_notes(&self.notes.lock(), path)
    }

    pub fn load_from(path: &Path) -> Result<Self, CaptureError> {
        Ok(Self {
            notes: Mutex::new(persistence::load_notes(path)?),
        })
    }

    /// Media files referenced by the current notes, for cleanup sweeps.
    pub fn media_files(&self) -> Vec<PathBuf> {
        self.notes
            .lock()
            .iter()
            .filter_map(|n| match &n.payload {
                NotePayload::Text { .. } => None,
                NotePayload::Photo { file }
                | NotePayload::Video { file, .. }
                | NotePayload::Audio { file, .. } => Some(file.clone()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_delete() {
        let collection = NoteCollection::new();
        assert!(collection.is_empty());

        let note = collection.add_audio_note("/tmp/a.m4a", 3.0);
        collection.add_text_note("keep me");
        assert_eq!(collection.len(), 2);

        assert!(collection.delete_note(note.id));
        assert!(!collection.delete_note(note.id));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn add_returns_the_stored_note() {
        let collection = NoteCollection::new();
        let note = collection.add(NoteItem::photo("/tmp/p.png"));

        assert_eq!(collection.notes(), vec![note]);
    }

    #[test]
    fn media_files_skip_text_notes() {
        let collection = NoteCollection::new();
        collection.add_text_note("plain");
        collection.add(NoteItem::photo("/tmp/p.png"));
        collection.add_video_note("/tmp/v.mp4", 8.0);

        let files = collection.media_files();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn save_then_load_preserves_order() {
        let path = std::env::temp_dir().join("note_capture_test_collection.json");

        let collection = NoteCollection::new();
        collection.add_text_note("first");
        collection.add_audio_note("/tmp/a.m4a", 1.5);
        collection.save_to(&path).unwrap();

        let loaded = NoteCollection::load_from(&path).unwrap();
        assert_eq!(loaded.notes(), collection.notes());

        std::fs::remove_file(&path).ok();
    }
}
