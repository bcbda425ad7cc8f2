use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tagged payload of a note.
///
/// Every consumption site matches exhaustively on this enum so a new
/// variant is a compile error at each dispatch point, not a silent
/// empty render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NotePayload {
    Text {
        content: String,
    },
    Photo {
        file: PathBuf,
    },
    Video {
        file: PathBuf,
        duration_secs: f64,
    },
    Audio {
        file: PathBuf,
        duration_secs: f64,
    },
}

impl NotePayload {
    /// The backing media file, if this variant has one.
    pub fn media_file(&self) -> Option<&Path> {
        match self {
            Self::Text { .. } => None,
            Self::Photo { file } | Self::Video { file, .. } | Self::Audio { file, .. } => {
                Some(file)
            }
        }
    }
}

/// A single note in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteItem {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub payload: NotePayload,
}

impl NoteItem {
    pub fn new(payload: NotePayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            payload,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(NotePayload::Text {
            content: content.into(),
        })
    }

    pub fn photo(file: impl Into<PathBuf>) -> Self {
        Self::new(NotePayload::Photo { file: file.into() })
    }

    pub fn video(file: impl Into<PathBuf>, duration_secs: f64) -> Self {
        Self::new(NotePayload::Video {
            file: file.into(),
            duration_secs,
        })
    }

    pub fn audio(file: impl Into<PathBuf>, duration_secs: f64) -> Self {
        Self::new(NotePayload::Audio {
            file: file.into(),
            duration_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_note_serializes_with_type_tag() {
        let note = NoteItem::audio("/tmp/clip.m4a", 3.5);
        let json = serde_json::to_string(&note).unwrap();
        assert!(json.contains("\"type\":\"audio\""));

        let back: NoteItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, note);
    }

    #[test]
    fn media_file_is_none_for_text() {
        assert!(NoteItem::text("groceries").payload.media_file().is_none());
        assert!(NoteItem::photo("/tmp/p.png").payload.media_file().is_some());
    }

    #[test]
    fn fresh_notes_get_distinct_ids() {
        let a = NoteItem::text("a");
        let b = NoteItem::text("b");
        assert_ne!(a.id, b.id);
    }
}
