use std::fs;
use std::path::Path;

use crate::models::error::CaptureError;
use crate::models::note::NoteItem;

/// Write the note list as a pretty-printed JSON file.
pub fn save_notes(notes: &[NoteItem], path: &Path) -> Result<(), CaptureError> {
    let json = serde_json::to_string_pretty(notes)
        .map_err(|e| CaptureError::Storage(format!("failed to serialize notes: {}", e)))?;
    fs::write(path, json)
        .map_err(|e| CaptureError::Storage(format!("failed to write notes: {}", e)))?;
    Ok(())
}

/// Read a note list previously written by [`save_notes`].
pub fn load_notes(path: &Path) -> Result<Vec<NoteItem>, CaptureError> {
    let json = fs::read_to_string(path)
        .map_err(|e| CaptureError::Storage(format!("failed to read notes: {}", e)))?;
    let notes: Vec<NoteItem> = serde_json::from_str(&json)
        .map_err(|e| CaptureError::Storage(format!("failed to parse notes: {}", e)))?;
    Ok(notes)
}
