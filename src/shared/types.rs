use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::errors::HistoryResult;

/// Maximum characters kept in a text preview
const PREVIEW_MAX_CHARS: usize = 200;

/// Type of clipboard content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Text,
    Image,
    FileList,
    Url,
}

/// A single captured clipboard snapshot
///
/// `payload` holds the kind-specific encoding: UTF-8 bytes for text and
/// URLs, PNG bytes for images, a JSON array of absolute paths for file
/// lists. `preview` is derived once at creation and doubles as the dedup
/// comparison key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipboardEntry {
    pub id: String,
    pub kind: EntryKind,
    pub payload: Vec<u8>,
    pub preview: String,
    pub captured_at: DateTime<Utc>,
    pub source_app: Option<String>,
}

impl ClipboardEntry {
    /// Create a text entry. `kind` is passed in so the capture path can
    /// record a URL re-classification while keeping the text encoding.
    pub fn new_text(
        kind: EntryKind,
        text: &str,
        captured_at: DateTime<Utc>,
        source_app: Option<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            payload: text.as_bytes().to_vec(),
            preview: truncate_preview(text),
            captured_at,
            source_app,
        }
    }

    /// Create an image entry from already-encoded PNG bytes.
    pub fn new_image(
        png: Vec<u8>,
        width: u32,
        height: u32,
        captured_at: DateTime<Utc>,
        source_app: Option<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind: EntryKind::Image,
            payload: png,
            preview: format!("Image {}x{}", width, height),
            captured_at,
            source_app,
        }
    }

    /// Create a file-list entry. The payload is the JSON-encoded path list;
    /// the preview joins the file basenames.
    pub fn new_file_list(
        paths: &[String],
        captured_at: DateTime<Utc>,
        source_app: Option<String>,
    ) -> HistoryResult<Self> {
        let payload = serde_json::to_vec(paths)?;
        let preview = paths
            .iter()
            .map(|p| basename(p))
            .collect::<Vec<_>>()
            .join(", ");
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind: EntryKind::FileList,
            payload,
            preview,
            captured_at,
            source_app,
        })
    }
}

/// Truncate text to the preview length at a character boundary.
fn truncate_preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_MAX_CHARS {
        return text.to_string();
    }
    let truncated: String = text.chars().take(PREVIEW_MAX_CHARS).collect();
    format!("{}...", truncated)
}

/// Last path component, falling back to the raw string for odd paths.
fn basename(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
