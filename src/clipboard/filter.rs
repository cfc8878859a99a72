//! Read-only filters the UI layer applies over a history snapshot.
//!
//! Filters never mutate or persist anything; they narrow the view of the
//! current list.

use crate::shared::types::{ClipboardEntry, EntryKind};

/// Case-insensitive substring match over entry previews, combined with an
/// optional kind filter. An empty or absent query matches everything.
pub fn filter_entries(
    entries: &[ClipboardEntry],
    query: Option<&str>,
    kind: Option<EntryKind>,
) -> Vec<ClipboardEntry> {
    let needle = query
        .map(str::to_lowercase)
        .filter(|q| !q.is_empty());

    entries
        .iter()
        .filter(|entry| kind.map_or(true, |k| entry.kind == k))
        .filter(|entry| match &needle {
            Some(q) => entry.preview.to_lowercase().contains(q.as_str()),
            None => true,
        })
        .cloned()
        .collect()
}
