//! Text classification for the capture path.

use regex::Regex;
use std::sync::OnceLock;

use crate::shared::types::EntryKind;

static LINK_PATTERN: OnceLock<Regex> = OnceLock::new();

fn link_pattern() -> &'static Regex {
    LINK_PATTERN.get_or_init(|| {
        // Scheme or www-prefixed host, anchored to the whole value
        Regex::new(r"^(?:https?://|ftp://|www\.)[^\s]+$").expect("Invalid link regex")
    })
}

/// Classify captured text: a value with no whitespace that matches the link
/// pattern end to end is a URL; everything else stays plain text. This is a
/// heuristic, not URL grammar validation.
pub fn classify_text(text: &str) -> EntryKind {
    if !text.contains(char::is_whitespace) && link_pattern().is_match(text) {
        EntryKind::Url
    } else {
        EntryKind::Text
    }
}
