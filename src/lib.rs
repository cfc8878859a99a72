//! Clipboard history engine.
//!
//! Polls the platform pasteboard for changes, classifies captured content
//! (text, image, file list, URL), deduplicates against the newest entry and
//! keeps a bounded most-recent-first history persisted through a key-value
//! storage backend. Presentation, hotkeys and paste injection live outside
//! this crate; the UI layer consumes snapshots and the change hook.

pub mod clipboard;
pub mod settings;
pub mod shared;
pub mod storage;
pub mod system;

pub use clipboard::monitor::{ClipboardMonitor, ScheduleHandle, Scheduler, TokioScheduler};
pub use clipboard::pasteboard::{Pasteboard, PasteboardImage};
pub use clipboard::store::{ClipboardHistoryStore, Clock, SystemClock};
pub use settings::HistorySettings;
pub use shared::errors::{HistoryError, HistoryResult};
pub use shared::types::{ClipboardEntry, EntryKind};
pub use storage::{InMemoryStorage, RedbStorage, Storage};
pub use system::{NoSourceApp, SourceAppProvider};
