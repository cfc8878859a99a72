//! Clipboard engine
//!
//! - `store`: history with deduplication, bounded retention and persistence
//! - `monitor`: periodic polling driver and scheduler abstraction
//! - `pasteboard`: platform pasteboard trait
//! - `classify`: text/URL classification for the capture path
//! - `filter`: read-only search and kind filters for the UI layer

pub mod classify;
pub mod filter;
pub mod monitor;
pub mod pasteboard;
pub mod store;

pub use monitor::ClipboardMonitor;
pub use pasteboard::{Pasteboard, PasteboardImage};
pub use store::ClipboardHistoryStore;
