//! Clipboard history store: capture, dedup, bounded retention, persistence.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::clipboard::classify::classify_text;
use crate::clipboard::filter::filter_entries;
use crate::clipboard::pasteboard::Pasteboard;
use crate::shared::errors::HistoryResult;
use crate::shared::types::{ClipboardEntry, EntryKind};
use crate::storage::Storage;
use crate::system::SourceAppProvider;

/// Default maximum number of history entries
pub const DEFAULT_MAX_ITEMS: usize = 1000;

/// Storage key holding the serialized entry list
const HISTORY_KEY: &str = "clipboard_history";

/// Wall clock injected into the store so tests control timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// System wall clock
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

type ChangeListener = Box<dyn Fn() + Send + Sync>;

struct Inner {
    entries: Vec<ClipboardEntry>,
    last_change_count: i64,
}

/// In-memory ordered clipboard history with polling capture.
///
/// All mutable state sits behind one mutex, so polls and UI-triggered calls
/// stay strictly sequential even when driven from multiple threads. The
/// change-count token written by `copy_to_clipboard` is therefore always
/// visible to the next `poll`.
pub struct ClipboardHistoryStore {
    inner: Arc<Mutex<Inner>>,
    listeners: Arc<Mutex<Vec<ChangeListener>>>,
    pasteboard: Arc<dyn Pasteboard>,
    storage: Arc<dyn Storage>,
    clock: Arc<dyn Clock>,
    source_app: Arc<dyn SourceAppProvider>,
    max_items: usize,
}

impl ClipboardHistoryStore {
    /// Create a store over the given collaborators and restore any
    /// persisted history. Content already sitting on the pasteboard is not
    /// captured; only changes after construction are.
    pub fn new(
        pasteboard: Arc<dyn Pasteboard>,
        storage: Arc<dyn Storage>,
        clock: Arc<dyn Clock>,
        source_app: Arc<dyn SourceAppProvider>,
        max_items: usize,
    ) -> Self {
        let last_change_count = pasteboard.change_count();
        let store = Self {
            inner: Arc::new(Mutex::new(Inner {
                entries: Vec::new(),
                last_change_count,
            })),
            listeners: Arc::new(Mutex::new(Vec::new())),
            pasteboard,
            storage,
            clock,
            source_app,
            max_items,
        };
        store.restore();
        store
    }

    /// Store wired to the real macOS pasteboard, the default on-disk
    /// storage (in-memory fallback when the database cannot be opened) and
    /// NSWorkspace application attribution.
    #[cfg(target_os = "macos")]
    pub fn system(max_items: usize) -> Self {
        Self::new(
            Arc::new(crate::system::macos::NsPasteboard),
            crate::storage::open_default(),
            Arc::new(SystemClock),
            Arc::new(crate::system::macos::WorkspaceSourceApp),
            max_items,
        )
    }

    /// Get a clone sharing the same state, for use across threads.
    pub fn clone_arc(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            listeners: Arc::clone(&self.listeners),
            pasteboard: Arc::clone(&self.pasteboard),
            storage: Arc::clone(&self.storage),
            clock: Arc::clone(&self.clock),
            source_app: Arc::clone(&self.source_app),
            max_items: self.max_items,
        }
    }

    /// Check the pasteboard for a new change and capture it.
    ///
    /// The change token is advanced before capture so a capture that yields
    /// nothing does not get re-processed on the next tick.
    pub fn poll(&self) {
        let current = self.pasteboard.change_count();
        {
            let mut inner = self.lock_inner();
            if inner.last_change_count == current {
                return;
            }
            inner.last_change_count = current;
        }
        self.capture();
    }

    /// Capture priority: text, then image, then file list. The first
    /// representation with non-empty content wins; the rest are not tried.
    fn capture(&self) {
        let source_app = self.source_app.active_app_name();
        let captured_at = self.clock.now();

        if let Some(text) = self.pasteboard.read_text() {
            if !text.is_empty() {
                let kind = classify_text(&text);
                self.record(ClipboardEntry::new_text(kind, &text, captured_at, source_app));
                return;
            }
        }

        if let Some(image) = self.pasteboard.read_image() {
            if !image.png.is_empty() {
                self.record(ClipboardEntry::new_image(
                    image.png,
                    image.width,
                    image.height,
                    captured_at,
                    source_app,
                ));
                return;
            }
        }

        if let Some(paths) = self.pasteboard.read_file_paths() {
            if !paths.is_empty() {
                match ClipboardEntry::new_file_list(&paths, captured_at, source_app) {
                    Ok(entry) => self.record(entry),
                    Err(e) => warn!("failed to encode file list payload: {}", e),
                }
            }
        }
    }

    /// Insert a captured entry unless it duplicates the current head.
    ///
    /// Dedup compares previews against the head only: a cheap guard against
    /// an immediate re-copy, not whole-history dedup. Discards do not
    /// persist.
    pub fn record(&self, entry: ClipboardEntry) {
        {
            let mut inner = self.lock_inner();
            if let Some(head) = inner.entries.first() {
                if head.preview == entry.preview {
                    debug!("discarding duplicate of head entry");
                    return;
                }
            }
            debug!(kind = ?entry.kind, source_app = ?entry.source_app, "recorded entry");
            inner.entries.insert(0, entry);
            if inner.entries.len() > self.max_items {
                inner.entries.truncate(self.max_items);
            }
        }
        self.persist();
        self.notify();
    }

    /// Write an entry's payload back to the pasteboard.
    ///
    /// Refreshes the change token afterwards so the next `poll` does not
    /// re-capture the programmatic write. A payload that fails to decode
    /// for its kind writes nothing.
    pub fn copy_to_clipboard(&self, entry: &ClipboardEntry) {
        self.pasteboard.clear_contents();
        match entry.kind {
            EntryKind::Text | EntryKind::Url => match std::str::from_utf8(&entry.payload) {
                Ok(text) => self.pasteboard.write_text(text),
                Err(e) => warn!("entry payload is not valid UTF-8, nothing written: {}", e),
            },
            EntryKind::Image => self.pasteboard.write_image(&entry.payload),
            EntryKind::FileList => match serde_json::from_slice::<Vec<String>>(&entry.payload) {
                Ok(paths) => self.pasteboard.write_file_paths(&paths),
                Err(e) => warn!("entry payload is not a file list, nothing written: {}", e),
            },
        }
        let mut inner = self.lock_inner();
        inner.last_change_count = self.pasteboard.change_count();
    }

    /// Remove the entry with the given id. An unknown id is a no-op.
    pub fn delete(&self, id: &str) {
        let removed = {
            let mut inner = self.lock_inner();
            let before = inner.entries.len();
            inner.entries.retain(|entry| entry.id != id);
            inner.entries.len() != before
        };
        if removed {
            self.persist();
            self.notify();
        }
    }

    /// Drop the whole history.
    pub fn clear_all(&self) {
        {
            let mut inner = self.lock_inner();
            inner.entries.clear();
        }
        self.persist();
        self.notify();
    }

    /// Cloned snapshot of the history, newest first.
    pub fn entries(&self) -> Vec<ClipboardEntry> {
        self.lock_inner().entries.clone()
    }

    /// Filtered snapshot: case-insensitive substring over previews plus an
    /// optional kind filter. Read-only, never persisted.
    pub fn search(&self, query: Option<&str>, kind: Option<EntryKind>) -> Vec<ClipboardEntry> {
        filter_entries(&self.lock_inner().entries, query, kind)
    }

    pub fn len(&self) -> usize {
        self.lock_inner().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_inner().entries.is_empty()
    }

    /// Register a hook invoked after every successful mutation. The UI
    /// layer pulls a fresh snapshot from inside the callback.
    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) {
        let mut listeners = match self.listeners.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        listeners.push(Box::new(listener));
    }

    /// Serialize the full list under the fixed storage key. Failures are
    /// logged and swallowed.
    pub fn persist(&self) {
        let snapshot = self.entries();
        if let Err(e) = self.try_persist(&snapshot) {
            warn!("failed to persist clipboard history: {}", e);
        }
    }

    fn try_persist(&self, entries: &[ClipboardEntry]) -> HistoryResult<()> {
        let bytes = serde_json::to_vec(entries)?;
        self.storage.set(HISTORY_KEY, &bytes)
    }

    /// Load the persisted list, replacing in-memory state. A missing or
    /// unparseable stored value leaves the history empty.
    pub fn restore(&self) {
        let entries = match self.try_restore() {
            Ok(entries) => entries,
            Err(e) => {
                warn!("failed to restore clipboard history, starting empty: {}", e);
                Vec::new()
            }
        };
        let count = entries.len();
        {
            let mut inner = self.lock_inner();
            inner.entries = entries;
        }
        if count > 0 {
            debug!(count, "restored clipboard history");
            self.notify();
        }
    }

    fn try_restore(&self) -> HistoryResult<Vec<ClipboardEntry>> {
        match self.storage.get(HISTORY_KEY)? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(Vec::new()),
        }
    }

    fn notify(&self) {
        let listeners = match self.listeners.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        for listener in listeners.iter() {
            listener();
        }
    }

    fn lock_inner(&self) -> MutexGuard<'_, Inner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("history mutex poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::pasteboard::PasteboardImage;
    use crate::storage::InMemoryStorage;
    use crate::system::NoSourceApp;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct FakeState {
        change_count: i64,
        text: Option<String>,
        image: Option<PasteboardImage>,
        files: Option<Vec<String>>,
    }

    /// Scripted pasteboard double. Every mutation bumps the change count,
    /// matching the platform contract.
    #[derive(Default)]
    struct FakePasteboard {
        state: Mutex<FakeState>,
    }

    impl FakePasteboard {
        fn set_text(&self, text: &str) {
            let mut state = self.state.lock().unwrap();
            state.text = Some(text.to_string());
            state.image = None;
            state.files = None;
            state.change_count += 1;
        }

        fn set_image(&self, image: PasteboardImage) {
            let mut state = self.state.lock().unwrap();
            state.text = None;
            state.image = Some(image);
            state.files = None;
            state.change_count += 1;
        }

        fn set_files(&self, paths: &[&str]) {
            let mut state = self.state.lock().unwrap();
            state.text = None;
            state.image = None;
            state.files = Some(paths.iter().map(|p| p.to_string()).collect());
            state.change_count += 1;
        }

        fn set_text_and_image(&self, text: &str, image: PasteboardImage) {
            let mut state = self.state.lock().unwrap();
            state.text = Some(text.to_string());
            state.image = Some(image);
            state.files = None;
            state.change_count += 1;
        }

        fn current_text(&self) -> Option<String> {
            self.state.lock().unwrap().text.clone()
        }

        fn current_files(&self) -> Option<Vec<String>> {
            self.state.lock().unwrap().files.clone()
        }
    }

    impl Pasteboard for FakePasteboard {
        fn change_count(&self) -> i64 {
            self.state.lock().unwrap().change_count
        }

        fn read_text(&self) -> Option<String> {
            self.state.lock().unwrap().text.clone()
        }

        fn read_image(&self) -> Option<PasteboardImage> {
            self.state.lock().unwrap().image.clone()
        }

        fn read_file_paths(&self) -> Option<Vec<String>> {
            self.state.lock().unwrap().files.clone()
        }

        fn write_text(&self, text: &str) {
            let mut state = self.state.lock().unwrap();
            state.text = Some(text.to_string());
            state.change_count += 1;
        }

        fn write_image(&self, png: &[u8]) {
            let mut state = self.state.lock().unwrap();
            state.image = Some(PasteboardImage {
                width: 0,
                height: 0,
                png: png.to_vec(),
            });
            state.change_count += 1;
        }

        fn write_file_paths(&self, paths: &[String]) {
            let mut state = self.state.lock().unwrap();
            state.files = Some(paths.to_vec());
            state.change_count += 1;
        }

        fn clear_contents(&self) {
            let mut state = self.state.lock().unwrap();
            state.text = None;
            state.image = None;
            state.files = None;
            state.change_count += 1;
        }
    }

    /// Storage wrapper that counts writes, for idempotence assertions.
    struct CountingStorage {
        inner: InMemoryStorage,
        writes: AtomicUsize,
    }

    impl CountingStorage {
        fn new() -> Self {
            Self {
                inner: InMemoryStorage::new(),
                writes: AtomicUsize::new(0),
            }
        }

        fn write_count(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }
    }

    impl Storage for CountingStorage {
        fn get(&self, key: &str) -> HistoryResult<Option<Vec<u8>>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &[u8]) -> HistoryResult<()> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.set(key, value)
        }
    }

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn fixed_clock() -> Arc<FixedClock> {
        Arc::new(FixedClock(
            DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        ))
    }

    fn new_store(max_items: usize) -> (ClipboardHistoryStore, Arc<FakePasteboard>, Arc<CountingStorage>) {
        let pasteboard = Arc::new(FakePasteboard::default());
        let storage = Arc::new(CountingStorage::new());
        let store = ClipboardHistoryStore::new(
            Arc::clone(&pasteboard) as Arc<dyn Pasteboard>,
            Arc::clone(&storage) as Arc<dyn Storage>,
            fixed_clock(),
            Arc::new(NoSourceApp),
            max_items,
        );
        (store, pasteboard, storage)
    }

    fn sample_image() -> PasteboardImage {
        PasteboardImage {
            width: 640,
            height: 480,
            png: vec![1, 2, 3, 4],
        }
    }

    #[test]
    fn distinct_writes_capture_newest_first() {
        let (store, pasteboard, _) = new_store(DEFAULT_MAX_ITEMS);

        pasteboard.set_text("one");
        store.poll();
        pasteboard.set_text("two");
        store.poll();
        pasteboard.set_text("three");
        store.poll();

        let entries = store.entries();
        let previews: Vec<_> = entries.iter().map(|e| e.preview.as_str()).collect();
        assert_eq!(previews, vec!["three", "two", "one"]);
    }

    #[test]
    fn poll_without_change_is_idempotent() {
        let (store, pasteboard, storage) = new_store(DEFAULT_MAX_ITEMS);

        pasteboard.set_text("once");
        store.poll();
        assert_eq!(store.len(), 1);
        let writes = storage.write_count();

        store.poll();
        store.poll();
        assert_eq!(store.len(), 1);
        assert_eq!(storage.write_count(), writes);
    }

    #[test]
    fn re_copy_of_head_is_discarded() {
        let (store, pasteboard, storage) = new_store(DEFAULT_MAX_ITEMS);

        pasteboard.set_text("same");
        store.poll();
        let writes = storage.write_count();

        // A fresh platform write with identical content bumps the change
        // count but must not grow the history or hit storage.
        pasteboard.set_text("same");
        store.poll();

        assert_eq!(store.len(), 1);
        assert_eq!(storage.write_count(), writes);
    }

    #[test]
    fn non_adjacent_duplicates_are_kept() {
        let (store, pasteboard, _) = new_store(DEFAULT_MAX_ITEMS);

        pasteboard.set_text("alpha");
        store.poll();
        pasteboard.set_text("beta");
        store.poll();
        pasteboard.set_text("alpha");
        store.poll();

        // Dedup checks the head only
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn history_is_bounded_and_evicts_oldest() {
        let (store, pasteboard, _) = new_store(3);

        for text in ["a", "b", "c", "d"] {
            pasteboard.set_text(text);
            store.poll();
        }

        let entries = store.entries();
        assert_eq!(entries.len(), 3);
        let previews: Vec<_> = entries.iter().map(|e| e.preview.as_str()).collect();
        assert_eq!(previews, vec!["d", "c", "b"]);
    }

    #[test]
    fn text_wins_over_image_when_both_present() {
        let (store, pasteboard, _) = new_store(DEFAULT_MAX_ITEMS);

        pasteboard.set_text_and_image("caption", sample_image());
        store.poll();

        let entries = store.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, EntryKind::Text);
    }

    #[test]
    fn empty_text_falls_through_to_image() {
        let (store, pasteboard, _) = new_store(DEFAULT_MAX_ITEMS);

        pasteboard.set_text_and_image("", sample_image());
        store.poll();

        let entries = store.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, EntryKind::Image);
        assert_eq!(entries[0].preview, "Image 640x480");
    }

    #[test]
    fn file_list_capture_round_trips_through_copy_back() {
        let (store, pasteboard, _) = new_store(DEFAULT_MAX_ITEMS);

        pasteboard.set_files(&["/tmp/a.txt", "/tmp/b.txt"]);
        store.poll();

        let entries = store.entries();
        assert_eq!(entries[0].kind, EntryKind::FileList);
        assert_eq!(entries[0].preview, "a.txt, b.txt");

        store.copy_to_clipboard(&entries[0]);
        assert_eq!(
            pasteboard.current_files(),
            Some(vec!["/tmp/a.txt".to_string(), "/tmp/b.txt".to_string()])
        );
    }

    #[test]
    fn bare_url_text_is_classified_as_url() {
        let (store, pasteboard, _) = new_store(DEFAULT_MAX_ITEMS);

        pasteboard.set_text("https://example.com");
        store.poll();
        pasteboard.set_text("see https://example.com now");
        store.poll();

        let entries = store.entries();
        assert_eq!(entries[1].kind, EntryKind::Url);
        assert_eq!(entries[0].kind, EntryKind::Text);
    }

    #[test]
    fn copy_back_is_not_recaptured() {
        let (store, pasteboard, _) = new_store(DEFAULT_MAX_ITEMS);

        pasteboard.set_text("hello");
        store.poll();
        pasteboard.set_text("other");
        store.poll();
        assert_eq!(store.len(), 2);

        // "hello" is no longer the head, so a re-capture would pass dedup;
        // only the refreshed change token suppresses it.
        let hello = store.entries().into_iter().find(|e| e.preview == "hello").unwrap();
        store.copy_to_clipboard(&hello);
        assert_eq!(pasteboard.current_text().as_deref(), Some("hello"));

        store.poll();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn copy_back_with_undecodable_payload_writes_nothing() {
        let (store, pasteboard, _) = new_store(DEFAULT_MAX_ITEMS);

        pasteboard.set_text("seed");
        store.poll();

        let mut entry = store.entries().remove(0);
        entry.kind = EntryKind::FileList; // payload is not a JSON path list
        store.copy_to_clipboard(&entry);

        // clear_contents ran, the write did not
        assert_eq!(pasteboard.current_text(), None);
        assert_eq!(pasteboard.current_files(), None);

        // The cleared pasteboard is not captured either
        store.poll();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_removes_entry_and_unknown_id_is_noop() {
        let (store, pasteboard, storage) = new_store(DEFAULT_MAX_ITEMS);

        pasteboard.set_text("keep");
        store.poll();
        pasteboard.set_text("drop");
        store.poll();

        let target = store.entries()[0].id.clone();
        store.delete(&target);
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].preview, "keep");

        let writes = storage.write_count();
        store.delete("no-such-id");
        assert_eq!(store.len(), 1);
        assert_eq!(storage.write_count(), writes);
    }

    #[test]
    fn clear_all_empties_and_persists() {
        let (store, pasteboard, storage) = new_store(DEFAULT_MAX_ITEMS);

        pasteboard.set_text("something");
        store.poll();
        store.clear_all();

        assert!(store.is_empty());
        // A fresh store over the same storage sees the cleared state
        let fresh = ClipboardHistoryStore::new(
            Arc::new(FakePasteboard::default()),
            Arc::clone(&storage) as Arc<dyn Storage>,
            fixed_clock(),
            Arc::new(NoSourceApp),
            DEFAULT_MAX_ITEMS,
        );
        assert!(fresh.is_empty());
    }

    #[test]
    fn persisted_history_restores_on_a_fresh_store() {
        let (store, pasteboard, storage) = new_store(DEFAULT_MAX_ITEMS);

        pasteboard.set_text("first");
        store.poll();
        pasteboard.set_files(&["/srv/data.bin"]);
        store.poll();
        let before = store.entries();

        let fresh = ClipboardHistoryStore::new(
            Arc::new(FakePasteboard::default()),
            Arc::clone(&storage) as Arc<dyn Storage>,
            fixed_clock(),
            Arc::new(NoSourceApp),
            DEFAULT_MAX_ITEMS,
        );
        let after = fresh.entries();

        assert_eq!(after.len(), before.len());
        for (a, b) in after.iter().zip(before.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.payload, b.payload);
            assert_eq!(a.preview, b.preview);
        }
    }

    #[test]
    fn corrupt_persisted_value_restores_empty() {
        let storage = Arc::new(CountingStorage::new());
        storage.set(HISTORY_KEY, b"not json at all").unwrap();

        let store = ClipboardHistoryStore::new(
            Arc::new(FakePasteboard::default()),
            Arc::clone(&storage) as Arc<dyn Storage>,
            fixed_clock(),
            Arc::new(NoSourceApp),
            DEFAULT_MAX_ITEMS,
        );
        assert!(store.is_empty());
    }

    #[test]
    fn subscribers_fire_on_mutations_only() {
        let (store, pasteboard, _) = new_store(DEFAULT_MAX_ITEMS);
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        store.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        pasteboard.set_text("x");
        store.poll();
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // No change, no notification
        store.poll();
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // Duplicate discard, no notification
        pasteboard.set_text("x");
        store.poll();
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        store.clear_all();
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn search_filters_snapshot_without_mutating() {
        let (store, pasteboard, _) = new_store(DEFAULT_MAX_ITEMS);

        pasteboard.set_text("Quarterly Report");
        store.poll();
        pasteboard.set_text("https://example.com");
        store.poll();

        let hits = store.search(Some("report"), None);
        assert_eq!(hits.len(), 1);
        let urls = store.search(None, Some(EntryKind::Url));
        assert_eq!(urls.len(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn source_app_is_attributed_at_capture() {
        struct FixedApp;
        impl SourceAppProvider for FixedApp {
            fn active_app_name(&self) -> Option<String> {
                Some("Safari".to_string())
            }
        }

        let pasteboard = Arc::new(FakePasteboard::default());
        let store = ClipboardHistoryStore::new(
            Arc::clone(&pasteboard) as Arc<dyn Pasteboard>,
            Arc::new(InMemoryStorage::new()),
            fixed_clock(),
            Arc::new(FixedApp),
            DEFAULT_MAX_ITEMS,
        );

        pasteboard.set_text("copied in safari");
        store.poll();
        assert_eq!(store.entries()[0].source_app.as_deref(), Some("Safari"));
    }
}
