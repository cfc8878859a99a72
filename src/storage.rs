//! Key-value persistence backends for the history list.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use directories::ProjectDirs;
use redb::{Database, ReadableTable, TableDefinition};
use tracing::warn;

use crate::shared::errors::{HistoryError, HistoryResult};

/// Redb table holding serialized values by string key
const HISTORY_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("clipkeep");

/// Key-value storage consumed by the store for persistence. Write failures
/// are swallowed by the caller, never surfaced to the user.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> HistoryResult<Option<Vec<u8>>>;
    fn set(&self, key: &str, value: &[u8]) -> HistoryResult<()>;
}

/// Redb-backed storage under the platform data directory.
pub struct RedbStorage {
    db: Arc<Mutex<Database>>,
}

impl RedbStorage {
    /// Open (or create) the database in the platform data directory.
    pub fn new() -> HistoryResult<Self> {
        let proj_dirs = ProjectDirs::from("com", "clipkeep", "clipkeep").ok_or_else(|| {
            HistoryError::Storage("Failed to resolve project directories".to_string())
        })?;
        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir)
            .map_err(|e| HistoryError::Storage(format!("Failed to create data directory: {}", e)))?;
        Self::open(&data_dir.join("history.redb"))
    }

    /// Open (or create) the database at an explicit path.
    pub fn open(path: &Path) -> HistoryResult<Self> {
        let db = Database::create(path)
            .map_err(|e| HistoryError::Storage(format!("Failed to open database: {}", e)))?;

        // Make sure the table exists before the first read
        let write_txn = db
            .begin_write()
            .map_err(|e| HistoryError::Storage(format!("Failed to begin write: {}", e)))?;
        {
            let _table = write_txn
                .open_table(HISTORY_TABLE)
                .map_err(|e| HistoryError::Storage(format!("Failed to open table: {}", e)))?;
        }
        write_txn
            .commit()
            .map_err(|e| HistoryError::Storage(format!("Failed to commit: {}", e)))?;

        Ok(Self {
            db: Arc::new(Mutex::new(db)),
        })
    }

    fn lock_db(&self) -> HistoryResult<std::sync::MutexGuard<'_, Database>> {
        self.db
            .lock()
            .map_err(|e| HistoryError::Storage(format!("Mutex poisoned: {}", e)))
    }
}

impl Storage for RedbStorage {
    fn get(&self, key: &str) -> HistoryResult<Option<Vec<u8>>> {
        let db = self.lock_db()?;
        let read_txn = db
            .begin_read()
            .map_err(|e| HistoryError::Storage(format!("Failed to begin read: {}", e)))?;
        let table = read_txn
            .open_table(HISTORY_TABLE)
            .map_err(|e| HistoryError::Storage(format!("Failed to open table: {}", e)))?;
        let value = table
            .get(key)
            .map_err(|e| HistoryError::Storage(format!("Failed to read key: {}", e)))?;
        Ok(value.map(|guard| guard.value().to_vec()))
    }

    fn set(&self, key: &str, value: &[u8]) -> HistoryResult<()> {
        let db = self.lock_db()?;
        let write_txn = db
            .begin_write()
            .map_err(|e| HistoryError::Storage(format!("Failed to begin write: {}", e)))?;
        {
            let mut table = write_txn
                .open_table(HISTORY_TABLE)
                .map_err(|e| HistoryError::Storage(format!("Failed to open table: {}", e)))?;
            table
                .insert(key, value)
                .map_err(|e| HistoryError::Storage(format!("Failed to insert: {}", e)))?;
        }
        write_txn
            .commit()
            .map_err(|e| HistoryError::Storage(format!("Failed to commit: {}", e)))?;
        Ok(())
    }
}

/// In-memory storage: the fallback when the database cannot be opened, and
/// the test double.
#[derive(Default)]
pub struct InMemoryStorage {
    values: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for InMemoryStorage {
    fn get(&self, key: &str) -> HistoryResult<Option<Vec<u8>>> {
        let values = self
            .values
            .lock()
            .map_err(|e| HistoryError::Storage(format!("Mutex poisoned: {}", e)))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> HistoryResult<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| HistoryError::Storage(format!("Mutex poisoned: {}", e)))?;
        values.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// Open the default on-disk backend, falling back to in-memory when the
/// database cannot be initialized.
pub fn open_default() -> Arc<dyn Storage> {
    match RedbStorage::new() {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            warn!("failed to initialize database, using in-memory fallback: {}", e);
            Arc::new(InMemoryStorage::new())
        }
    }
}
