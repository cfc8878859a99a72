//! Persisted engine settings.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::warn;

use crate::clipboard::monitor::DEFAULT_POLL_INTERVAL;
use crate::clipboard::store::DEFAULT_MAX_ITEMS;
use crate::shared::errors::{HistoryError, HistoryResult};

/// User-tunable engine settings, stored as JSON in the platform config
/// directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySettings {
    /// Maximum number of entries kept in history
    pub max_items: usize,
    /// Pasteboard poll interval in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
        }
    }
}

impl HistorySettings {
    pub fn settings_path() -> HistoryResult<PathBuf> {
        ProjectDirs::from("com", "clipkeep", "clipkeep")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| {
                HistoryError::SystemIO("Failed to determine config directory".to_string())
            })
    }

    /// Load settings from disk, writing defaults on first run. An
    /// unparseable file falls back to defaults without clobbering it.
    pub async fn load() -> HistoryResult<Self> {
        let path = Self::settings_path()?;

        if !path.exists() {
            let settings = Self::default();
            settings.save().await?;
            return Ok(settings);
        }

        let contents = fs::read_to_string(&path).await?;
        match serde_json::from_str(&contents) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                warn!("failed to parse settings, using defaults: {}", e);
                Ok(Self::default())
            }
        }
    }

    pub async fn save(&self) -> HistoryResult<()> {
        let path = Self::settings_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&path, contents).await?;
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
