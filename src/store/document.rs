//! Whole-document access to the events file

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use super::init::ensure_storage;
use crate::error::StoreError;
use crate::types::Event;
use crate::utils::atomic::atomic_write;

/// File name of the events document inside the data directory
pub const EVENTS_FILE_NAME: &str = "events.json";

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Location of the events document
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the data directory
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

impl StoreConfig {
    /// Create config with custom data directory
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get path to events.json
    pub fn events_path(&self) -> PathBuf {
        self.data_dir.join(EVENTS_FILE_NAME)
    }
}

/// Store over the single events document
///
/// `load` and `save` always move the full collection. Appends are
/// serialized through one writer lock so that two creates in this process
/// cannot overwrite each other; readers never take the lock.
pub struct EventStore {
    config: StoreConfig,
    write_lock: Mutex<()>,
}

impl EventStore {
    /// Create a store for the given location
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            write_lock: Mutex::new(()),
        }
    }

    /// Get the store configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Get path to the events document
    pub fn events_path(&self) -> PathBuf {
        self.config.events_path()
    }

    /// Prepare storage at startup
    ///
    /// Failures are logged and swallowed: the server keeps starting and the
    /// first request that touches storage reports the problem.
    pub async fn initialize(&self) {
        match ensure_storage(&self.config).await {
            Ok(true) => info!("Created events document at {}", self.events_path().display()),
            Ok(false) => debug!("Using events document at {}", self.events_path().display()),
            Err(e) => error!("Error ensuring data file: {}", e),
        }
    }

    /// Read and decode the full collection
    pub async fn load(&self) -> StoreResult<Vec<Event>> {
        let content = fs::read_to_string(self.events_path()).await?;
        let events = serde_json::from_str(&content)?;
        Ok(events)
    }

    /// Replace the full collection on disk
    pub async fn save(&self, events: &[Event]) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(events)?;
        atomic_write(self.events_path(), &content).await?;
        Ok(())
    }

    /// Append one event: load, push, save under the writer lock
    pub async fn append(&self, event: Event) -> StoreResult<Event> {
        let _guard = self.write_lock.lock().await;

        let mut events = self.load().await?;
        events.push(event.clone());
        self.save(&events).await?;

        debug!("Stored event {} ({} total)", event.event_id, events.len());
        Ok(event)
    }
}
