//! Storage initializer

use std::io;

use tokio::fs;
use tracing::warn;

use super::document::{StoreConfig, StoreResult};
use crate::utils::atomic::{atomic_write, cleanup_temp_file};

/// Make sure the data directory and the events document exist
///
/// Missing directories are created recursively. A missing document is
/// created as an empty, pretty-printed array; an existing document is left
/// untouched. Returns `true` when the document was created.
pub async fn ensure_storage(config: &StoreConfig) -> StoreResult<bool> {
    fs::create_dir_all(config.data_dir()).await?;

    let events_path = config.events_path();
    if cleanup_temp_file(&events_path).await? {
        warn!("Removed interrupted write next to {}", events_path.display());
    }

    match fs::metadata(&events_path).await {
        Ok(_) => Ok(false),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let empty = serde_json::to_string_pretty(&Vec::<serde_json::Value>::new())?;
            atomic_write(&events_path, &empty).await?;
            Ok(true)
        }
        Err(e) => Err(e.into()),
    }
}
