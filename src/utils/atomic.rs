//! Atomic file operations
//!
//! Writes go to a sibling `.tmp` file which is flushed with `sync_all()` and
//! then renamed over the destination, so readers see either the old or the
//! new document, never a partial one.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

/// Temporary path used while writing `path`
pub fn temp_path(path: &Path) -> PathBuf {
    path.with_extension("tmp")
}

/// Atomically replace the content of a file
///
/// # Example
///
/// ```ignore
/// atomic_write("data/events.json", "[]").await?;
/// ```
pub async fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> io::Result<()> {
    let path = path.as_ref();
    let temp_path = temp_path(path);

    let mut file = File::create(&temp_path).await?;
    file.write_all(content.as_bytes()).await?;
    file.sync_all().await?;
    drop(file);

    fs::rename(&temp_path, path).await
}

/// Remove a temp file left behind by an interrupted write
///
/// Returns `true` when a stale file was found and removed.
pub async fn cleanup_temp_file<P: AsRef<Path>>(path: P) -> io::Result<bool> {
    let temp_path = temp_path(path.as_ref());

    match fs::remove_file(&temp_path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
