//! Crash-safe JSON documents on disk.
//!
//! Each write goes to its own uniquely named temp file in the target directory,
//! which is flushed and then renamed over the target, so readers only ever see the
//! old or the new document. There is no locking: concurrent writers of the same
//! path each succeed and the last rename wins.

use crate::error::StorageError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::{self, ErrorKind, Write};
use std::path::Path;
use tokio::{fs, task};

/// Loads the document at `path`.
///
/// A missing file is created from `fallback`, which is then returned. Any other
/// failure, including unparsable content, is returned as a [`StorageError`].
pub async fn read_json<T>(path: &Path, fallback: T) -> Result<T, StorageError>
where
    T: Serialize + DeserializeOwned,
{
    match fs::read(path).await {
        Ok(bytes) => {
            tracing::debug!(path = %path.display(), bytes = bytes.len(), "read document");
            serde_json::from_slice(&bytes).map_err(|e| StorageError::corrupt(path, e))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "document missing, writing fallback");
            write_json(path, &fallback).await?;
            Ok(fallback)
        }
        Err(e) => Err(StorageError::io(path, e)),
    }
}

/// Replaces the document at `path` atomically, creating parent directories as needed.
pub async fn write_json<T>(path: &Path, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
{
    let bytes = serde_json::to_vec_pretty(value).map_err(|e| StorageError::corrupt(path, e))?;
    let len = bytes.len();
    let target = path.to_path_buf();

    task::spawn_blocking(move || replace_file(&target, &bytes))
        .await
        .map_err(|e| StorageError::io(path, io::Error::other(e)))??;

    tracing::debug!(path = %path.display(), bytes = len, "wrote document");
    Ok(())
}

fn replace_file(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| StorageError::io(dir, e))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut tmp = tempfile::Builder::new()
        .prefix(&format!(".{file_name}."))
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| StorageError::io(dir, e))?;
    let tmp_path = tmp.path().to_path_buf();

    tmp.write_all(bytes).map_err(|e| StorageError::io(&tmp_path, e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| StorageError::io(&tmp_path, e))?;
    // The temp file is removed on drop if the rename fails.
    tmp.persist(path).map_err(|e| StorageError::io(path, e.error))?;
    Ok(())
}
