//! Single-slot key-value storage backing [`JsonExpenseStore`].
//!
//! [`JsonExpenseStore`]: super::JsonExpenseStore

use std::{
    collections::HashMap,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{EngineError, ResultEngine};

/// A string slot store keyed by name.
///
/// A slot that was never written is `None`, never an error.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn get(&self, key: &str) -> ResultEngine<Option<String>>;

    /// Overwrites the slot with `value`.
    async fn set(&self, key: &str, value: String) -> ResultEngine<()>;
}

/// Process-local slots, lost when the store is dropped.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn get(&self, key: &str) -> ResultEngine<Option<String>> {
        Ok(self.slots.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> ResultEngine<()> {
        self.slots.lock().await.insert(key.to_string(), value);
        Ok(())
    }
}

/// One file per slot (`<dir>/<key>.json`).
///
/// Writes go to a temporary sibling first and are renamed over the slot, so a
/// failed write leaves the previous content in place.
#[derive(Clone, Debug)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, String> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(format!("invalid slot key: {key:?}"));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl BlobStore for FileBlobStore {
    async fn get(&self, key: &str) -> ResultEngine<Option<String>> {
        let path = self.slot_path(key).map_err(EngineError::StorageRead)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(EngineError::StorageRead(format!(
                "{}: {err}",
                path.display()
            ))),
        }
    }

    async fn set(&self, key: &str, value: String) -> ResultEngine<()> {
        let path = self.slot_path(key).map_err(EngineError::StorageWrite)?;
        let write_err = |err: std::io::Error| {
            EngineError::StorageWrite(format!("{}: {err}", path.display()))
        };

        if tokio::fs::metadata(&self.dir).await.is_err() {
            tokio::fs::create_dir_all(&self.dir).await.map_err(write_err)?;
            tracing::info!(dir = %self.dir.display(), "created storage directory");
        }

        let tmp = path.with_extension("json.tmp");
        let written = match tokio::fs::write(&tmp, value).await {
            Ok(()) => tokio::fs::rename(&tmp, &path).await,
            Err(err) => Err(err),
        };
        if let Err(err) = written {
            if let Err(cleanup) = tokio::fs::remove_file(&tmp).await {
                tracing::debug!(tmp = %tmp.display(), "temporary slot file not removed: {cleanup}");
            }
            return Err(write_err(err));
        }
        Ok(())
    }
}
