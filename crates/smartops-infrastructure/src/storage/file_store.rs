//! File-backed persistent key-value store.
//!
//! All entries live in one JSON object file. Every mutation is a locked
//! read-modify-write followed by an atomic replace, so the file on disk is
//! always a complete document.

use async_trait::async_trait;
use smartops_core::error::{Result, SmartOpsError};
use smartops_core::storage::KeyValueStore;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task;

use crate::paths::SmartOpsPaths;
use crate::storage::atomic_json::AtomicJsonFile;

type Entries = BTreeMap<String, String>;

/// Durable [`KeyValueStore`] backed by `storage.json`.
///
/// Blocking file I/O runs on the blocking thread pool.
#[derive(Clone)]
pub struct FileKeyValueStore {
    file: Arc<AtomicJsonFile<Entries>>,
}

impl FileKeyValueStore {
    /// Creates a store at an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicJsonFile::new(path)),
        }
    }

    /// Creates a store at the standard location, or under `base` if given.
    pub fn new(base: Option<&Path>) -> Result<Self> {
        let path = SmartOpsPaths::new(base).storage_file()?;
        Ok(Self::with_path(path))
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    async fn read_entries(&self) -> Result<Entries> {
        let file = self.file.clone();
        task::spawn_blocking(move || file.load())
            .await
            .map_err(|e| SmartOpsError::storage_read(format!("Failed to join task: {}", e)))?
            .map(Option::unwrap_or_default)
            .map_err(|e| {
                SmartOpsError::storage_read(format!(
                    "Failed to read {}: {}",
                    self.path().display(),
                    e
                ))
            })
    }

    async fn mutate<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Entries) -> bool + Send + 'static,
    {
        let file = self.file.clone();
        task::spawn_blocking(move || file.update(Entries::new(), |entries| (f(entries), ())))
            .await
            .map_err(|e| SmartOpsError::storage_write(format!("Failed to join task: {}", e)))?
            .map_err(|e| {
                SmartOpsError::storage_write(format!(
                    "Failed to write {}: {}",
                    self.path().display(),
                    e
                ))
            })
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let mut entries = self.read_entries().await?;
        Ok(entries.remove(key))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let key = key.to_string();
        let value = value.to_string();
        self.mutate(move |entries| {
            entries.insert(key, value);
            true
        })
        .await
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let key = key.to_string();
        self.mutate(move |entries| entries.remove(&key).is_some())
            .await
    }
}
