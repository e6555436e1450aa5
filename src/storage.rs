//! Secure key-value storage interface
//!
//! The history snapshot lives in whatever secure store the host platform
//! provides (keychain on device, a file for the CLI). The core only ever
//! sees this string-keyed async get/set/delete surface.

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tokio::fs;

/// Async string-keyed storage, as exposed by the secure-storage collaborator.
#[async_trait]
pub trait SecureStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn delete(&self, key: &str) -> Result<()>;
}

/// File-backed [`SecureStorage`] used by the CLI.
///
/// Keeps all keys in one pretty-printed JSON map under the storage
/// directory, mirroring how the app's config is laid out on disk.
pub struct FileStorage {
    store_path: PathBuf,
}

impl FileStorage {
    /// Create a storage rooted at `store_dir`, creating the directory.
    pub async fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir).await?;
        Ok(Self {
            store_path: store_dir.join("storage.json"),
        })
    }

    async fn read_map(&self) -> Result<BTreeMap<String, String>> {
        match fs::read_to_string(&self.store_path).await {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| Error::Storage(e.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        let content = serde_json::to_string_pretty(map)?;
        fs::write(&self.store_path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl SecureStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map().await?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map).await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut map = self.read_map().await?;
        if map.remove(key).is_some() {
            self.write_map(&map).await?;
        }
        Ok(())
    }
}

/// In-memory storage, used by tests and as a no-persistence fallback.
pub struct MemoryStorage {
    entries: tokio::sync::Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            entries: tokio::sync::Mutex::new(BTreeMap::new()),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SecureStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn file_storage_round_trips_values() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::open(dir.path().to_path_buf()).await.unwrap();

        assert_eq!(storage.get("missing").await.unwrap(), None);

        storage.set("k", "v1").await.unwrap();
        assert_eq!(storage.get("k").await.unwrap().as_deref(), Some("v1"));

        storage.set("k", "v2").await.unwrap();
        assert_eq!(storage.get("k").await.unwrap().as_deref(), Some("v2"));

        storage.delete("k").await.unwrap();
        assert_eq!(storage.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_of_absent_key_is_ok() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::open(dir.path().to_path_buf()).await.unwrap();
        storage.delete("nothing").await.unwrap();
    }
}
