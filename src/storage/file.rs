use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::{KeyValueStorage, StorageError};

/// File-backed storage: one JSON document holding every key.
///
/// The document is read once on open and rewritten in full after each
/// mutation.
pub struct FileStorage {
    path: PathBuf,
    cache: RwLock<Map<String, Value>>,
}

impl FileStorage {
    /// Open the document at `path`. A missing file is an empty store; the
    /// file and its parent directories are created on first write.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let cache = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(err) if err.kind() == ErrorKind::NotFound => Map::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path,
            cache: RwLock::new(cache),
        })
    }

    async fn persist(&self) -> Result<(), StorageError> {
        let bytes = {
            let cache = self.cache.read().expect("storage lock poisoned");
            serde_json::to_vec_pretty(&*cache)?
        };
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self
            .cache
            .read()
            .expect("storage lock poisoned")
            .get(key)
            .cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        {
            let mut cache = self.cache.write().expect("storage lock poisoned");
            cache.insert(key.to_string(), value);
        }
        self.persist().await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let removed = {
            let mut cache = self.cache.write().expect("storage lock poisoned");
            cache.remove(key).is_some()
        };
        if removed {
            self.persist().await?;
        }
        Ok(())
    }
}
