use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;

use super::{KeyValueStorage, StorageError};

/// In-memory storage for tests and the demo's ephemeral runs.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self
            .entries
            .read()
            .expect("storage lock poisoned")
            .get(key)
            .cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        self.entries
            .write()
            .expect("storage lock poisoned")
            .insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .expect("storage lock poisoned")
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn stores_and_removes_values() {
        let storage = MemoryStorage::new();
        storage.set("a", json!(1)).await.unwrap();
        assert_eq!(storage.get("a").await.unwrap(), Some(json!(1)));
        storage.remove("a").await.unwrap();
        assert_eq!(storage.get("a").await.unwrap(), None);
    }
}
