//! Key-value persistence collaborator, the localStorage analogue.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors from the persistence collaborator.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored value is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Asynchronous key-value persistence.
///
/// Key namespacing is the caller's concern; the convention in this crate is
/// `fluxkit_<Feature>State`.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;
    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError>;
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
