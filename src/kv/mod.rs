//! Key-value persistence capability.
//!
//! The client state never touches a storage mechanism directly; it is handed
//! a `KeyValueStore` with string keys and string values. Two implementations
//! ship with the crate: an in-memory map for tests and embedding, and a
//! JSON-file store that survives restarts.

mod file;
mod in_memory;

use thiserror::Error;

pub use file::FileKeyValueStore;
pub use in_memory::InMemoryKeyValueStore;

/// Error type for key-value store operations.
#[derive(Debug, Error)]
pub enum KvError {
    #[error("key-value store lock poisoned during {0}")]
    LockPoisoned(&'static str),
    #[error("key-value store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("key-value store file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Flat string-keyed storage.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, KvError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), KvError>;
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<K> {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        (**self).set(key, value)
    }
}
