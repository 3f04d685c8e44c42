//! Typed key/value cache over a preference store.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use super::error::CacheError;
use super::store::{FileStore, MemoryStore, PreferenceStore};

/// Flat string-keyed cache with typed access via JSON.
///
/// Typed and string access share the same storage: `set_json` followed by
/// `get` returns the JSON text, and `set` followed by `get_json` decodes the
/// raw string. A corrupted entry reads as a miss rather than an error.
///
/// Cheap to clone; clones share the underlying store.
#[derive(Clone)]
pub struct LocalCache {
    store: Arc<dyn PreferenceStore>,
}

impl LocalCache {
    /// Create a cache over the given store.
    pub fn new(store: impl PreferenceStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Create a cache that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Open a cache persisted to a JSON file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CacheError> {
        Ok(Self::new(FileStore::open(path)?))
    }

    /// Get the raw string for a key, or `None` if the key is absent.
    ///
    /// An empty stored value is returned as `Some("")`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.store.get(key)
    }

    /// Get the raw string for a key, or an empty string if absent.
    pub fn get_or_empty(&self, key: &str) -> String {
        self.get(key).unwrap_or_default()
    }

    /// Decode a key's value as JSON.
    ///
    /// Returns `None` if the key is absent, the value is empty, or it no
    /// longer decodes as `T`.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        if raw.is_empty() {
            return None;
        }

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "ignoring cache entry that does not decode");
                None
            }
        }
    }

    /// Decode a key's value as JSON, falling back to `T::default()`.
    pub fn get_json_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.get_json(key).unwrap_or_default()
    }

    /// Store a string, replacing any previous value wholesale.
    pub fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.store.set(key, value)
    }

    /// Encode a value as JSON and store it.
    ///
    /// Fails if the value has no JSON representation.
    pub fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let json = serde_json::to_string(value).map_err(|source| CacheError::Serialization {
            key: key.to_string(),
            source,
        })?;
        self.set(key, &json)
    }

    /// Whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.store.contains_key(key)
    }

    /// Remove a key. A no-op if it is absent.
    pub fn clear(&self, key: &str) -> Result<(), CacheError> {
        self.store.remove(key)
    }
}
