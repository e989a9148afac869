use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::errors::CoreError;
use super::store::KeyValueStore;

/// In-process key-value store.
///
/// Cloning the store yields another handle to the same entries, so a test
/// can hand one clone to a repository and inspect or tamper with the
/// contents through the other. An optional quota caps the total size of
/// keys plus values in bytes, mirroring the storage limits browsers apply.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl MemoryStore {
    /// Create an empty store without a size limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store whose total size may not exceed `quota` bytes.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: Arc::default(),
            quota: Some(quota),
        }
    }

    /// Read a value without going through the async trait.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        let map = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        map.get(key).cloned()
    }

    /// Write a value directly, bypassing the quota.
    /// Used to seed a store with an existing (possibly foreign) document.
    pub fn insert_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        let mut map = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        map.insert(key.into(), value.into());
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total bytes of all keys and values.
    #[must_use]
    pub fn used_bytes(&self) -> usize {
        let map = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        map.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl KeyValueStore for MemoryStore {
    fn name(&self) -> &str {
        "MemoryStore"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.peek(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut map = self.entries.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(quota) = self.quota {
            // Size after the write: every other entry plus the new one
            let others: usize = map
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let required = others + key.len() + value.len();
            if required > quota {
                return Err(CoreError::StorageQuotaExceeded { required, quota });
            }
        }

        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), CoreError> {
        let mut map = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        map.remove(key);
        Ok(())
    }
}
