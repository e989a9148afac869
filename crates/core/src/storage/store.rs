use async_trait::async_trait;

use crate::errors::CoreError;

/// String-keyed durable store holding whole documents.
///
/// This is the only persistence capability the alert core needs: the
/// repository reads the full collection once at startup and rewrites it
/// after every mutation. Nothing here knows about alerts, so the same trait
/// fits browser local storage, a file per key, or an in-memory fake.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait KeyValueStore: Send + Sync {
    /// Human-readable name of this store (for logs/errors).
    fn name(&self) -> &str;

    /// Read the value stored under `key`, or `None` if nothing is stored.
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;

    /// Delete `key`. Deleting a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), CoreError>;
}
