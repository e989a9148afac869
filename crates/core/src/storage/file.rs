use async_trait::async_trait;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::errors::CoreError;
use super::store::KeyValueStore;

/// Directory-backed store: each key is a `<key>.json` file (native only).
///
/// Writes go to a sibling temp file which is then renamed over the target,
/// so a concurrent reader sees either the old document or the new one.
/// File I/O runs on tokio's blocking pool, so calls must come from inside
/// a tokio runtime.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Map a key to its file, rejecting anything that could escape `dir`.
    fn path_for(&self, key: &str) -> Result<PathBuf, CoreError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(CoreError::FileIO(format!(
                "Invalid storage key '{key}': use ASCII letters, digits, '-', '_' or '.'"
            )));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

// ── Blocking file operations ────────────────────────────────────────

fn read_file(path: &Path) -> Result<Option<String>, CoreError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn write_file(dir: &Path, path: &Path, value: &str) -> Result<(), CoreError> {
    fs::create_dir_all(dir)?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, value)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

fn remove_file(path: &Path) -> Result<(), CoreError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

async fn run_blocking<T, F>(op: F) -> Result<T, CoreError>
where
    F: FnOnce() -> Result<T, CoreError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(op)
        .await
        .map_err(|e| CoreError::FileIO(format!("File task failed: {e}")))?
}

#[async_trait]
impl KeyValueStore for FileStore {
    fn name(&self) -> &str {
        "FileStore"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let path = self.path_for(key)?;
        run_blocking(move || read_file(&path)).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let path = self.path_for(key)?;
        let dir = self.dir.clone();
        let value = value.to_string();
        run_blocking(move || write_file(&dir, &path, &value)).await
    }

    async fn remove(&self, key: &str) -> Result<(), CoreError> {
        let path = self.path_for(key)?;
        run_blocking(move || remove_file(&path)).await
    }
}
