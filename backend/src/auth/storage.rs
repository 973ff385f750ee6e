use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::{DairyError, DairyResult};

/// String key-value storage for the signed-in user, the server-side
/// counterpart of browser local storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> DairyResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> DairyResult<()>;
    fn remove(&self, key: &str) -> DairyResult<()>;
}

fn poisoned() -> DairyError {
    DairyError::Internal("key-value storage lock poisoned".to_string())
}

#[derive(Default)]
pub struct MemoryKv {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> DairyResult<Option<String>> {
        let entries = self.entries.lock().map_err(|_| poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> DairyResult<()> {
        let mut entries = self.entries.lock().map_err(|_| poisoned())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> DairyResult<()> {
        let mut entries = self.entries.lock().map_err(|_| poisoned())?;
        entries.remove(key);
        Ok(())
    }
}

/// Keeps every entry in one JSON object on disk, rewritten on each change.
pub struct FileKv {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileKv {
    pub fn open(path: impl Into<PathBuf>) -> DairyResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let entries = match std::fs::read(&path) {
            Ok(bytes) if !bytes.is_empty() => {
                serde_json::from_slice::<BTreeMap<String, String>>(&bytes).unwrap_or_else(|e| {
                    tracing::warn!("Session file {} is unreadable ({}), starting empty", path.display(), e);
                    BTreeMap::new()
                })
            }
            Ok(_) => BTreeMap::new(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> DairyResult<()> {
        let json = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for FileKv {
    fn get(&self, key: &str) -> DairyResult<Option<String>> {
        let entries = self.entries.lock().map_err(|_| poisoned())?;
        Ok(entries.get(key).cloned())
    }

    // Memory only takes the change once the file write has succeeded.
    fn set(&self, key: &str, value: &str) -> DairyResult<()> {
        let mut entries = self.entries.lock().map_err(|_| poisoned())?;
        let mut staged = entries.clone();
        staged.insert(key.to_string(), value.to_string());
        self.flush(&staged)?;
        *entries = staged;
        Ok(())
    }

    fn remove(&self, key: &str) -> DairyResult<()> {
        let mut entries = self.entries.lock().map_err(|_| poisoned())?;
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut staged = entries.clone();
        staged.remove(key);
        self.flush(&staged)?;
        *entries = staged;
        Ok(())
    }
}
