use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// String-valued keyed slots backing a cart. Implementations can use the
/// filesystem, memory, or whatever the host device persists.
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<S: StorageBackend + ?Sized> StorageBackend for Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// In-memory backend, used as a test double.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.slots
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.slots.lock().unwrap().remove(key);
    }
}

/// Durable backend keeping one file per key under a directory.
///
/// Write failures are logged and otherwise swallowed; a full disk degrades
/// to a cart that does not persist, the same way a full storage quota does
/// in a browser.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.slot_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = fs::create_dir_all(&self.dir) {
            tracing::warn!(error = %err, "failed to create storage directory");
            return;
        }
        if let Err(err) = fs::write(self.slot_path(key), value) {
            tracing::warn!(error = %err, key, "failed to write storage slot");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(err) = fs::remove_file(self.slot_path(key)) {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(error = %err, key, "failed to remove storage slot");
            }
        }
    }
}
