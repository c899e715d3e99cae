//! Persistence of form snapshots.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use super::FormSnapshot;
use crate::error::{EngineError, EngineResult};

/// Stores one snapshot per storage key.
pub trait SnapshotStore: Send + Sync {
    /// Returns the snapshot stored under `key`, if any.
    fn load(&self, key: &str) -> EngineResult<Option<FormSnapshot>>;

    /// Stores `snapshot` under `key`, replacing any previous one.
    fn save(&self, key: &str, snapshot: &FormSnapshot) -> EngineResult<()>;

    /// Removes the snapshot stored under `key`.
    fn clear(&self, key: &str) -> EngineResult<()>;
}

/// A [`SnapshotStore`] backed by one JSON file mapping keys to snapshots.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Creates a store for the given file. The file is created on first save.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn error(&self, message: impl ToString) -> EngineError {
        EngineError::SnapshotError {
            path: self.path.display().to_string(),
            message: message.to_string(),
        }
    }

    fn read_all(&self) -> EngineResult<BTreeMap<String, FormSnapshot>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(self.error(e)),
        };
        serde_json::from_str(&content).map_err(|e| self.error(e))
    }

    fn write_all(&self, snapshots: &BTreeMap<String, FormSnapshot>) -> EngineResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.error(e))?;
        }
        let content = serde_json::to_string_pretty(snapshots).map_err(|e| self.error(e))?;
        fs::write(&self.path, content).map_err(|e| self.error(e))
    }

    fn guard(&self) -> EngineResult<std::sync::MutexGuard<'_, ()>> {
        self.lock.lock().map_err(|_| self.error("store lock poisoned"))
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self, key: &str) -> EngineResult<Option<FormSnapshot>> {
        let _guard = self.guard()?;
        Ok(self.read_all()?.remove(key))
    }

    fn save(&self, key: &str, snapshot: &FormSnapshot) -> EngineResult<()> {
        let _guard = self.guard()?;
        let mut snapshots = self.read_all()?;
        snapshots.insert(key.to_string(), snapshot.clone());
        self.write_all(&snapshots)?;
        debug!(key, path = %self.path.display(), "Snapshot saved");
        Ok(())
    }

    fn clear(&self, key: &str) -> EngineResult<()> {
        let _guard = self.guard()?;
        let mut snapshots = self.read_all()?;
        if snapshots.remove(key).is_some() {
            self.write_all(&snapshots)?;
            debug!(key, path = %self.path.display(), "Snapshot cleared");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_store() -> JsonFileStore {
        let dir = std::env::temp_dir().join(format!("folha-snapshot-{}", Uuid::new_v4()));
        JsonFileStore::new(dir.join("snapshots.json"))
    }

    fn cleanup(store: &JsonFileStore) {
        if let Some(dir) = store.path().parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    fn snapshot(salary: &str) -> FormSnapshot {
        FormSnapshot {
            base_salary: salary.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_load_from_missing_file_is_none() {
        let store = temp_store();
        assert_eq!(store.load("folha").unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let store = temp_store();
        store.save("folha", &snapshot("3.000,00")).unwrap();

        let loaded = store.load("folha").unwrap();
        assert_eq!(loaded, Some(snapshot("3.000,00")));
        cleanup(&store);
    }

    #[test]
    fn test_save_overwrites_and_keeps_other_keys() {
        let store = temp_store();
        store.save("a", &snapshot("1,00")).unwrap();
        store.save("b", &snapshot("2,00")).unwrap();
        store.save("a", &snapshot("3,00")).unwrap();

        assert_eq!(store.load("a").unwrap(), Some(snapshot("3,00")));
        assert_eq!(store.load("b").unwrap(), Some(snapshot("2,00")));
        cleanup(&store);
    }

    #[test]
    fn test_clear_removes_only_that_key() {
        let store = temp_store();
        store.save("a", &snapshot("1,00")).unwrap();
        store.save("b", &snapshot("2,00")).unwrap();

        store.clear("a").unwrap();

        assert_eq!(store.load("a").unwrap(), None);
        assert!(store.load("b").unwrap().is_some());
        cleanup(&store);
    }

    #[test]
    fn test_corrupt_file_returns_snapshot_error() {
        let store = temp_store();
        if let Some(dir) = store.path().parent() {
            fs::create_dir_all(dir).unwrap();
        }
        fs::write(store.path(), "not json").unwrap();

        match store.load("folha") {
            Err(EngineError::SnapshotError { path, .. }) => {
                assert!(path.ends_with("snapshots.json"));
            }
            other => panic!("Expected SnapshotError, got {:?}", other),
        }
        cleanup(&store);
    }
}
