//! Durable storage for the theme preference.

use parking_lot::RwLock;
use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("preference storage is unavailable")]
    Unavailable,

    #[error("IO error on preference file `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("preference file `{0}` is corrupt")]
    Corrupt(PathBuf, #[source] serde_json::Error),
}

/// Key-value storage. Callers treat every error as "storage unavailable".
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).save(key, value)
    }
}

/// JSON object on disk; survives process restarts.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// `~` in `path` is expanded to the home directory.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let raw = path.as_ref().to_string_lossy();
        let expanded = shellexpand::tilde(&raw).into_owned();
        Self {
            path: PathBuf::from(expanded),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str(&text)
                .map_err(|err| StoreError::Corrupt(self.path.clone(), err)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(StoreError::Io(self.path.clone(), err)),
        }
    }
}

impl PreferenceStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_map()?.remove(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        // A corrupt file is replaced rather than blocking every later write
        let mut map = match self.read_map() {
            Err(StoreError::Corrupt(..)) => BTreeMap::new(),
            other => other?,
        };
        map.insert(key.to_owned(), value.to_owned());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| StoreError::Io(parent.to_path_buf(), err))?;
        }
        let json = serde_json::to_string_pretty(&map)
            .map_err(|err| StoreError::Corrupt(self.path.clone(), err))?;
        fs::write(&self.path, json).map_err(|err| StoreError::Io(self.path.clone(), err))
    }
}

/// Lives as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.read().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.write().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Storage that has been disabled; every call fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

impl PreferenceStore for UnavailableStore {
    fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn save(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_missing_file_is_unset() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.load("theme").unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/prefs.json");

        FileStore::new(&path).save("theme", "light").unwrap();
        assert_eq!(FileStore::new(&path).load("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("prefs.json"));
        store.save("other", "1").unwrap();
        store.save("theme", "dark").unwrap();
        assert_eq!(store.load("other").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_file_store_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.load("theme"), Err(StoreError::Corrupt(..))));

        store.save("theme", "dark").unwrap();
        assert_eq!(store.load("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::default();
        assert_eq!(store.load("theme").unwrap(), None);
        store.save("theme", "light").unwrap();
        assert_eq!(store.load("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_unavailable_store() {
        assert!(matches!(UnavailableStore.load("theme"), Err(StoreError::Unavailable)));
        assert!(matches!(UnavailableStore.save("theme", "dark"), Err(StoreError::Unavailable)));
    }
}
