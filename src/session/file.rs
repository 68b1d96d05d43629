use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{SessionStorage, StorageResult};

/// Session pair kept in a small JSON object on disk
///
/// The file is read and rewritten on every operation; deleting the last
/// key removes the file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StorageResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> StorageResult<()> {
        if entries.is_empty() {
            if self.path.exists() {
                std::fs::remove_file(&self.path)?;
            }
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;
    use crate::session::{SessionStore, StorageError, TOKEN_KEY};
    use tempfile::tempdir;

    #[test]
    fn test_file_storage_basic_operations() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested").join("session.json"));

        assert_eq!(storage.read(TOKEN_KEY).unwrap(), None);
        storage.write(TOKEN_KEY, "tok-1").unwrap();
        assert!(storage.path().exists());
        assert_eq!(storage.read(TOKEN_KEY).unwrap().as_deref(), Some("tok-1"));

        storage.delete(TOKEN_KEY).unwrap();
        assert!(!storage.path().exists());
        storage.delete(TOKEN_KEY).unwrap();
    }

    #[test]
    fn test_session_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        {
            let mut store = SessionStore::new(FileStorage::new(&path));
            let user = User {
                username: "demo".to_string(),
                ..Default::default()
            };
            store.login(user, "tok-1".to_string()).unwrap();
        }

        let mut store = SessionStore::new(FileStorage::new(&path));
        assert_eq!(store.restore().map(|s| s.token.as_str()), Some("tok-1"));

        store.logout().unwrap();
        assert!(!path.exists());
        assert!(SessionStore::new(FileStorage::new(&path)).restore().is_none());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(storage.read(TOKEN_KEY), Err(StorageError::Serialization(_))));
    }
}
