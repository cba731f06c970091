//! File-backed key-value slot: one `<key>.json` file per key.

use std::fs;
use std::path::{Path, PathBuf};

use schoolbook_core::error::StorageError;
use schoolbook_core::traits::KeyValueStore;

/// Durable slot storing each key as a file inside a data directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are fixed, internal identifiers, but keep them filesystem
        // safe anyway.
        let safe: String = key
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{safe}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let path = self.path_for(key);
        fs::write(&path, value)?;
        tracing::debug!("wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn get_missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert!(store.get("school-admin-store").unwrap().is_none());
    }

    #[test]
    fn set_then_get_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.set("school-admin-store", b"{\"loaded\":false}").unwrap();
        let bytes = store.get("school-admin-store").unwrap().unwrap();
        assert_eq!(bytes, b"{\"loaded\":false}");
    }

    #[test]
    fn set_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.set("k", b"one").unwrap();
        store.set("k", b"two").unwrap();
        assert_eq!(store.get("k").unwrap().unwrap(), b"two");
    }

    #[test]
    fn open_creates_nested_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileStore::open(&nested).unwrap();
        store.set("k", b"v").unwrap();
        assert!(nested.join("k.json").exists());
    }

    #[test]
    fn keys_are_sanitized_for_the_filesystem() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        store.set("../escape/attempt", b"v").unwrap();
        assert_eq!(store.get("../escape/attempt").unwrap().unwrap(), b"v");
        // Nothing was written outside the data directory.
        assert!(!dir.path().parent().unwrap().join("escape").exists());
    }
}
