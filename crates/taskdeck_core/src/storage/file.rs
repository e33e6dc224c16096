//! File-backed storage, one file per key under a root directory.
//!
//! # Responsibility
//! - Persist each storage slot as `<root>/<key>.json`.
//! - Keep whole-value overwrite semantics matching the trait contract.
//!
//! # Invariants
//! - Keys map to plain file names; path separators in keys are rejected
//!   instead of escaping the root directory.

use std::fs;
use std::path::{Path, PathBuf};

use super::{StorageBackend, StorageError, StorageResult};

/// Durable backend for desktop sessions.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Opens a file storage rooted at `root`, creating the directory when
    /// missing.
    pub fn open(root: impl AsRef<Path>) -> StorageResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn slot_path(&self, key: &str) -> StorageResult<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) {
            return Err(StorageError::Backend(format!(
                "invalid storage key `{key}`"
            )));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.slot_path(key)?;
        fs::write(&path, value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_keys_with_path_separators() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        let err = storage.read("../escape").unwrap_err();
        assert!(matches!(err, StorageError::Backend(_)));
    }
}
