//! File-backed store.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{KvStore, StoreError};

/// Store persisted as a single JSON object on disk.
///
/// Every write rewrites the whole file through a temp file, `fsync` and
/// `rename`, so readers observe either the previous or the new contents.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, creating it lazily on first write.
    ///
    /// A missing or empty file opens as an empty store. A file that is not a
    /// JSON object of strings is moved aside to `<path>.corrupt` and the
    /// store opens empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    Self::quarantine(&path, &e)?;
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(StoreError::Open {
                    path,
                    message: e.to_string(),
                })
            }
        };

        debug!(path = %path.display(), keys = entries.len(), "opened file store");
        Ok(Self { path, entries })
    }

    /// Move an unreadable store file out of the way so the next flush can
    /// replace it.
    fn quarantine(path: &Path, error: &serde_json::Error) -> Result<(), StoreError> {
        let backup = Self::corrupt_path(path);
        warn!(
            path = %path.display(),
            backup = %backup.display(),
            error = %error,
            "store file is corrupt, starting empty"
        );
        std::fs::rename(path, &backup).map_err(|e| StoreError::Open {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Where a corrupt store file is moved to.
    pub fn corrupt_path(path: &Path) -> PathBuf {
        let mut name = path.as_os_str().to_os_string();
        name.push(".corrupt");
        PathBuf::from(name)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(StoreError::Write)?;
            }
        }

        let bytes = serde_json::to_vec_pretty(&self.entries)?;

        let temp_path = self.path.with_extension("tmp");
        let mut file = std::fs::File::create(&temp_path).map_err(StoreError::Write)?;
        file.write_all(&bytes).map_err(StoreError::Write)?;
        file.sync_all().map_err(StoreError::Write)?;

        if let Err(e) = std::fs::rename(&temp_path, &self.path) {
            warn!(path = %self.path.display(), error = %e, "failed to replace store file");
            let _ = std::fs::remove_file(&temp_path);
            return Err(StoreError::Write(e));
        }

        Ok(())
    }
}

impl KvStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush() {
            // Keep memory in step with what is on disk.
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let Some(previous) = self.entries.remove(key) else {
            return Ok(());
        };
        if let Err(e) = self.flush() {
            self.entries.insert(key.to_string(), previous);
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("cart.json")).unwrap();
        assert!(store.load("anything").unwrap().is_none());
    }

    #[test]
    fn test_save_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");

        let mut store = FileStore::open(&path).unwrap();
        store.save("@RocketShoes:cart", r#"[{"id":1}]"#).unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.load("@RocketShoes:cart").unwrap().as_deref(),
            Some(r#"[{"id":1}]"#)
        );
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");

        let mut store = FileStore::open(&path).unwrap();
        store.save("k", "v").unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("cart.json");

        let mut store = FileStore::open(&path).unwrap();
        store.save("k", "v").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");

        let mut store = FileStore::open(&path).unwrap();
        store.save("a", "1").unwrap();
        store.save("b", "2").unwrap();
        store.remove("a").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert!(reopened.load("a").unwrap().is_none());
        assert_eq!(reopened.load("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_open_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        std::fs::write(&path, "not json at all").unwrap();

        let mut store = FileStore::open(&path).unwrap();
        assert!(store.load("@RocketShoes:cart").unwrap().is_none());

        let backup = FileStore::corrupt_path(&path);
        assert_eq!(std::fs::read_to_string(&backup).unwrap(), "not json at all");
        assert!(!path.exists());

        store.save("k", "v").unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.load("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_corrupt_path() {
        assert_eq!(
            FileStore::corrupt_path(Path::new("/tmp/store.json")),
            PathBuf::from("/tmp/store.json.corrupt")
        );
    }

    #[test]
    fn test_failed_write_rolls_back_memory() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes the final rename fail.
        let path = dir.path().join("cart.json");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("occupied"), "x").unwrap();

        let mut store = FileStore {
            path: path.clone(),
            entries: BTreeMap::new(),
        };
        assert!(store.save("k", "v").is_err());
        assert!(store.load("k").unwrap().is_none());
    }
}
