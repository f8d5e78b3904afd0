//! File-backed JSON storage
//!
//! One pretty-printed JSON document per record at `<directory>/<id>.json`.

use crate::persistence::{PersistenceBackend, StorageResult};
use crate::record::VectorRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default storage directory, relative to the working directory
const STORAGE_DIRECTORY: &str = "storage";

/// Reference persistence backend writing JSON files
pub struct FileStorage {
    directory: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at `directory`, creating it if absent
    pub fn open(directory: impl AsRef<Path>) -> StorageResult<Self> {
        let directory = directory.as_ref().to_path_buf();
        if !directory.exists() {
            fs::create_dir_all(&directory)?;
            info!("Storage directory created at: {}", directory.display());
        }
        Ok(Self { directory })
    }

    /// Open the default `storage/` directory
    pub fn new() -> StorageResult<Self> {
        Self::open(STORAGE_DIRECTORY)
    }

    fn document_path(&self, id: &str) -> PathBuf {
        self.directory.join(format!("{}.json", id))
    }
}

impl PersistenceBackend for FileStorage {
    fn put(&self, id: &str, record: &VectorRecord) -> StorageResult<()> {
        let path = self.document_path(id);
        let file = fs::File::create(&path)?;
        serde_json::to_writer_pretty(file, record)?;
        debug!("Record {} saved into file: {}", id, path.display());
        Ok(())
    }

    fn get(&self, id: &str) -> StorageResult<Option<VectorRecord>> {
        let path = self.document_path(id);
        if !path.exists() {
            warn!("Record {} not found in file: {}", id, path.display());
            return Ok(None);
        }
        let file = fs::File::open(&path)?;
        let record: VectorRecord = serde_json::from_reader(file)?;
        debug!("Record {} loaded from file: {}", id, path.display());
        Ok(Some(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::StorageError;
    use std::io::Write;
    use tempfile::TempDir;

    fn record(text: &str) -> VectorRecord {
        VectorRecord::builder().with_content(text).build().unwrap()
    }

    #[test]
    fn test_open_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("store").join("records");
        let _storage = FileStorage::open(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_put_get_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::open(temp_dir.path()).unwrap();

        let mut stored = record("persisted text");
        stored.set_embedding(vec![0.25, 0.75]);
        storage.put(stored.id(), &stored).unwrap();

        let loaded = storage.get(stored.id()).unwrap().unwrap();
        assert_eq!(loaded, stored);
    }

    #[test]
    fn test_get_absent_id_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::open(temp_dir.path()).unwrap();
        assert!(storage.get("nope").unwrap().is_none());
    }

    #[test]
    fn test_put_overwrites_existing_entry() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::open(temp_dir.path()).unwrap();

        let mut first = record("same text");
        first.set_embedding(vec![1.0]);
        storage.put(first.id(), &first).unwrap();

        let mut second = record("same text");
        second.set_embedding(vec![2.0]);
        storage.put(second.id(), &second).unwrap();

        let loaded = storage.get(first.id()).unwrap().unwrap();
        assert_eq!(loaded.embedding(), [2.0]);
    }

    #[test]
    fn test_corrupt_payload_surfaces_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::open(temp_dir.path()).unwrap();

        let path = temp_dir.path().join("broken.json");
        let mut file = fs::File::create(path).unwrap();
        write!(file, "{{ not json").unwrap();

        let result = storage.get("broken");
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }
}
