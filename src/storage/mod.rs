//! Key-value persistence surface
//!
//! The client store persists its whole record list as a single blob under
//! one key. The surface is deliberately minimal: get/set of string blobs,
//! synchronous, no partial updates and no schema versioning.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure reading or writing the persistence surface
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failure: {0}")]
    Io(#[from] io::Error),

    #[error("blob serialization failed: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("stored blob for key '{key}' is not valid UTF-8")]
    InvalidBlob { key: String },
}

/// Whole-blob key-value store
///
/// One key holds one serialized blob; a `set` replaces the previous blob
/// entirely. Reads of an absent key return `Ok(None)`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed store keeping one JSON file per key in a data directory
///
/// Writes go to a temporary file first and are renamed into place, so the
/// stored blob is always either the previous or the new version, never a
/// partial write.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given data directory
    ///
    /// The directory is created on the first write, not here, so a
    /// read-only session against a missing directory simply sees no data.
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self { data_dir: data_dir.into() }
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        // Keys are simple identifiers; guard the separator anyway
        let safe: String = key
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
            .collect();
        self.data_dir.join(format!("{}.json", safe))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.blob_path(key);
        match fs::read(&path) {
            Ok(bytes) => {
                let text = String::from_utf8(bytes)
                    .map_err(|_| StorageError::InvalidBlob { key: key.to_string() })?;
                Ok(Some(text))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir)?;

        let path = self.blob_path(key);
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;

        log::debug!("wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

/// In-memory store used by tests and ephemeral sessions
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.get("clients").unwrap().is_none());

        store.set("clients", "[1,2,3]").unwrap();
        assert_eq!(store.get("clients").unwrap().as_deref(), Some("[1,2,3]"));

        // A second set replaces the blob entirely
        store.set("clients", "[]").unwrap();
        assert_eq!(store.get("clients").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = std::env::temp_dir().join("lumia-storage-test");
        let _ = fs::remove_dir_all(&dir);

        let mut store = FileStore::new(&dir);
        assert!(store.get("lumia-clients").unwrap().is_none());

        store.set("lumia-clients", "{\"ok\":true}").unwrap();
        assert_eq!(
            store.get("lumia-clients").unwrap().as_deref(),
            Some("{\"ok\":true}")
        );

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_store_sanitizes_keys() {
        let store = FileStore::new("data");
        let path = store.blob_path("../evil/key");
        assert!(!path.to_string_lossy().contains(".."));
        assert!(path.to_string_lossy().ends_with(".json"));
    }
}
