//! Key-value blob storage for persisted board state.
//!
//! The persistence layer reads and writes opaque JSON blobs under string
//! keys. The store is injected into the library at construction time, so
//! startup ordering and failure handling stay explicit and tests run against
//! an in-memory store.

use crate::error::BoardResult;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Minimal key-value blob store.
pub trait BlobStore {
    /// Read the blob under `key`, or `None` if the key is absent.
    fn read(&self, key: &str) -> BoardResult<Option<String>>;

    /// Write the blob under `key`, completing or failing as a unit.
    fn write(&mut self, key: &str, value: &str) -> BoardResult<()>;

    /// Remove the blob under `key`. Absent keys are a no-op.
    fn remove(&mut self, key: &str) -> BoardResult<()>;
}

// ============================================================================
// File-backed store
// ============================================================================

/// One JSON file per key under an application data directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Store rooted at an explicit directory, created if missing.
    pub fn new(root: impl Into<PathBuf>) -> BoardResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Store rooted at the platform data directory
    /// (`<data_dir>/moodboard/`).
    pub fn default_location() -> BoardResult<Self> {
        let base = dirs::data_dir()
            .ok_or_else(|| std::io::Error::other("no platform data directory"))?;
        Self::new(base.join("moodboard"))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl BlobStore for FileStore {
    fn read(&self, key: &str) -> BoardResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&mut self, key: &str, value: &str) -> BoardResult<()> {
        // Write to a temp file in the same directory, then rename over the
        // target: a failed write never leaves a truncated blob behind.
        let mut tmp = tempfile::NamedTempFile::new_in(&self.root)?;
        tmp.write_all(value.as_bytes())?;
        tmp.persist(self.path_for(key)).map_err(|e| e.error)?;
        debug!(key, bytes = value.len(), "blob written");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> BoardResult<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

// ============================================================================
// In-memory store
// ============================================================================

/// HashMap-backed store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a key, e.g. with a corrupt blob for failure tests.
    pub fn with_blob(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.blobs.insert(key.into(), value.into());
        self
    }
}

impl BlobStore for MemoryStore {
    fn read(&self, key: &str) -> BoardResult<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> BoardResult<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> BoardResult<()> {
        self.blobs.remove(key);
        Ok(())
    }
}
