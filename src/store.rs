//! Key-value persistence backends for the portfolio and watchlist.
//!
//! Collections are stored as whole JSON documents under fixed string keys and
//! rewritten in full on every change. The SDK only depends on the
//! [`KeyValueStore`] trait, so any backend can be injected.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use log::warn;
use tempfile::NamedTempFile;

use crate::config;
use crate::error::{PennyStockError, Result};

/// A string-keyed store of string documents.
///
/// Writes to a single key are expected to be atomic; nothing else is assumed.
pub trait KeyValueStore: Send {
    /// Read the document stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the document stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// Ephemeral in-process store. Contents are lost on drop.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// Directory-backed store holding one `<key>.json` file per key.
pub struct FileStore {
    /// Directory where documents are stored.
    pub dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// If `dir` is `None`, uses the platform data directory
    /// (see [`config::default_store_dir`]).
    pub fn new(dir: Option<PathBuf>) -> Result<Self> {
        let dir = dir.unwrap_or_else(config::default_store_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(PennyStockError::InvalidArgument(format!(
                "Invalid store key: {:?}",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    /// A file that cannot be read as UTF-8 text is deleted and reads as
    /// absent.
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) => {
                warn!("Corrupt store file {}, removing: {}", path.display(), e);
                let _ = fs::remove_file(&path);
                Ok(None)
            }
        }
    }

    /// Writes to a temp file in the same directory and renames it over the
    /// target, so readers never observe a partially written document.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&path).map_err(|e| {
            warn!("Failed to persist {}: {}", path.display(), e.error);
            PennyStockError::Io(e.error)
        })?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
