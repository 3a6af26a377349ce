//! JSON file-based key-value store.
//!
//! This module provides a durable [`KeyValueStore`] that keeps every entry in a
//! single JSON document. It uses atomic file writes (write-to-temp + rename) so a
//! crash never leaves a half-written document behind.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - document loaded into memory once at open
//! - **Write**: O(n) - serializes and writes the whole document
//! - **Best for**: a handful of small preference entries

use crate::domain::error::{EventSearchError, Result};
use crate::storage::backend::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// On-disk document format.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreDocument {
    /// Version of the document format for future migrations.
    version: u32,

    /// Values by key.
    #[serde(default)]
    entries: HashMap<String, StoredValue>,
}

/// A single value as written to disk.
///
/// UTF-8 values are kept as strings so the document stays readable. Anything
/// else falls back to an array of bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredValue {
    Text(String),
    Bytes(Vec<u8>),
}

impl From<Vec<u8>> for StoredValue {
    fn from(value: Vec<u8>) -> Self {
        match String::from_utf8(value) {
            Ok(text) => Self::Text(text),
            Err(e) => Self::Bytes(e.into_bytes()),
        }
    }
}

impl StoredValue {
    fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Text(text) => text.as_bytes().to_vec(),
            Self::Bytes(bytes) => bytes.clone(),
        }
    }
}

impl Default for StoreDocument {
    fn default() -> Self {
        Self {
            version: 1,
            entries: HashMap::new(),
        }
    }
}

/// JSON file key-value store.
///
/// The whole document is kept in memory and written back on every [`set`].
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "entries": {
///     "Favorites": "[1,2]"
///   }
/// }
/// ```
///
/// [`set`]: KeyValueStore::set
pub struct JsonFileStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy of the document.
    data: StoreDocument,

    /// Set when the in-memory copy has changes not yet on disk.
    dirty: bool,
}

impl JsonFileStore {
    /// Opens a JSON store, creating parent directories as needed.
    ///
    /// If the file exists its entries are loaded, otherwise the store starts empty
    /// and the file is created on the first write.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but is not a valid store document
    /// - File permissions prevent reading
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use eventsearch::storage::JsonFileStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonFileStore::open(PathBuf::from("/tmp/eventsearch/store.json"))?;
    /// # Ok::<(), eventsearch::EventSearchError>(())
    /// ```
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening JSON store");

        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty store");
            StoreDocument::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "store opened");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Opens a JSON store, starting over if the existing document is unreadable.
    ///
    /// The corrupt file is left in place until the first write replaces it.
    ///
    /// # Errors
    ///
    /// Returns an error only for filesystem failures.
    pub fn open_or_reset(file_path: PathBuf) -> Result<Self> {
        match Self::open(file_path.clone()) {
            Err(EventSearchError::Storage(reason)) => {
                tracing::warn!(path = ?file_path, reason = %reason, "discarding unreadable store");
                Ok(Self {
                    file_path,
                    data: StoreDocument::default(),
                    dirty: false,
                })
            }
            other => other,
        }
    }

    fn load_from_file(path: &Path) -> Result<StoreDocument> {
        let contents = std::fs::read(path)?;
        let data: StoreDocument = serde_json::from_slice(&contents)
            .map_err(|e| EventSearchError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            entries = data.entries.len(),
            "loaded store document"
        );

        Ok(data)
    }

    /// Writes the document to disk if it has unsaved changes.
    ///
    /// # Errors
    ///
    /// Returns [`EventSearchError::Json`] if serialization fails, or an I/O error
    /// if the temporary write or the rename fails.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "store saved");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.data.entries.get(key).map(StoredValue::to_bytes))
    }

    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        let _span = tracing::debug_span!("json_store_set", key = %key, bytes = value.len()).entered();

        self.data.entries.insert(key.to_string(), value.into());
        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonFileStore {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty store on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}

impl std::fmt::Debug for JsonFileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileStore")
            .field("file_path", &self.file_path)
            .field("entries", &self.data.entries.len())
            .field("dirty", &self.dirty)
            .finish()
    }
}
