//! Key-value storage abstraction.
//!
//! This module defines the [`KeyValueStore`] trait that the favorites store
//! persists through. Hosts inject whichever backend fits their platform; the
//! crate ships an in-memory store and a JSON file store.
//!
//! # Design Philosophy
//!
//! The trait mirrors the small surface of a platform preferences store: opaque
//! byte values under string keys. Encoding is the caller's concern.

use crate::domain::error::Result;

/// Abstraction over durable key-value storage.
///
/// # Implementations
///
/// - [`MemoryStore`](crate::storage::MemoryStore): `HashMap` backed, not durable
/// - [`JsonFileStore`](crate::storage::JsonFileStore): JSON document with atomic writes
///
/// # Examples
///
/// ```
/// use eventsearch::storage::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// store.set("Favorites", b"[1,2]".to_vec())?;
/// assert_eq!(store.get("Favorites")?, Some(b"[1,2]".to_vec()));
/// # Ok::<(), eventsearch::EventSearchError>(())
/// ```
pub trait KeyValueStore {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if nothing is stored under the key.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. Backends that persist to disk may
    /// have updated their in-memory copy before failing.
    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        (**self).set(key, value)
    }
}
