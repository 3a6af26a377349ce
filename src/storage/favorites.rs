//! Favorited event ids mirrored to key-value storage.
//!
//! The set is loaded once when the store is created and re-encoded in full after
//! every mutation. Persistence is best-effort: a missing or undecodable entry
//! loads as an empty set, and failed writes are logged and dropped.

use crate::domain::{Event, EventId};
use crate::storage::backend::KeyValueStore;
use std::collections::BTreeSet;

/// Key under which the encoded favorites set is stored.
pub const FAVORITES_KEY: &str = "Favorites";

/// In-memory favorites set backed by a [`KeyValueStore`].
///
/// The encoded form is a JSON array of integers in ascending order, e.g. `[3,17,42]`.
///
/// # Examples
///
/// ```
/// use eventsearch::storage::{FavoritesStore, MemoryStore};
/// use eventsearch::Event;
///
/// let mut favorites = FavoritesStore::load(MemoryStore::new());
/// let event = Event::new(42, "Jazz in the Park");
///
/// favorites.add(&event);
/// assert!(favorites.contains(&event));
///
/// let reloaded = FavoritesStore::load(favorites.into_store());
/// assert!(reloaded.contains(&event));
/// ```
#[derive(Debug)]
pub struct FavoritesStore<S> {
    store: S,
    ids: BTreeSet<EventId>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Loads the favorites set from `store`.
    ///
    /// Never fails: read errors, a missing key or an undecodable value all yield an
    /// empty set.
    pub fn load(store: S) -> Self {
        let _span = tracing::debug_span!("favorites_load").entered();

        let ids = match store.get(FAVORITES_KEY) {
            Ok(Some(bytes)) => serde_json::from_slice::<BTreeSet<EventId>>(&bytes)
                .unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "discarding undecodable favorites");
                    BTreeSet::new()
                }),
            Ok(None) => {
                tracing::debug!("no persisted favorites");
                BTreeSet::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read favorites");
                BTreeSet::new()
            }
        };

        tracing::debug!(count = ids.len(), "favorites loaded");
        Self { store, ids }
    }

    /// Returns the current set of favorited ids.
    #[must_use]
    pub const fn ids(&self) -> &BTreeSet<EventId> {
        &self.ids
    }

    /// Returns `true` if no event is favorited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns `true` if `event` is favorited.
    #[must_use]
    pub fn contains(&self, event: &Event) -> bool {
        self.ids.contains(&event.id)
    }

    /// Favorites `event` and persists the set.
    ///
    /// Returns `true` if the id was not already present.
    pub fn add(&mut self, event: &Event) -> bool {
        let inserted = self.ids.insert(event.id);
        tracing::debug!(event_id = event.id, inserted, "favorite added");
        self.save();
        inserted
    }

    /// Removes `event` from the favorites and persists the set.
    ///
    /// Returns `true` if the id was present.
    pub fn remove(&mut self, event: &Event) -> bool {
        let removed = self.ids.remove(&event.id);
        tracing::debug!(event_id = event.id, removed, "favorite removed");
        self.save();
        removed
    }

    /// Encodes the full set and writes it under [`FAVORITES_KEY`].
    ///
    /// Failures are logged and otherwise ignored.
    pub fn save(&mut self) {
        let encoded = match serde_json::to_vec(&self.ids) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode favorites");
                return;
            }
        };

        if let Err(e) = self.store.set(FAVORITES_KEY, encoded) {
            tracing::warn!(error = %e, "failed to persist favorites");
        }
    }

    /// Returns the backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the favorites and returns the backing store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{EventSearchError, Result};
    use crate::storage::MemoryStore;

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<Vec<u8>>> {
            Err(EventSearchError::Storage("unavailable".to_string()))
        }

        fn set(&mut self, _key: &str, _value: Vec<u8>) -> Result<()> {
            Err(EventSearchError::Storage("read-only".to_string()))
        }
    }

    fn event(id: EventId) -> Event {
        Event::new(id, format!("event {id}"))
    }

    #[test]
    fn test_load_absent_key_is_empty() {
        let favorites = FavoritesStore::load(MemoryStore::new());
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_load_corrupt_value_is_empty() {
        let store = MemoryStore::with_entry(FAVORITES_KEY, b"{\"oops\":".to_vec());
        let favorites = FavoritesStore::load(store);
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_load_wrong_shape_is_empty() {
        let store = MemoryStore::with_entry(FAVORITES_KEY, b"[\"a\",\"b\"]".to_vec());
        assert!(FavoritesStore::load(store).is_empty());
    }

    #[test]
    fn test_load_existing_value() {
        let store = MemoryStore::with_entry(FAVORITES_KEY, b"[4,1,9]".to_vec());
        let favorites = FavoritesStore::load(store);
        assert_eq!(favorites.ids().iter().copied().collect::<Vec<_>>(), vec![1, 4, 9]);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut favorites = FavoritesStore::load(MemoryStore::new());

        assert!(favorites.add(&event(5)));
        let once = favorites.ids().clone();
        assert!(!favorites.add(&event(5)));

        assert_eq!(favorites.ids(), &once);
        assert_eq!(favorites.ids().len(), 1);
    }

    #[test]
    fn test_remove_non_member_is_noop() {
        let mut favorites = FavoritesStore::load(MemoryStore::new());
        favorites.add(&event(1));

        assert!(!favorites.remove(&event(2)));
        assert!(favorites.contains(&event(1)));
        assert_eq!(favorites.ids().len(), 1);
    }

    #[test]
    fn test_mutations_persist_immediately() {
        let mut favorites = FavoritesStore::load(MemoryStore::new());
        favorites.add(&event(10));
        favorites.add(&event(3));

        let stored = favorites.store().get(FAVORITES_KEY).unwrap();
        assert_eq!(stored, Some(b"[3,10]".to_vec()));

        favorites.remove(&event(10));
        let stored = favorites.store().get(FAVORITES_KEY).unwrap();
        assert_eq!(stored, Some(b"[3]".to_vec()));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let mut favorites = FavoritesStore::load(MemoryStore::new());
        for id in [0, 7, 1_000_000, i64::MAX] {
            favorites.add(&event(id));
        }
        let expected = favorites.ids().clone();

        let reloaded = FavoritesStore::load(favorites.into_store());
        assert_eq!(reloaded.ids(), &expected);
    }

    #[test]
    fn test_storage_failures_are_swallowed() {
        let mut favorites = FavoritesStore::load(ReadOnlyStore);
        assert!(favorites.is_empty());

        favorites.add(&event(1));
        assert!(favorites.contains(&event(1)));
    }
}
