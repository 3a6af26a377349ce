//! The search/favorites controller bound by the UI.
//!
//! [`Controller`] owns the search state, the favorites store and the observer
//! registry. The host drives it from a single main loop:
//!
//! 1. forward query edits with [`set_query`](Controller::set_query)
//! 2. call [`tick`](Controller::tick) periodically, or at
//!    [`next_deadline`](Controller::next_deadline)
//! 3. hand fetch results back with [`complete_fetch`](Controller::complete_fetch)
//!
//! Favorites mutations are applied, persisted and then announced to observers.

use crate::app::observer::{Change, Observers, SubscriptionId};
use crate::app::{handle_input, Action, AppState, Input};
use crate::domain::{date, Event, EventId};
use crate::fetch::{EventFetcher, FetchResponse};
use crate::storage::{FavoritesStore, KeyValueStore};
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// Presentation controller for event search and favorites.
///
/// # Example
///
/// ```rust
/// use eventsearch::app::Controller;
/// use eventsearch::fetch::{FetchResponse, RecordingFetcher};
/// use eventsearch::storage::MemoryStore;
/// use eventsearch::Event;
/// use std::time::{Duration, Instant};
///
/// let mut controller = Controller::new(MemoryStore::new(), RecordingFetcher::new(), Duration::from_millis(600));
/// let t0 = Instant::now();
///
/// controller.set_query_at("red sox", t0);
/// controller.tick(t0 + Duration::from_millis(600));
///
/// let request = controller.fetcher().last().unwrap().clone();
/// assert_eq!(request.query, "red+sox");
///
/// controller.complete_fetch(FetchResponse::success(request.id, vec![Event::new(1, "Opening Day")]));
/// assert_eq!(controller.fetched_events().map(<[Event]>::len), Some(1));
/// ```
pub struct Controller<S, F> {
    state: AppState,
    favorites: FavoritesStore<S>,
    fetcher: F,
    observers: Observers,
}

impl<S: KeyValueStore, F: EventFetcher> Controller<S, F> {
    /// Creates a controller, loading favorites from `store`.
    pub fn new(store: S, fetcher: F, debounce: Duration) -> Self {
        tracing::debug!(debounce_ms = debounce.as_millis(), "creating controller");

        Self {
            state: AppState::new(debounce),
            favorites: FavoritesStore::load(store),
            fetcher,
            observers: Observers::new(),
        }
    }

    /// Current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.state.query
    }

    /// Assigns the query text, timestamped now.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.set_query_at(query, Instant::now());
    }

    /// Assigns the query text as of `at`.
    pub fn set_query_at(&mut self, query: impl Into<String>, at: Instant) {
        self.dispatch(Input::QueryChanged {
            query: query.into(),
            at,
        });
    }

    /// Advances the debounce clock to `now`.
    ///
    /// Returns `true` if a debounced query was acted upon (fetched or cleared).
    pub fn tick(&mut self, now: Instant) -> bool {
        let was_pending = self.state.debouncer.is_pending();
        self.dispatch(Input::Tick(now));
        was_pending && !self.state.debouncer.is_pending()
    }

    /// When the next [`tick`](Self::tick) has work to do, if anything is pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.state.debouncer.deadline()
    }

    /// Delivers the outcome of a fetch started through the fetcher.
    pub fn complete_fetch(&mut self, response: FetchResponse) {
        self.dispatch(Input::FetchCompleted(response));
    }

    /// Results of the last accepted fetch, `None` when no search is active.
    #[must_use]
    pub fn fetched_events(&self) -> Option<&[Event]> {
        self.state.fetched_events.as_deref()
    }

    /// Favorited event ids.
    #[must_use]
    pub const fn favorite_ids(&self) -> &BTreeSet<EventId> {
        self.favorites.ids()
    }

    /// Returns `true` if nothing is favorited.
    #[must_use]
    pub fn favorites_is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    /// Returns `true` if `event` is favorited.
    #[must_use]
    pub fn is_favorite(&self, event: &Event) -> bool {
        self.favorites.contains(event)
    }

    /// Favorites `event`, persists, then notifies observers.
    pub fn add_favorite(&mut self, event: &Event) {
        self.favorites.add(event);
        self.observers.notify(Change::Favorites);
    }

    /// Unfavorites `event`, persists, then notifies observers.
    pub fn remove_favorite(&mut self, event: &Event) {
        self.favorites.remove(event);
        self.observers.notify(Change::Favorites);
    }

    /// Formats a service timestamp for display. See [`date::format_date`].
    #[must_use]
    pub fn format_date(&self, input: &str) -> String {
        date::format_date(input)
    }

    /// Registers a change listener.
    pub fn subscribe(&mut self, listener: impl FnMut(Change) + 'static) -> SubscriptionId {
        self.observers.subscribe(listener)
    }

    /// Removes a change listener. Returns `false` if the handle was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// The fetcher requests are sent through.
    #[must_use]
    pub const fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// The key-value store favorites persist to.
    #[must_use]
    pub const fn store(&self) -> &S {
        self.favorites.store()
    }

    /// Consumes the controller and returns its store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.favorites.into_store()
    }

    fn dispatch(&mut self, input: Input) {
        let (changes, actions) = handle_input(&mut self.state, input);

        for action in actions {
            self.execute(action);
        }
        for change in changes {
            self.observers.notify(change);
        }
    }

    fn execute(&mut self, action: Action) {
        match action {
            Action::Fetch(request) => {
                tracing::debug!(request_id = %request.id, query = %request.query, "starting fetch");
                self.fetcher.fetch_events(request);
            }
        }
    }
}

impl<S, F> std::fmt::Debug for Controller<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("state", &self.state)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}
