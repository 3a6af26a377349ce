//! Change notification for bound views.
//!
//! Views subscribe a listener and are told which part of the controller state
//! changed. Listeners run synchronously, in subscription order, after the state
//! has been updated (and, for favorites, persisted).

use std::fmt;

/// Part of the observable state that changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Change {
    /// The query text was reassigned to a different value.
    Query,
    /// The fetched results were replaced or cleared.
    FetchedEvents,
    /// The favorites set was mutated.
    Favorites,
}

/// Handle returned by [`Observers::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(Change)>;

/// Registry of change listeners.
#[derive(Default)]
pub struct Observers {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Observers {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` and returns its subscription handle.
    pub fn subscribe(&mut self, listener: impl FnMut(Change) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if the handle was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Invokes every listener with `change`.
    pub fn notify(&mut self, change: Change) {
        tracing::trace!(?change, listeners = self.listeners.len(), "notifying observers");
        for (_, listener) in &mut self.listeners {
            listener(change);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns `true` if nobody is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
