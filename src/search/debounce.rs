//! Quiet-period debouncing driven by the host's clock.
//!
//! A [`Debouncer`] holds at most one pending value together with the instant at
//! which it becomes due. Every accepted [`push`](Debouncer::push) replaces the
//! pending value and restarts the window; [`poll`](Debouncer::poll) releases the
//! value once the window has elapsed. No timers or threads are involved: the
//! host's main loop calls `poll` on each tick, and may use
//! [`deadline`](Debouncer::deadline) to schedule that tick.
//!
//! Consecutive duplicates are dropped before they reach the window, so pushing
//! the value that was last pushed neither restarts the timer nor produces a
//! second emission.

use std::time::{Duration, Instant};

/// Default quiet period before a query is acted upon.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(600);

/// Single-slot debouncer with consecutive-duplicate suppression.
///
/// # Examples
///
/// ```
/// use eventsearch::search::Debouncer;
/// use std::time::{Duration, Instant};
///
/// let start = Instant::now();
/// let mut debouncer = Debouncer::new(Duration::from_millis(600));
///
/// debouncer.push("con", start);
/// debouncer.push("concert", start + Duration::from_millis(200));
///
/// assert_eq!(debouncer.poll(start + Duration::from_millis(700)), None);
/// assert_eq!(debouncer.poll(start + Duration::from_millis(800)), Some("concert"));
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    last_seen: Option<T>,
    pending: Option<(T, Instant)>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    /// Creates a debouncer that has seen no value yet.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            last_seen: None,
            pending: None,
        }
    }

    /// Creates a debouncer that treats `initial` as the last value seen.
    ///
    /// Pushing `initial` again is suppressed as a duplicate.
    #[must_use]
    pub const fn with_initial(window: Duration, initial: T) -> Self {
        Self {
            window,
            last_seen: Some(initial),
            pending: None,
        }
    }

    /// Offers a new value observed at `now`.
    ///
    /// Returns `false` if the value equals the previous one and was dropped.
    pub fn push(&mut self, value: T, now: Instant) -> bool {
        if self.last_seen.as_ref() == Some(&value) {
            return false;
        }

        self.last_seen = Some(value.clone());
        self.pending = Some((value, now + self.window));
        true
    }

    /// Releases the pending value if its quiet period has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.pending {
            Some((_, due)) if due <= now => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// Instant at which the pending value becomes due, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, due)| *due)
    }

    /// Returns `true` while a value is waiting for its window to elapse.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
