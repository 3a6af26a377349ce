//! Request and response types exchanged with the fetch service.
//!
//! Every request carries a [`RequestId`] issued by the controller. The host hands
//! the matching [`FetchResponse`] back on its main loop once the service answers,
//! and the controller uses the id to ignore answers to superseded queries.

use crate::domain::Event;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Monotonically increasing identifier of a fetch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestId(pub u64);

impl RequestId {
    /// Returns the id following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A search to run against the fetch service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest {
    /// Identifier to echo back in the response.
    pub id: RequestId,

    /// Encoded query, spaces already replaced with `+`.
    pub query: String,
}

/// Outcome of a fetch as reported by the service client.
///
/// `success` is optional because the client may complete without a verdict; such
/// completions are ignored. When a verdict is present, `events` replaces the
/// displayed results even if it is `None` or empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResponse {
    /// Identifier of the request this answers.
    pub id: RequestId,

    /// Whether the fetch succeeded, if the client reported it.
    pub success: Option<bool>,

    /// Events returned by the service.
    pub events: Option<Vec<Event>>,
}

impl FetchResponse {
    /// A successful response carrying `events`.
    #[must_use]
    pub const fn success(id: RequestId, events: Vec<Event>) -> Self {
        Self {
            id,
            success: Some(true),
            events: Some(events),
        }
    }

    /// A failed response without events.
    #[must_use]
    pub const fn failure(id: RequestId) -> Self {
        Self {
            id,
            success: Some(false),
            events: None,
        }
    }

    /// A response without a success verdict.
    #[must_use]
    pub const fn indeterminate(id: RequestId) -> Self {
        Self {
            id,
            success: None,
            events: None,
        }
    }
}
