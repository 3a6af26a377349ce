//! Seam between the controller and the remote event service.

use crate::fetch::messages::FetchRequest;

/// Client that starts event searches on behalf of the controller.
///
/// Implementations start the request and return immediately. The outcome is
/// delivered later, on the host's main loop, through
/// [`Controller::complete_fetch`](crate::app::Controller::complete_fetch).
///
/// Closures taking a [`FetchRequest`] implement this trait.
///
/// # Examples
///
/// ```
/// use eventsearch::fetch::{EventFetcher, FetchRequest, RequestId};
///
/// let mut sent = Vec::new();
/// let mut fetcher = |request: FetchRequest| sent.push(request.query);
/// fetcher.fetch_events(FetchRequest { id: RequestId(1), query: "red+sox".into() });
/// assert_eq!(sent, vec!["red+sox"]);
/// ```
pub trait EventFetcher {
    /// Starts fetching events for `request`.
    fn fetch_events(&mut self, request: FetchRequest);
}

impl<F: FnMut(FetchRequest)> EventFetcher for F {
    fn fetch_events(&mut self, request: FetchRequest) {
        self(request);
    }
}

/// Fetcher that records requests instead of sending them.
///
/// Useful for hosts without network access and in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingFetcher {
    requests: Vec<FetchRequest>,
}

impl RecordingFetcher {
    /// Creates a fetcher with no recorded requests.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All requests started so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> &[FetchRequest] {
        &self.requests
    }

    /// The most recently started request.
    #[must_use]
    pub fn last(&self) -> Option<&FetchRequest> {
        self.requests.last()
    }
}

impl EventFetcher for RecordingFetcher {
    fn fetch_events(&mut self, request: FetchRequest) {
        tracing::trace!(request_id = %request.id, query = %request.query, "recording fetch");
        self.requests.push(request);
    }
}
