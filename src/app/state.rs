//! Search state owned by the controller.
//!
//! [`AppState`] holds the query, the results of the last accepted fetch, the
//! debouncer sitting between the two, and the bookkeeping used to match fetch
//! responses to the newest request. It is mutated only by
//! [`handle_input`](crate::app::handle_input).

use crate::domain::Event;
use crate::fetch::RequestId;
use crate::search::Debouncer;
use std::time::Duration;

/// Search pipeline state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current query text. Empty means no search is active.
    pub query: String,

    /// Results of the last accepted fetch.
    ///
    /// `None` while no search is active or before the first fetch completes.
    pub fetched_events: Option<Vec<Event>>,

    /// Debouncer fed with every query assignment.
    pub debouncer: Debouncer<String>,

    /// Request whose response is currently awaited, if any.
    ///
    /// Responses carrying any other id are stale and dropped.
    pub awaited_request: Option<RequestId>,

    /// Last id handed out.
    last_request: RequestId,
}

impl AppState {
    /// Creates an idle state debouncing with the given quiet period.
    #[must_use]
    pub fn new(debounce: Duration) -> Self {
        Self {
            query: String::new(),
            fetched_events: None,
            debouncer: Debouncer::with_initial(debounce, String::new()),
            awaited_request: None,
            last_request: RequestId(0),
        }
    }

    /// Issues a fresh request id and marks it as the awaited one.
    pub fn issue_request(&mut self) -> RequestId {
        self.last_request = self.last_request.next();
        self.awaited_request = Some(self.last_request);
        self.last_request
    }
}
