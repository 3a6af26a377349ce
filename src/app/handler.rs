//! Input handling for the debounced search pipeline.
//!
//! This module applies host inputs to [`AppState`] and reports what changed and
//! which side effects must run.
//!
//! # Architecture
//!
//! ```text
//! set_query / tick / complete_fetch → Input → handle_input → AppState
//!                                                  │
//!                                    (changes, actions) → Controller
//! ```
//!
//! The handler is pure with respect to collaborators: fetches are returned as
//! [`Action::Fetch`] and executed by the controller.

use crate::app::observer::Change;
use crate::app::{Action, AppState};
use crate::fetch::{FetchRequest, FetchResponse};
use crate::search::encode_query;
use std::time::Instant;

/// Inputs delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// The query text was assigned.
    QueryChanged {
        /// New query text.
        query: String,
        /// When the assignment happened.
        at: Instant,
    },

    /// The main loop ticked. Releases the debounced query if it is due.
    Tick(Instant),

    /// The fetch service answered a request.
    FetchCompleted(FetchResponse),
}

/// Applies an input to the state.
///
/// Returns the observable changes, in the order they happened, and the actions to
/// execute.
///
/// # Example
///
/// ```rust
/// use eventsearch::app::{handle_input, AppState, Input};
/// use std::time::{Duration, Instant};
///
/// let t0 = Instant::now();
/// let mut state = AppState::new(Duration::from_millis(600));
///
/// handle_input(&mut state, Input::QueryChanged { query: "red sox".into(), at: t0 });
/// let (_, actions) = handle_input(&mut state, Input::Tick(t0 + Duration::from_millis(600)));
/// assert_eq!(actions.len(), 1);
/// ```
pub fn handle_input(state: &mut AppState, input: Input) -> (Vec<Change>, Vec<Action>) {
    let _span = tracing::debug_span!("handle_input", input = ?input).entered();

    match input {
        Input::QueryChanged { query, at } => {
            let mut changes = vec![];

            if state.query != query {
                state.query.clone_from(&query);
                changes.push(Change::Query);
            }

            if !state.debouncer.push(query, at) {
                tracing::trace!("duplicate query suppressed");
            }

            (changes, vec![])
        }
        Input::Tick(now) => {
            let Some(query) = state.debouncer.poll(now) else {
                return (vec![], vec![]);
            };

            if query.is_empty() {
                tracing::debug!("query cleared, resetting results");
                state.awaited_request = None;
                if state.fetched_events.take().is_some() {
                    return (vec![Change::FetchedEvents], vec![]);
                }
                return (vec![], vec![]);
            }

            let request = FetchRequest {
                id: state.issue_request(),
                query: encode_query(&query),
            };
            tracing::debug!(request_id = %request.id, query = %request.query, "debounced query fired");

            (vec![], vec![Action::Fetch(request)])
        }
        Input::FetchCompleted(response) => {
            if state.awaited_request != Some(response.id) {
                tracing::debug!(
                    request_id = %response.id,
                    awaited = ?state.awaited_request,
                    "discarding stale fetch response"
                );
                return (vec![], vec![]);
            }

            let Some(success) = response.success else {
                tracing::debug!(request_id = %response.id, "fetch completed without verdict");
                return (vec![], vec![]);
            };

            state.fetched_events = response.events;
            if success {
                tracing::info!(
                    request_id = %response.id,
                    count = state.fetched_events.as_ref().map_or(0, Vec::len),
                    "fetch succeeded"
                );
            } else {
                tracing::info!(request_id = %response.id, "fetch failed");
            }

            (vec![Change::FetchedEvents], vec![])
        }
    }
}
