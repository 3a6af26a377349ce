//! Side effects requested by the input handler.
//!
//! The handler never touches collaborators itself. It returns [`Action`]s that
//! the [`Controller`](crate::app::Controller) executes in order.

use crate::fetch::FetchRequest;

/// Commands executed by the controller after an input has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Start a search through the configured fetcher.
    Fetch(FetchRequest),
}
