//! Fetch service interface.
//!
//! This module defines the request/response protocol between the controller and
//! the remote event service, and the [`EventFetcher`] seam hosts implement to
//! carry requests over the network.

pub mod fetcher;
pub mod messages;

pub use fetcher::{EventFetcher, RecordingFetcher};
pub use messages::{FetchRequest, FetchResponse, RequestId};
