//! Domain layer for the event search controller.
//!
//! This module contains the core domain types, independent of storage and of the
//! host that drives the controller.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`event`]: Event record as returned by the fetch service
//! - [`date`]: Display formatting for event timestamps

pub mod date;
pub mod error;
pub mod event;

pub use date::format_date;
pub use error::{EventSearchError, Result};
pub use event::{Event, EventId};
