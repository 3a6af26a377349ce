//! Application layer coordinating search state, favorites and observers.
//!
//! # Architecture
//!
//! ```text
//! Host input → Input → handle_input → AppState mutations → Actions → EventFetcher
//!                  ↑                          │
//!                  └──── FetchResponse ───────┴──→ Change → observers
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects emitted by the handler
//! - [`controller`]: The controller bound by the UI
//! - [`handler`]: Input processing for the search pipeline
//! - [`observer`]: Change notification registry
//! - [`state`]: Search pipeline state

pub mod actions;
pub mod controller;
pub mod handler;
pub mod observer;
pub mod state;

pub use actions::Action;
pub use controller::Controller;
pub use handler::{handle_input, Input};
pub use observer::{Change, Observers, SubscriptionId};
pub use state::AppState;
