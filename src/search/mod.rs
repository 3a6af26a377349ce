//! Building blocks of the debounced search pipeline.
//!
//! - `debounce`: quiet-period debouncing with duplicate suppression
//! - `query`: encoding of user queries for the fetch service

pub mod debounce;
pub mod query;

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use query::encode_query;
