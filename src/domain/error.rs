//! Error types for the event search controller.
//!
//! This module defines the centralized error type [`EventSearchError`] and a type
//! alias [`Result`] used throughout the crate. Errors are implemented with the
//! `thiserror` crate.
//!
//! Most errors never reach the host: favorites persistence failures are logged and
//! swallowed, and date parse failures collapse to an empty display string. The
//! fallible building blocks still report them so they can be tested and reused.

use thiserror::Error;

/// The main error type for event search operations.
///
/// # Examples
///
/// ```
/// use eventsearch::EventSearchError;
///
/// fn open_store() -> Result<(), EventSearchError> {
///     Err(EventSearchError::Storage("store is read-only".to_string()))
/// }
///
/// assert!(open_store().is_err());
/// ```
#[derive(Debug, Error)]
pub enum EventSearchError {
    /// Key-value storage operation failed.
    ///
    /// The string describes what went wrong (unreadable document, failed write).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or decoding a JSON payload failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An event date string did not match `yyyy-MM-ddTHH:mm:ss`.
    #[error("invalid event date {input:?}: {source}")]
    DateParse {
        /// The rejected input.
        input: String,
        /// Underlying chrono parse failure.
        #[source]
        source: chrono::ParseError,
    },

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for event search operations.
pub type Result<T> = std::result::Result<T, EventSearchError>;
