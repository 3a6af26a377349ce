//! Eventsearch: the presentation-binding layer of an event search app.
//!
//! The crate provides a UI-facing controller that:
//! - Debounces search input and starts remote event fetches
//! - Discards answers to superseded searches
//! - Keeps a set of favorited event ids persisted in key-value storage
//! - Formats service timestamps for display in US Eastern standard time
//! - Notifies bound views when observable state changes

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host main loop (UI toolkit, app shell)             │  ← set_query / tick
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Controller and observers                         │
//! │  - Input handling, actions                          │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Search        │   │ Storage       │   │ Fetch         │
//! │ (search/)     │   │ (storage/)    │   │ (fetch/)      │
//! │ - Debouncer   │   │ - KV backends │   │ - Requests    │
//! │ - Encoding    │   │ - Favorites   │   │ - Fetcher seam│
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/): Event, errors, date formatting   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Controller, input handler and observers
//! - [`domain`]: Event model, error types, date formatting
//! - [`fetch`]: Fetch request/response protocol and fetcher seam
//! - [`search`]: Debouncer and query encoding
//! - [`storage`]: Key-value backends and the favorites store
//! - [`observability`]: `tracing` subscriber setup
//!
//! # Example
//!
//! ```rust
//! use eventsearch::{initialize, Config};
//! use eventsearch::fetch::FetchRequest;
//! use std::time::{Duration, Instant};
//!
//! let mut sent = Vec::new();
//! let mut controller = initialize(&Config::default(), |request: FetchRequest| sent.push(request))?;
//!
//! let t0 = Instant::now();
//! controller.set_query_at("jazz festival", t0);
//! controller.tick(t0 + Duration::from_millis(600));
//! drop(controller);
//!
//! assert_eq!(sent[0].query, "jazz+festival");
//! # Ok::<(), eventsearch::EventSearchError>(())
//! ```

pub mod app;
pub mod domain;
pub mod fetch;
pub mod observability;
pub mod search;
pub mod storage;

pub use app::{Change, Controller, SubscriptionId};
pub use domain::{format_date, Event, EventId, EventSearchError, Result};

use crate::fetch::EventFetcher;
use crate::search::DEFAULT_DEBOUNCE;
use crate::storage::{JsonFileStore, KeyValueStore, MemoryStore};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Controller configuration supplied by the host.
///
/// # Example
///
/// ```toml
/// debounce_ms = 600
/// store_path = "/var/lib/app/eventsearch.json"
/// trace_level = "debug"
/// log_file = "/var/log/app/eventsearch.log"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Quiet period before a query is acted upon. Default: 600 ms
    pub debounce: Duration,

    /// JSON file holding persisted state. `None` keeps state in memory only.
    pub store_path: Option<PathBuf>,

    /// Tracing filter directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// Rotating log file. `None` logs to stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            store_path: None,
            trace_level: None,
            log_file: None,
        }
    }
}

/// TOML representation of [`Config`].
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    debounce_ms: Option<u64>,
    store_path: Option<PathBuf>,
    trace_level: Option<String>,
    log_file: Option<PathBuf>,
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        Self {
            debounce: file.debounce_ms.map_or(DEFAULT_DEBOUNCE, Duration::from_millis),
            store_path: file.store_path,
            trace_level: file.trace_level,
            log_file: file.log_file,
        }
    }
}

impl Config {
    /// Builds a configuration from a string map, as provided by host settings.
    ///
    /// # Parsing Rules
    ///
    /// - `debounce_ms`: integer milliseconds (falls back to 600 on parse error)
    /// - `store_path`, `log_file`: paths (empty values ignored)
    /// - `trace_level`: filter directive
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use std::time::Duration;
    /// use eventsearch::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("debounce_ms".to_string(), "250".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.debounce, Duration::from_millis(250));
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let debounce = map
            .get("debounce_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map_or(DEFAULT_DEBOUNCE, Duration::from_millis);

        let path = |key: &str| {
            map.get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        };

        Self {
            debounce,
            store_path: path("store_path"),
            trace_level: map.get("trace_level").cloned(),
            log_file: path("log_file"),
        }
    }

    /// Parses a TOML configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`EventSearchError::Config`] for malformed TOML or unknown keys.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| EventSearchError::Config(e.to_string()))?;
        Ok(file.into())
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a configuration error
    /// if it cannot be parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

/// Creates a controller from configuration.
///
/// Opens the configured JSON store (an unreadable document is discarded) or an
/// in-memory store when no path is set, then loads favorites from it.
///
/// # Errors
///
/// Returns an error if the store's directory or file cannot be accessed.
pub fn initialize<F: EventFetcher>(
    config: &Config,
    fetcher: F,
) -> Result<Controller<Box<dyn KeyValueStore>, F>> {
    tracing::debug!(store_path = ?config.store_path, "initializing eventsearch controller");

    let store: Box<dyn KeyValueStore> = match &config.store_path {
        Some(path) => Box::new(JsonFileStore::open_or_reset(path.clone())?),
        None => Box::new(MemoryStore::new()),
    };

    Ok(Controller::new(store, fetcher, config.debounce))
}
