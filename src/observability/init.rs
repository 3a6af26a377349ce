//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when no trace level is configured.
const DEFAULT_LEVEL: &str = "info";

/// Initializes the global tracing subscriber.
///
/// Sets up a `tracing-subscriber` registry that:
/// 1. Filters events with an [`EnvFilter`] built from `config.trace_level`
///    (default `"info"`; an unparsable directive falls back to the default)
/// 2. Formats them with the fmt layer
/// 3. Writes to `config.log_file` through a rotating [`FileWriter`], or to
///    stderr when no log file is configured
///
/// # Initialization Behavior
///
/// - Creates the log file's parent directory if needed
/// - Silently skips file logging if that directory cannot be created
/// - Idempotent: only the first call in a process installs a subscriber
///
/// # Example
///
/// ```rust
/// use eventsearch::observability::init_tracing;
/// use eventsearch::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    if let Some(log_file) = &config.log_file {
        if let Some(parent) = log_file.parent() {
            if !parent.as_os_str().is_empty() && std::fs::create_dir_all(parent).is_err() {
                return;
            }
        }

        let layer = fmt::layer()
            .with_ansi(false)
            .with_writer(FileWriter::new(log_file.clone()));

        let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
    } else {
        let layer = fmt::layer().with_writer(std::io::stderr);
        let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
    }
}
