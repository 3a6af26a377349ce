//! Logging setup for hosts embedding the controller.
//!
//! The crate logs through `tracing` macros throughout; this module installs a
//! subscriber for hosts that do not bring their own.
//!
//! # Configuration
//!
//! - `trace_level`: an `EnvFilter` directive such as `"debug"` or
//!   `"eventsearch=trace"`. Default: `"info"`
//! - `log_file`: write to a rotating file (10 MB, 3 backups) instead of stderr
//!
//! # Modules
//!
//! - [`init`]: subscriber setup
//! - [`file_writer`]: rotating file writer used as the fmt layer's sink

pub mod file_writer;
pub mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
