//! Structured logging to a rotating file.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → eatgo.log (+ .1 .. .3)
//! ```
//!
//! # Configuration
//!
//! The filter comes from the `trace_level` config option
//! (`trace`, `debug`, `info`, `warn`, `error`, or a full directive). Without
//! it no subscriber is installed and `tracing` macros are no-ops.
//!
//! # Modules
//!
//! - [`init`]: subscriber setup
//! - [`file_writer`]: rotating file writer with size-based rotation

pub mod file_writer;
pub mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, LOG_FILE_NAME};
