//! Infrastructure layer for filesystem and environment interactions.
//!
//! Currently this is path handling: where the session and log files live.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, resolve_data_dir};
