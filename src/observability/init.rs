//! Tracing initialization and subscriber setup.
//!
//! Installs a `tracing-subscriber` registry with an [`EnvFilter`] and a `fmt`
//! layer that writes plain-text lines through the rotating [`FileWriter`].

use super::file_writer::FileWriter;
use crate::infrastructure::paths::resolve_data_dir;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the log inside the data directory.
pub const LOG_FILE_NAME: &str = "eatgo.log";

/// Initializes the tracing subscriber with file-based log output.
///
/// Logging is enabled only when `config.trace_level` is set. The level string
/// is any [`EnvFilter`] directive (`"debug"`, `"eatgo=trace,info"`, ...); an
/// invalid directive falls back to `"info"`.
///
/// # File Location
///
/// Logs go to `eatgo.log` in the data directory (see
/// [`resolve_data_dir`]), rotating at 10MB with 3 backups.
///
/// # Initialization Behavior
///
/// - Creates data directory if it doesn't exist
/// - Silently skipped if directory creation fails (logging is optional)
/// - Idempotent: only the first successful call installs a subscriber
///
/// Returns whether a subscriber was installed by this call.
///
/// # Example
///
/// ```rust,no_run
/// use eatgo::observability::init_tracing;
/// use eatgo::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) -> bool {
    let Some(level) = config.trace_level.as_deref() else {
        return false;
    };

    let data_dir = resolve_data_dir(config.data_dir.as_deref());
    if std::fs::create_dir_all(&data_dir).is_err() {
        return false;
    }

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let writer = FileWriter::new(data_dir.join(LOG_FILE_NAME));

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(level, data_dir = ?data_dir, "tracing initialized");
    }
    installed
}
