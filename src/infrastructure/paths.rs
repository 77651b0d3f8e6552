//! Path helpers for locating the eatgo data directory.
//!
//! The data directory holds the session file and the log file. It defaults to
//! `$HOME/.local/share/eatgo` and can be overridden through
//! [`Config::data_dir`](crate::Config::data_dir).

use std::path::{Path, PathBuf};

/// Name of the directory created under `~/.local/share`.
const APP_DIR: &str = "eatgo";

/// Returns the default data directory, `$HOME/.local/share/eatgo`.
///
/// Falls back to a relative `.eatgo` directory when `HOME` is unset.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    home_dir().map_or_else(
        || PathBuf::from(".eatgo"),
        |home| home.join(".local").join("share").join(APP_DIR),
    )
}

/// Resolves the data directory, preferring a configured path.
///
/// ```
/// use eatgo::infrastructure::resolve_data_dir;
/// use std::path::Path;
///
/// let dir = resolve_data_dir(Some(Path::new("/var/lib/eatgo")));
/// assert_eq!(dir, Path::new("/var/lib/eatgo"));
/// ```
#[must_use]
pub fn resolve_data_dir(configured: Option<&Path>) -> PathBuf {
    configured.map_or_else(get_data_dir, |dir| {
        dir.to_str()
            .map_or_else(|| dir.to_path_buf(), |s| PathBuf::from(expand_tilde(s)))
    })
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a tilde, or any path when `HOME` is unset, are returned
/// unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = home_dir() else {
        return path.to_string();
    };

    if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest).to_string_lossy().into_owned()
    } else if path == "~" {
        home.to_string_lossy().into_owned()
    } else {
        path.to_string()
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}
