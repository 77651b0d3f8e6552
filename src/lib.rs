//! eatgo: the state core of a restaurant review client.
//!
//! The crate holds everything a review site front end needs between the
//! network and the screen:
//! - A single immutable [`AppState`] replaced wholesale on every action
//! - Typed [`Action`]s plus decoding of raw `{type, payload}` messages
//! - A pure reducer ([`transition`]) and a [`Store`] sharing `Arc<AppState>`
//! - Login and review form containers turning UI events into actions and
//!   [`Effect`]s
//! - View models and plain-text components for the login form, review form,
//!   region/category selectors and restaurant pages
//! - A persisted login session backed by a JSON file

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host binary (main.rs)                              │  ← stdin/stdout
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Actions and raw decoding                         │
//! │  - Reducer and store                                │
//! │  - Form containers (UI events → effects)            │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────────┐         ┌───────────────────────┐
//! │ UI Layer (ui/)        │         │ Storage Layer         │
//! │ - View models         │         │ (storage/)            │
//! │ - Components          │         │ - Session file        │
//! │ - Page renderer       │         │ - SessionStorage trait│
//! └───────────────────────┘         └───────────────────────┘
//!         │                                     │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data directory (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Regions, categories, restaurants (domain/models) │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber, rotating log file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```toml
//! data_dir = "~/.local/share/eatgo"
//! persist_session = true
//! trace_level = "debug"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use eatgo::{transition, Action, AppState, RawAction};
//!
//! let state = transition(None, &Action::SetAccessToken("TOKEN".to_string()));
//! assert!(state.is_logged_in());
//!
//! let raw: RawAction = serde_json::from_str(r#"{"type": "logout"}"#)?;
//! let state = eatgo::app::transition_raw(Some(&state), &raw)?;
//! assert_eq!(state, AppState::default());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{handle_event, transition, Action, AppState, Effect, RawAction, Store, UiEvent};
pub use domain::{EatgoError, Result};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use storage::{JsonStorage, SessionRecord, SessionStorage};

/// File name of the saved session inside the data directory.
pub const SESSION_FILE_NAME: &str = "session.json";

/// Runtime configuration.
///
/// Loaded from a TOML file ([`Config::load`]) or a flat key-value map
/// ([`Config::from_map`]). Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the session file and log. Default:
    /// `~/.local/share/eatgo`
    pub data_dir: Option<PathBuf>,

    /// Restore the access token at startup and save it after login.
    /// Default: `true`
    pub persist_session: bool,

    /// Tracing filter for the log file.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Logging is off when
    /// unset.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            persist_session: true,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a key-value map.
    ///
    /// # Parsing Rules
    ///
    /// - `data_dir`: String → `Option<PathBuf>` (empty values ignored)
    /// - `persist_session`: `"true"`/`"false"` (falls back to `true`)
    /// - `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use eatgo::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("persist_session".to_string(), "false".to_string());
    /// map.insert("trace_level".to_string(), "debug".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert!(!config.persist_session);
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let data_dir = config
            .get("data_dir")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let persist_session = config
            .get("persist_session")
            .and_then(|s| s.trim().parse::<bool>().ok())
            .unwrap_or(true);

        Self {
            data_dir,
            persist_session,
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`EatgoError::Config`] when the text is not valid TOML or a key
    /// has the wrong type.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| EatgoError::Config(e.to_string()))
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`EatgoError::Io`] if the file cannot be read and
    /// [`EatgoError::Config`] if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            EatgoError::Config(reason) => {
                EatgoError::Config(format!("{}: {reason}", path.display()))
            }
            other => other,
        })
    }

    /// The resolved data directory.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        infrastructure::resolve_data_dir(self.data_dir.as_deref())
    }

    /// Path of the session file.
    #[must_use]
    pub fn session_path(&self) -> PathBuf {
        self.data_dir().join(SESSION_FILE_NAME)
    }
}

/// Opens the session storage, or `None` when persistence is disabled.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or an existing
/// session file cannot be read.
pub fn open_session_storage(config: &Config) -> Result<Option<JsonStorage>> {
    if !config.persist_session {
        return Ok(None);
    }
    JsonStorage::new(config.session_path()).map(Some)
}

/// Creates the store, restoring a saved access token.
///
/// # Errors
///
/// Returns an error if the saved session cannot be read.
///
/// # Example
///
/// ```rust
/// use eatgo::{initialize, Config};
///
/// let config = Config {
///     persist_session: false,
///     ..Default::default()
/// };
///
/// let store = initialize(&config)?;
/// assert!(!store.state().is_logged_in());
/// # Ok::<(), eatgo::EatgoError>(())
/// ```
pub fn initialize(config: &Config) -> Result<Store> {
    tracing::debug!(persist_session = config.persist_session, "initializing eatgo");

    let access_token = match open_session_storage(config)? {
        Some(storage) => storage.load_session()?.map(|session| session.access_token),
        None => None,
    };

    Ok(access_token.map_or_else(Store::new, |token| {
        tracing::debug!("restored saved session");
        Store::with_state(AppState {
            access_token: token,
            ..AppState::default()
        })
    }))
}

/// Runs the session effects against a storage backend.
///
/// Returns `true` if the effect was a session effect and has been handled;
/// network effects are left to the host and return `false`.
///
/// # Errors
///
/// Returns an error if the storage write fails.
pub fn apply_session_effect(storage: &mut dyn SessionStorage, effect: &Effect) -> Result<bool> {
    match effect {
        Effect::PersistSession { access_token } => {
            storage.save_session(&SessionRecord::new(access_token.as_str()))?;
            Ok(true)
        }
        Effect::ClearSession => {
            storage.clear_session()?;
            Ok(true)
        }
        Effect::RequestLogin { .. }
        | Effect::SendReview { .. }
        | Effect::LoadRestaurants { .. }
        | Effect::LoadRestaurant { .. } => Ok(false),
    }
}

/// The session effect implied by an access token change, if any.
///
/// ```rust
/// use eatgo::{session_effect_for, Effect};
///
/// assert_eq!(session_effect_for("TOKEN", "TOKEN"), None);
/// assert_eq!(session_effect_for("TOKEN", ""), Some(Effect::ClearSession));
/// ```
#[must_use]
pub fn session_effect_for(token_before: &str, token_after: &str) -> Option<Effect> {
    if token_before == token_after {
        None
    } else if token_after.is_empty() {
        Some(Effect::ClearSession)
    } else {
        Some(Effect::PersistSession {
            access_token: token_after.to_string(),
        })
    }
}

/// Saves or clears the stored session when the access token changed.
///
/// Returns whether the storage was written.
///
/// # Errors
///
/// Returns an error if the storage write fails.
pub fn sync_session(
    storage: &mut dyn SessionStorage,
    token_before: &str,
    state: &AppState,
) -> Result<bool> {
    let Some(effect) = session_effect_for(token_before, &state.access_token) else {
        return Ok(false);
    };

    tracing::debug!(effect = effect.name(), "syncing session file");
    apply_session_effect(storage, &effect)
}
