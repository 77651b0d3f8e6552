//! The state store.
//!
//! [`Store`] owns the one authoritative [`AppState`] and replaces it on every
//! dispatched action. The current value is shared as an `Arc<AppState>`, so
//! views keep cheap read-only handles and detect change with
//! [`Arc::ptr_eq`]: a dispatch that produces a new state always produces a
//! new allocation, and a no-op dispatch keeps the old one.
//!
//! The store is an ordinary value handed to whoever needs it. There is no
//! process-wide singleton.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use eatgo::app::{Action, Store};
//!
//! let mut store = Store::new();
//! let before = Arc::clone(store.state());
//!
//! store.dispatch_json(r#"{"type": "unknown"}"#)?;
//! assert!(Arc::ptr_eq(&before, store.state()));
//!
//! store.dispatch(Action::SetAccessToken("TOKEN".to_string()));
//! assert!(!Arc::ptr_eq(&before, store.state()));
//! # Ok::<(), eatgo::EatgoError>(())
//! ```

use super::actions::{Action, RawAction};
use super::reducer::reduce;
use super::state::AppState;
use crate::domain::error::Result;
use std::sync::Arc;

type Listener = Box<dyn FnMut(&Arc<AppState>)>;

/// Holder of the current application state.
pub struct Store {
    state: Arc<AppState>,
    listeners: Vec<Listener>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Creates a store holding the default state.
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// Creates a store holding a previously saved or prepared state.
    #[must_use]
    pub fn with_state(state: AppState) -> Self {
        Self {
            state: Arc::new(state),
            listeners: Vec::new(),
        }
    }

    /// Current state handle.
    #[must_use]
    pub const fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Registers a callback invoked with each new state value.
    ///
    /// Listeners run in registration order after the state has been replaced.
    /// No-op dispatches do not notify.
    pub fn subscribe(&mut self, listener: impl FnMut(&Arc<AppState>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Applies a typed action, replacing the state with a new value.
    ///
    /// The state is always re-allocated. Returns whether the new value differs
    /// from the previous one, i.e. whether views need to re-render.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let _span = tracing::debug_span!("dispatch", kind = action.kind()).entered();

        let next = reduce((*self.state).clone(), &action);
        let changed = next != *self.state;
        self.state = Arc::new(next);

        tracing::debug!(
            changed,
            logged_in = self.state.is_logged_in(),
            regions = self.state.regions.len(),
            categories = self.state.categories.len(),
            restaurants = self.state.restaurants.len(),
            "state replaced"
        );

        self.notify();
        changed
    }

    /// Applies a raw action.
    ///
    /// Returns `Ok(false)` and keeps the current `Arc` for unrecognized kinds,
    /// otherwise the result of [`Self::dispatch`].
    ///
    /// # Errors
    ///
    /// Returns the decoding error for malformed payloads of known kinds. The
    /// state is left untouched in that case.
    pub fn dispatch_raw(&mut self, raw: &RawAction) -> Result<bool> {
        match raw.decode() {
            Ok(Some(action)) => Ok(self.dispatch(action)),
            Ok(None) => Ok(false),
            Err(e) => {
                tracing::debug!(kind = %raw.kind, error = %e, "rejected malformed action");
                Err(e)
            }
        }
    }

    /// Parses a `{"type": ..., "payload": ...}` document and dispatches it.
    ///
    /// # Errors
    ///
    /// Returns [`EatgoError::Json`](crate::EatgoError::Json) for input that is
    /// not an action object, plus the errors of [`Self::dispatch_raw`].
    pub fn dispatch_json(&mut self, json: &str) -> Result<bool> {
        let raw: RawAction = serde_json::from_str(json)?;
        self.dispatch_raw(&raw)
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.state);
        }
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
