//! Application layer: the state store and the UI glue around it.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow:
//!
//! ```text
//! UI Event → handle_event → Action → Store (reduce) → AppState → View Models
//!                 │
//!                 └──→ Effects → Host (API, session file)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Typed actions and raw `{type, payload}` decoding
//! - [`reducer`]: Pure `(state, action) -> state` transitions
//! - [`state`]: The application state and its view model computation
//! - [`store`]: Owner of the current state, shared as `Arc<AppState>`
//! - [`handler`]: Form containers translating UI events into actions
//! - [`effects`]: Side effects returned to the host
//!
//! # Example
//!
//! ```rust
//! use eatgo::app::{handle_event, Store, UiEvent};
//!
//! let mut store = Store::new();
//! let (should_render, effects) =
//!     handle_event(&mut store, &UiEvent::AccessTokenReceived("TOKEN".to_string()))?;
//! assert!(should_render);
//! assert_eq!(effects.len(), 1);
//! # Ok::<(), eatgo::EatgoError>(())
//! ```

pub mod actions;
pub mod effects;
pub mod handler;
pub mod reducer;
pub mod state;
pub mod store;

pub use actions::{Action, LoginFieldChange, RawAction, ReviewFieldChange};
pub use effects::Effect;
pub use handler::{handle_event, FieldChange, UiEvent};
pub use reducer::{reduce, transition, transition_raw};
pub use state::{AppState, LoginField, ReviewField};
pub use store::Store;
