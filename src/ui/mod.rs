//! User interface layer: view models and text component renderers.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → PageViewModel → render → String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Text field, forms, selectors and restaurant views
//! - [`helpers`]: Shared formatting utilities

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use viewmodel::{
    EmptyState, InputType, LoginFormViewModel, OptionItem, PageViewModel,
    RestaurantDetailViewModel, ReviewFormViewModel, SelectorViewModel, TextFieldViewModel,
};
