//! Composable UI component renderers.
//!
//! Each component renders one part of the page into a `String` buffer.
//!
//! # Components
//!
//! - [`text_field`]: Labelled input bound to a form field
//! - [`login_form`]: E-mail and password inputs, or a logout button
//! - [`review_form`]: Score and description inputs
//! - [`selector`]: Region and category lists with the selection marked
//! - [`restaurant`]: Restaurant list and detail page
//! - [`empty`]: Message shown when there is nothing to list

pub mod empty;
pub mod login_form;
pub mod restaurant;
pub mod review_form;
pub mod selector;
pub mod text_field;

pub use empty::render_empty_state;
pub use login_form::render_login_form;
pub use restaurant::{render_restaurant_detail, render_restaurant_list};
pub use review_form::render_review_form;
pub use selector::render_selector;
pub use text_field::{change_event, render_text_field};
