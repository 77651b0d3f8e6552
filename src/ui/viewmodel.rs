//! View model types representing renderable UI state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) and
//! consumed by the component renderers. They hold display-ready data only.
//!
//! # Example
//!
//! ```rust
//! use eatgo::ui::viewmodel::{InputType, TextFieldViewModel};
//!
//! let field = TextFieldViewModel::email("tester@example.com");
//! assert_eq!(field.label, "E-mail");
//! assert_eq!(field.input_type, InputType::Email);
//! ```

/// Kind of input element a text field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
    Password,
    Number,
}

/// A labelled input bound to one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFieldViewModel {
    /// Label shown next to the input.
    pub label: String,

    /// Form field name reported back in change events.
    pub name: String,

    pub input_type: InputType,

    /// Current value from state.
    pub value: String,
}

impl TextFieldViewModel {
    #[must_use]
    pub fn new(label: &str, name: &str, input_type: InputType, value: &str) -> Self {
        Self {
            label: label.to_string(),
            name: name.to_string(),
            input_type,
            value: value.to_string(),
        }
    }

    /// The login form e-mail input.
    #[must_use]
    pub fn email(value: &str) -> Self {
        Self::new("E-mail", "email", InputType::Email, value)
    }

    /// The login form password input.
    #[must_use]
    pub fn password(value: &str) -> Self {
        Self::new("Password", "password", InputType::Password, value)
    }

    #[must_use]
    pub fn text(label: &str, name: &str, value: &str) -> Self {
        Self::new(label, name, InputType::Text, value)
    }

    #[must_use]
    pub fn number(label: &str, name: &str, value: &str) -> Self {
        Self::new(label, name, InputType::Number, value)
    }
}

/// The login area: credentials inputs, or a logout prompt once logged in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginFormViewModel {
    LoggedOut {
        email: TextFieldViewModel,
        password: TextFieldViewModel,
    },
    LoggedIn,
}

/// The review form on a restaurant page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewFormViewModel {
    pub score: TextFieldViewModel,
    pub description: TextFieldViewModel,
}

/// One clickable entry of a region or category selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionItem {
    pub id: i64,
    pub name: String,
    pub is_selected: bool,
}

impl OptionItem {
    #[must_use]
    pub fn new(id: i64, name: &str, is_selected: bool) -> Self {
        Self {
            id,
            name: name.to_string(),
            is_selected,
        }
    }

    /// Display label; the selected entry carries a `(V)` marker.
    #[must_use]
    pub fn label(&self) -> String {
        if self.is_selected {
            format!("{}(V)", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// A titled list of options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorViewModel {
    pub title: String,
    pub items: Vec<OptionItem>,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// The restaurant detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantDetailViewModel {
    pub name: String,
    pub address: Option<String>,
    pub menu: Vec<String>,
    /// Reviews newest first, formatted as `name: score점 / description`.
    pub reviews: Vec<String>,
}

/// Complete page view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageViewModel {
    pub login: LoginFormViewModel,
    pub regions: SelectorViewModel,
    pub categories: SelectorViewModel,
    pub restaurants: Vec<OptionItem>,
    /// Shown instead of the restaurant list when it is empty.
    pub empty_state: Option<EmptyState>,
    pub detail: Option<RestaurantDetailViewModel>,
    pub review_form: Option<ReviewFormViewModel>,
}
