//! Text field component.
//!
//! A labelled input bound to one form field. Rendering shows the label and
//! the current value (masked for passwords); input reports `{name, value}`
//! changes that the form containers turn into actions.

use crate::app::FieldChange;
use crate::ui::helpers::{mask, push_line};
use crate::ui::viewmodel::{InputType, TextFieldViewModel};

/// Renders one text field as `<label>: <value>`.
///
/// # Example
///
/// ```rust
/// use eatgo::ui::components::render_text_field;
/// use eatgo::ui::viewmodel::TextFieldViewModel;
///
/// let mut out = String::new();
/// render_text_field(&mut out, &TextFieldViewModel::password("tests"));
/// assert_eq!(out, "Password: *****\n");
/// ```
pub fn render_text_field(out: &mut String, field: &TextFieldViewModel) {
    let value = match field.input_type {
        InputType::Password => mask(&field.value),
        InputType::Text | InputType::Email | InputType::Number => field.value.clone(),
    };
    push_line(out, format_args!("{}: {value}", field.label));
}

/// Builds the change event the field reports when its input changes.
#[must_use]
pub fn change_event(field: &TextFieldViewModel, value: &str) -> FieldChange {
    FieldChange::new(field.name.as_str(), value)
}
