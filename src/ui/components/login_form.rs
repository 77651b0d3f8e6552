//! Login form component.

use super::text_field::render_text_field;
use crate::ui::helpers::{push_heading, push_line};
use crate::ui::viewmodel::LoginFormViewModel;

/// Renders the login area.
///
/// Logged out: a heading, the e-mail and password fields and a login button.
/// Logged in: a logout button.
pub fn render_login_form(out: &mut String, form: &LoginFormViewModel) {
    match form {
        LoginFormViewModel::LoggedOut { email, password } => {
            push_heading(out, "Log In");
            render_text_field(out, email);
            render_text_field(out, password);
            push_line(out, "[Log In]");
        }
        LoginFormViewModel::LoggedIn => push_line(out, "[Log out]"),
    }
}
