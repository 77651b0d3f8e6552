//! Review form component.

use super::text_field::render_text_field;
use crate::ui::helpers::push_line;
use crate::ui::viewmodel::ReviewFormViewModel;

/// Renders the score and description inputs with a submit button.
pub fn render_review_form(out: &mut String, form: &ReviewFormViewModel) {
    render_text_field(out, &form.score);
    render_text_field(out, &form.description);
    push_line(out, "[리뷰 남기기]");
}
