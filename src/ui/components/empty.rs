//! Empty state component renderer.

use crate::ui::helpers::push_line;
use crate::ui::viewmodel::EmptyState;

/// Renders a two-line empty state message.
///
/// Shown in place of the restaurant list when nothing matches the current
/// selection, or before both a region and a category are chosen.
pub fn render_empty_state(out: &mut String, empty: &EmptyState) {
    push_line(out, &empty.message);
    push_line(out, &empty.subtitle);
}
