//! Region and category selector component.

use crate::ui::helpers::{push_heading, push_line};
use crate::ui::viewmodel::SelectorViewModel;

/// Maximum entries per line before wrapping.
const ITEMS_PER_LINE: usize = 6;

/// Renders a selector as a heading and bracketed entries.
///
/// ```text
/// Regions
/// =======
/// [서울(V)] [부산]
/// ```
pub fn render_selector(out: &mut String, selector: &SelectorViewModel) {
    push_heading(out, &selector.title);

    for chunk in selector.items.chunks(ITEMS_PER_LINE) {
        let line: Vec<String> = chunk.iter().map(|item| format!("[{}]", item.label())).collect();
        push_line(out, line.join(" "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::OptionItem;

    #[test]
    fn test_marks_selected_item() {
        let mut out = String::new();
        let selector = SelectorViewModel {
            title: "Regions".to_string(),
            items: vec![OptionItem::new(1, "서울", true), OptionItem::new(2, "부산", false)],
        };

        render_selector(&mut out, &selector);

        assert_eq!(out, "Regions\n=======\n[서울(V)] [부산]\n");
    }

    #[test]
    fn test_wraps_long_lists() {
        let mut out = String::new();
        let selector = SelectorViewModel {
            title: "Categories".to_string(),
            items: (1..=7).map(|id| OptionItem::new(id, "식", false)).collect(),
        };

        render_selector(&mut out, &selector);

        assert_eq!(out.lines().count(), 4);
    }
}
