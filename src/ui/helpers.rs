//! Shared rendering utilities.
//!
//! Components render into a `String` buffer one line at a time. These helpers
//! cover the formatting shared between them.

use std::fmt::Write;

/// Replaces every character of a secret with `*`.
///
/// ```rust
/// use eatgo::ui::helpers::mask;
///
/// assert_eq!(mask("비밀번호"), "****");
/// assert_eq!(mask(""), "");
/// ```
#[must_use]
pub fn mask(value: &str) -> String {
    "*".repeat(value.chars().count())
}

/// Appends a line to the output buffer.
pub fn push_line(out: &mut String, line: impl std::fmt::Display) {
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{line}");
}

/// Appends a section heading followed by an underline of matching width.
pub fn push_heading(out: &mut String, title: &str) {
    push_line(out, title);
    push_line(out, "=".repeat(title.chars().count()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_underline_counts_characters() {
        let mut out = String::new();

        push_heading(&mut out, "지역");

        assert_eq!(out, "지역\n==\n");
    }
}
