//! Blank-line normalization around list items.
//!
//! AsciiDoc requires a blank line before a list's first item to separate it
//! from a preceding paragraph, and a list item swallows a directly following
//! paragraph line; Markdown needs neither. These two stages run last, after
//! list markers have been normalized to `* ` and `. `.

use std::sync::LazyLock;

use regex::Regex;

/// A single newline between a non-blank line and a list marker line.
static MISSING_BLANK_BEFORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^\n])\n([*.] )").unwrap());

/// A list item line followed by exactly one newline and a non-blank line.
static MISSING_BLANK_AFTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([*.] [^\n]*)\n([^\n])").unwrap());

/// Expand a single newline before a list marker line to two newlines.
///
/// A marker line already preceded by a blank line is left alone; the capture
/// of the preceding non-newline character enforces that without lookbehind.
pub(crate) fn blank_line_before_list(input: &str) -> String {
    MISSING_BLANK_BEFORE
        .replace_all(input, "${1}\n\n${2}")
        .into_owned()
}

/// Insert a blank line between a list item and a directly following
/// non-blank line, making the item a standalone block.
pub(crate) fn blank_line_after_list(input: &str) -> String {
    MISSING_BLANK_AFTER
        .replace_all(input, "${1}\n\n${2}")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{blank_line_after_list, blank_line_before_list};

    #[test]
    fn test_blank_inserted_before_list_after_paragraph() {
        assert_eq!(
            blank_line_before_list("paragraph\n* item"),
            "paragraph\n\n* item"
        );
    }

    #[test]
    fn test_blank_inserted_before_ordered_item() {
        assert_eq!(
            blank_line_before_list("paragraph\n. item"),
            "paragraph\n\n. item"
        );
    }

    #[test]
    fn test_existing_blank_line_not_doubled() {
        assert_eq!(
            blank_line_before_list("paragraph\n\n* item"),
            "paragraph\n\n* item"
        );
    }

    #[test]
    fn test_list_at_start_of_document_untouched() {
        assert_eq!(blank_line_before_list("* item"), "* item");
    }

    #[test]
    fn test_consecutive_items_all_separated() {
        assert_eq!(
            blank_line_before_list("intro\n* a\n* b\n* c"),
            "intro\n\n* a\n\n* b\n\n* c"
        );
    }

    #[test]
    fn test_blank_inserted_after_list_item() {
        assert_eq!(
            blank_line_after_list("* item\nparagraph"),
            "* item\n\nparagraph"
        );
    }

    #[test]
    fn test_blank_after_ordered_item() {
        assert_eq!(
            blank_line_after_list(". item\nparagraph"),
            ". item\n\nparagraph"
        );
    }

    #[test]
    fn test_item_already_followed_by_blank_untouched() {
        assert_eq!(
            blank_line_after_list("* item\n\nparagraph"),
            "* item\n\nparagraph"
        );
    }

    #[test]
    fn test_item_at_end_of_document_untouched() {
        assert_eq!(blank_line_after_list("* item\n"), "* item\n");
    }

    #[test]
    fn test_non_list_lines_untouched() {
        assert_eq!(
            blank_line_after_list("plain\nlines\nhere"),
            "plain\nlines\nhere"
        );
    }
}
