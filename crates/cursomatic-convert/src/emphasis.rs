//! Italic and bold marker rewriting.
//!
//! Italic must run before bold: bold markers (`**`, `__`) are a strict
//! superset character sequence of italic markers (`*`, `_`), so a bold
//! construct is only safe from the italic stage because the italic scanner
//! refuses markers that sit next to another marker of the same kind.
//!
//! The italic stage is a hand-rolled scanner rather than a single regex:
//! the "not adjacent to another marker" constraint needs one character of
//! context on each side, and a consuming pattern would block back-to-back
//! constructs like `*a* *b*`.

use std::sync::LazyLock;

use regex::Regex;

static BOLD_ASTERISK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

static BOLD_UNDERSCORE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__(.+?)__").unwrap());

/// Rewrite `*text*` and `_text_` to `_text_`.
///
/// A marker only opens a span when it is not doubled, the span closes with a
/// single marker of the same kind on the same line, and the body does not
/// start with a space or another emphasis marker.
pub(crate) fn italic(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut literal_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        let marker = bytes[i];
        if (marker == b'*' || marker == b'_') && !doubled(bytes, i, marker) {
            if let Some(close) = closing_marker(bytes, i, marker) {
                out.push_str(&input[literal_start..i]);
                out.push('_');
                out.push_str(&input[i + 1..close]);
                out.push('_');
                i = close + 1;
                literal_start = i;
                continue;
            }
        }
        i += 1;
    }
    out.push_str(&input[literal_start..]);
    out
}

/// Rewrite `**text**` and `__text__` to `*text*`, minimal non-overlapping
/// match within a line.
pub(crate) fn bold(input: &str) -> String {
    let out = BOLD_ASTERISK.replace_all(input, "*${1}*");
    BOLD_UNDERSCORE.replace_all(&out, "*${1}*").into_owned()
}

/// Whether the marker at `i` is immediately preceded or followed by the same
/// marker (i.e. part of a bold construct).
fn doubled(bytes: &[u8], i: usize, marker: u8) -> bool {
    (i > 0 && bytes[i - 1] == marker) || bytes.get(i + 1) == Some(&marker)
}

/// Find the single closing marker for a span opened at `open`.
///
/// Returns `None` when the body would start with a space or another emphasis
/// marker, when the line ends first, or when the candidate closing marker is
/// itself doubled.
fn closing_marker(bytes: &[u8], open: usize, marker: u8) -> Option<usize> {
    let first = *bytes.get(open + 1)?;
    if first == b' ' || first == b'*' || first == b'_' {
        return None;
    }
    let mut j = open + 2;
    while j < bytes.len() {
        let b = bytes[j];
        if b == b'\n' {
            return None;
        }
        if b == marker {
            if bytes.get(j + 1) == Some(&marker) {
                return None;
            }
            return Some(j);
        }
        j += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{bold, italic};

    #[test]
    fn test_asterisk_italic() {
        assert_eq!(italic("an *italic* word"), "an _italic_ word");
    }

    #[test]
    fn test_underscore_italic() {
        assert_eq!(italic("an _italic_ word"), "an _italic_ word");
    }

    #[test]
    fn test_italic_skips_bold_markers() {
        assert_eq!(italic("**bold** stays"), "**bold** stays");
        assert_eq!(italic("__bold__ stays"), "__bold__ stays");
    }

    #[test]
    fn test_back_to_back_italics() {
        assert_eq!(italic("*a* *b* *c*"), "_a_ _b_ _c_");
    }

    #[test]
    fn test_unclosed_marker_unchanged() {
        assert_eq!(italic("a *dangling marker"), "a *dangling marker");
    }

    #[test]
    fn test_italic_does_not_cross_lines() {
        assert_eq!(italic("*split\nspan*"), "*split\nspan*");
    }

    #[test]
    fn test_body_starting_with_space_unchanged() {
        // A line-leading `* ` is a list marker, not emphasis.
        assert_eq!(italic("* item one"), "* item one");
    }

    #[test]
    fn test_mixed_bold_and_italic_on_one_line() {
        assert_eq!(
            bold(&italic("**bold** and *italic*")),
            "*bold* and _italic_"
        );
    }

    #[test]
    fn test_asterisk_bold() {
        assert_eq!(bold("**strong** words"), "*strong* words");
    }

    #[test]
    fn test_underscore_bold() {
        assert_eq!(bold("__strong__ words"), "*strong* words");
    }

    #[test]
    fn test_bold_minimal_match() {
        assert_eq!(bold("**a** middle **b**"), "*a* middle *b*");
    }

    #[test]
    fn test_bold_does_not_cross_lines() {
        assert_eq!(bold("**split\nspan**"), "**split\nspan**");
    }
}
