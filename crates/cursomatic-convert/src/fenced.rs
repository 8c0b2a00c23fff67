//! Fenced code block rendering.
//!
//! Fenced blocks are rendered immediately, not deferred via placeholder: the
//! block body must reach the output unchanged, so it is rewritten into its
//! final AsciiDoc form before any other stage runs. Matching is non-greedy
//! and each block is matched independently, left to right, so unrelated
//! backtick sequences are never crossed.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// A triple-backtick fence, optional language tag, body, closing fence.
static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(\w+)?\n(.*?)\n```").unwrap());

/// Render each fenced code block as an AsciiDoc source block.
///
/// ` ```lang\nbody\n``` ` becomes `[source,lang]\n----\nbody\n----`; the
/// `,lang` segment is omitted when no language tag is present.
pub(crate) fn render_fenced_blocks(input: &str) -> String {
    FENCED_BLOCK
        .replace_all(input, |caps: &Captures<'_>| {
            let body = &caps[2];
            match caps.get(1) {
                Some(lang) => format!("[source,{}]\n----\n{body}\n----", lang.as_str()),
                None => format!("[source]\n----\n{body}\n----"),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::render_fenced_blocks;

    #[test]
    fn test_block_with_language_tag() {
        assert_eq!(
            render_fenced_blocks("```python\nprint(1)\n```"),
            "[source,python]\n----\nprint(1)\n----"
        );
    }

    #[test]
    fn test_block_without_language_tag() {
        assert_eq!(
            render_fenced_blocks("```\nprint(1)\n```"),
            "[source]\n----\nprint(1)\n----"
        );
    }

    #[test]
    fn test_multiline_body_unchanged() {
        assert_eq!(
            render_fenced_blocks("```rust\nfn main() {\n    run();\n}\n```"),
            "[source,rust]\n----\nfn main() {\n    run();\n}\n----"
        );
    }

    #[test]
    fn test_multiple_blocks_matched_independently() {
        let input = "```sh\nls\n```\n\ntext between\n\n```py\nx = 1\n```";
        let expected =
            "[source,sh]\n----\nls\n----\n\ntext between\n\n[source,py]\n----\nx = 1\n----";
        assert_eq!(render_fenced_blocks(input), expected);
    }

    #[test]
    fn test_non_greedy_does_not_cross_blocks() {
        // The first closing fence ends the first block; the body must not
        // swallow the text between the two blocks.
        let output = render_fenced_blocks("```\na\n```\nmiddle\n```\nb\n```");
        assert_eq!(
            output,
            "[source]\n----\na\n----\nmiddle\n[source]\n----\nb\n----"
        );
    }

    #[test]
    fn test_unclosed_fence_passes_through() {
        let input = "```python\nprint(1)\n";
        assert_eq!(render_fenced_blocks(input), input);
    }

    #[test]
    fn test_surrounding_text_preserved() {
        assert_eq!(
            render_fenced_blocks("before\n```sh\nls\n```\nafter"),
            "before\n[source,sh]\n----\nls\n----\nafter"
        );
    }
}
