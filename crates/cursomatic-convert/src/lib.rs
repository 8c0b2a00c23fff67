//! Markdown to AsciiDoc conversion for cursomatic.
//!
//! This crate provides [`convert`], a pure function that rewrites a
//! constrained subset of Markdown syntax into equivalent AsciiDoc through a
//! fixed, ordered chain of pattern-substitution stages. Stage order is the
//! conflict-resolution rule: each stage's output is the next stage's input,
//! and overlapping constructs are resolved by whichever stage runs later.
//!
//! # Architecture
//!
//! The crate is organized into modules:
//! - [`stages`]: the ordered stage table plus heading, inline code, image,
//!   link, and list item stages
//! - [`fenced`]: fenced code block rendering (the one construct rendered
//!   immediately rather than deferred, since no later stage may alter code)
//! - [`emphasis`]: italic and bold marker rewriting (italic runs first; bold
//!   markers are a strict superset of italic markers)
//! - [`spacing`]: blank-line normalization around list items
//!
//! # Example
//!
//! ```
//! let adoc = cursomatic_convert::convert("# Title\n\nSome **bold** text.\n");
//! assert_eq!(adoc, "= Title\n\nSome *bold* text.\n");
//! ```
//!
//! # Known limitations
//!
//! - Conversion is one-directional: running [`convert`] on already-converted
//!   AsciiDoc has undefined results.
//! - Nested list depth is flattened to depth one.
//! - Later stages scan the whole buffer, including rendered code blocks; code
//!   bodies are only safe insofar as no later pattern matches their content.

mod emphasis;
mod fenced;
mod spacing;
mod stages;

pub use stages::stage_names;

/// Convert Markdown `source` to AsciiDoc.
///
/// Pure and deterministic: identical input always produces identical output,
/// and no stage retains the buffer between calls. Syntax that no stage
/// pattern matches passes through unmodified; there are no error conditions.
#[must_use]
pub fn convert(source: &str) -> String {
    let mut buffer = source.to_owned();
    for stage in stages::STAGES {
        buffer = (stage.apply)(&buffer);
    }
    buffer
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::convert;

    #[test]
    fn test_plain_prose_is_identity() {
        let text = "Just a paragraph of prose.\n\nAnd another one.\n";
        assert_eq!(convert(text), text);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(convert(""), "");
    }

    #[test]
    fn test_bold_before_italic_ordering() {
        assert_eq!(convert("**bold** and *italic*"), "*bold* and _italic_");
    }

    #[test]
    fn test_image_never_leaks_into_link_rule() {
        assert_eq!(convert("![alt](a.png)"), "image::a.png[alt]");
    }

    #[test]
    fn test_fenced_block_with_language_tag() {
        assert_eq!(
            convert("```python\nprint(1)\n```"),
            "[source,python]\n----\nprint(1)\n----"
        );
    }

    #[test]
    fn test_fenced_block_without_language_tag() {
        assert_eq!(convert("```\nprint(1)\n```"), "[source]\n----\nprint(1)\n----");
    }

    #[test]
    fn test_paragraph_then_list_gets_blank_line() {
        assert_eq!(convert("Some paragraph\n- item"), "Some paragraph\n\n* item");
    }

    #[test]
    fn test_list_then_paragraph_gets_blank_line() {
        assert_eq!(convert("- item\nNext paragraph"), "* item\n\nNext paragraph");
    }

    #[test]
    fn test_ordered_list_numbers_discarded() {
        assert_eq!(convert("1. first\n2. second"), ". first\n\n. second");
    }

    #[test]
    fn test_mixed_document() {
        let markdown = "\
## Setup

Install with `pip install demo`, then see [docs](https://example.com).

```sh
demo --run
```
";
        let expected = "\
== Setup

Install with +pip install demo+, then see link:https://example.com[docs].

[source,sh]
----
demo --run
----
";
        assert_eq!(convert(markdown), expected);
    }
}
