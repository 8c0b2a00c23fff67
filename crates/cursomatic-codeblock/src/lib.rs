//! Placeholder-based code block extraction and restoration.
//!
//! Shields fenced code blocks from a transformation that must not touch them
//! (e.g. machine translation): [`extract`] swaps each block for a unique
//! placeholder token, the transformation runs over the remaining text, and
//! [`restore`] substitutes the original blocks back in.
//!
//! Placeholder tokens never collide with document content: the token prefix
//! is lengthened until it does not occur in the input, so restoration is a
//! plain substring replacement applied in the order the placeholders were
//! introduced.
//!
//! # Example
//!
//! ```
//! use cursomatic_codeblock::{extract, restore};
//!
//! let text = "intro\n```sh\nls\n```\noutro";
//! let (masked, blocks) = extract(text);
//! assert!(!masked.contains("```"));
//! assert_eq!(restore(&masked, &blocks), text);
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// A fenced block including both triple-backtick delimiter lines.
static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());

/// Base placeholder prefix; lengthened on collision with document content.
const PLACEHOLDER_PREFIX: &str = "[[[CODE_BLOCK_";

/// A protected span swapped out of the document during [`extract`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedBlock {
    /// The placeholder token standing in for the block.
    pub placeholder: String,
    /// The original block text, delimiters included.
    pub content: String,
}

/// Replace each fenced code block with a unique placeholder token.
///
/// Returns the masked text and the protected blocks in the order they appear
/// in the input. Text without fenced blocks comes back unchanged with an
/// empty block list.
#[must_use]
pub fn extract(text: &str) -> (String, Vec<ProtectedBlock>) {
    let prefix = unique_prefix(text);
    let mut blocks = Vec::new();
    let masked = FENCED_BLOCK
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let placeholder = format!("{prefix}{}]]]", blocks.len());
            blocks.push(ProtectedBlock {
                placeholder: placeholder.clone(),
                content: caps[0].to_owned(),
            });
            placeholder
        })
        .into_owned();
    (masked, blocks)
}

/// Substitute the original blocks back in for their placeholder tokens.
///
/// Replacement runs in the same order the placeholders were introduced.
#[must_use]
pub fn restore(text: &str, blocks: &[ProtectedBlock]) -> String {
    let mut out = text.to_owned();
    for block in blocks {
        out = out.replace(&block.placeholder, &block.content);
    }
    out
}

/// Pick a placeholder prefix that does not occur in `text`.
///
/// Each extension appends to the previous prefix, so the loop terminates
/// once the prefix is longer than any substring of the input.
fn unique_prefix(text: &str) -> String {
    let mut prefix = PLACEHOLDER_PREFIX.to_owned();
    while text.contains(&prefix) {
        prefix.push_str("X_");
    }
    prefix
}
