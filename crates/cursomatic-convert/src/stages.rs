//! The ordered stage table plus the single-pattern stages.
//!
//! A [`Stage`] is one pattern-substitution step in the conversion pipeline.
//! [`STAGES`] lists them in execution order; that order is load-bearing:
//!
//! - fenced code blocks render first so no later stage conceptually rewrites
//!   code content
//! - headings run from six markers down to one so a deeper heading is never
//!   partially matched by a shallower rule
//! - italic runs before bold because bold markers (`**`/`__`) are a strict
//!   superset character sequence of italic markers
//! - links run after images because an image is a `!`-prefixed extension of
//!   the link syntax
//! - spacing normalization runs last, over already-normalized list markers

use std::sync::LazyLock;

use regex::Regex;

use crate::{emphasis, fenced, spacing};

/// One ordered pattern-substitution step in the conversion pipeline.
pub(crate) struct Stage {
    /// Stage name, for auditing the pipeline order.
    pub(crate) name: &'static str,
    /// Transform the whole document buffer.
    pub(crate) apply: fn(&str) -> String,
}

/// The conversion pipeline, in execution order.
pub(crate) const STAGES: &[Stage] = &[
    Stage {
        name: "fenced-code-blocks",
        apply: fenced::render_fenced_blocks,
    },
    Stage {
        name: "headings",
        apply: headings,
    },
    Stage {
        name: "italic",
        apply: emphasis::italic,
    },
    Stage {
        name: "bold",
        apply: emphasis::bold,
    },
    Stage {
        name: "inline-code",
        apply: inline_code,
    },
    Stage {
        name: "images",
        apply: images,
    },
    Stage {
        name: "links",
        apply: links,
    },
    Stage {
        name: "unordered-lists",
        apply: unordered_lists,
    },
    Stage {
        name: "ordered-lists",
        apply: ordered_lists,
    },
    Stage {
        name: "blank-line-before-list",
        apply: spacing::blank_line_before_list,
    },
    Stage {
        name: "blank-line-after-list",
        apply: spacing::blank_line_after_list,
    },
];

/// Names of the pipeline stages, in execution order.
#[must_use]
pub fn stage_names() -> Vec<&'static str> {
    STAGES.iter().map(|stage| stage.name).collect()
}

/// Heading patterns from six markers down to one, with their replacements.
static HEADINGS: LazyLock<Vec<(Regex, String)>> = LazyLock::new(|| {
    (1..=6)
        .rev()
        .map(|depth| {
            let pattern = Regex::new(&format!(r"(?m)^#{{{depth}}}\s+(.*)$")).unwrap();
            let replacement = format!("{} ${{1}}", "=".repeat(depth));
            (pattern, replacement)
        })
        .collect()
});

static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+?)`").unwrap());

static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

static UNORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[-*+][ \t]+(.*)$").unwrap());

static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\d+\.[ \t]+(.*)$").unwrap());

/// `#`..`######` headings become `=`..`======` headings.
fn headings(input: &str) -> String {
    let mut out = input.to_owned();
    for (pattern, replacement) in HEADINGS.iter() {
        out = pattern.replace_all(&out, replacement.as_str()).into_owned();
    }
    out
}

/// `` `code` `` becomes `+code+`.
fn inline_code(input: &str) -> String {
    INLINE_CODE.replace_all(input, "+${1}+").into_owned()
}

/// `![alt](url)` becomes `image::url[alt]`; `alt` may be empty.
fn images(input: &str) -> String {
    IMAGE.replace_all(input, "image::${2}[${1}]").into_owned()
}

/// `[text](url)` becomes `link:url[text]`.
fn links(input: &str) -> String {
    LINK.replace_all(input, "link:${2}[${1}]").into_owned()
}

/// `-`/`*`/`+` list items become `* item`, indentation flattened.
fn unordered_lists(input: &str) -> String {
    UNORDERED_ITEM.replace_all(input, "* ${1}").into_owned()
}

/// `1.`/`2.`/... list items become `. item`, numbering discarded.
fn ordered_lists(input: &str) -> String {
    ORDERED_ITEM.replace_all(input, ". ${1}").into_owned()
}
