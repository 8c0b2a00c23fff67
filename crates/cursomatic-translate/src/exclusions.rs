//! Exclusion keyword loading.
//!
//! Exclusion files list terms (product names, command names, jargon) the
//! translator must leave in English, one per line.

use std::io;
use std::path::Path;

/// Load exclusion keywords from a plain text file.
///
/// One keyword or phrase per line; surrounding whitespace is trimmed and
/// blank lines are skipped. Order is preserved.
pub fn load_exclusion_keywords(path: &Path) -> io::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect())
}
