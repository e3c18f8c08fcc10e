//! # Markdown Heading Analysis
//!
//! Counts top-level (`# `) headings in a content body. Fenced code blocks
//! are removed first so that shell comments and Python snippets inside
//! examples are not mistaken for headings.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

fn code_block_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Lazy match: each opening fence pairs with the nearest following fence.
    PATTERN.get_or_init(|| Regex::new(r"(?s)```.*?```").expect("static regex"))
}

fn top_level_heading_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // `.` would match a trailing `\r`, so CRLF lines need an explicit class.
    PATTERN.get_or_init(|| Regex::new(r"(?m)^# [^\r\n]+").expect("static regex"))
}

/// Remove every fenced code block span from `text`.
///
/// A span runs from a triple-backtick marker to the next one. Fences do not
/// nest, and a final unmatched marker is left untouched.
pub fn strip_code_blocks(text: &str) -> Cow<'_, str> {
    code_block_pattern().replace_all(text, "")
}

/// Count lines starting with exactly one `#` followed by a space and some
/// heading text, ignoring anything inside fenced code blocks.
pub fn count_top_level_headings(body: &str) -> usize {
    let stripped = strip_code_blocks(body);
    top_level_heading_pattern().find_iter(&stripped).count()
}
