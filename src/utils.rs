//! Small text helpers shared by the extractors and the presentation layers.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize extracted text: trim the ends and collapse every whitespace run
/// (spaces, tabs, newlines, NBSP) into a single space.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(clean_text("  Hola \n\t mundo  "), "Hola mundo");
/// assert_eq!(clean_text(""), "");
/// ```
pub fn clean_text(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    WHITESPACE_RUN.replace_all(trimmed, " ").into_owned()
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (backing off to the previous
/// char boundary) with an ellipsis and byte count indicator appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// First `max` characters of `s`, with `...` appended when anything was cut.
pub fn preview(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
