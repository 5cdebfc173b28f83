// ABOUTME: Line classification for Markdown hierarchy fixing.
// ABOUTME: Sorts each line into Heading, ListItem, Blank or Content using regex rules.

use once_cell::sync::Lazy;
use regex::Regex;

// Headings start at column 0.
static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#+[ \t]+\S").unwrap());
static LIST_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*(?:[-*+]|\d+\.)[ \t]+").unwrap());

/// Structural kind of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading,
    ListItem,
    Blank,
    Content,
}

/// Split a line into its body and its terminator (`"\n"`, `"\r\n"` or `""`).
pub fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, &line[body.len()..])
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, &line[body.len()..])
    } else {
        (line, "")
    }
}

/// Classify a line, with or without its terminator.
///
/// Rules apply in precedence order: heading, list item, blank, content.
pub fn classify(line: &str) -> LineKind {
    let (body, _) = split_line_ending(line);
    if HEADING_RE.is_match(body) {
        LineKind::Heading
    } else if LIST_ITEM_RE.is_match(body) {
        LineKind::ListItem
    } else if body.trim().is_empty() {
        LineKind::Blank
    } else {
        LineKind::Content
    }
}

/// Width of the leading whitespace in columns; a tab counts as four.
pub fn leading_width(line: &str) -> usize {
    line.chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .map(|c| if c == '\t' { 4 } else { 1 })
        .sum()
}
