// ABOUTME: Re-indents content lines that follow list items so they nest under them.
// ABOUTME: A fold over lines threading an explicit "inside a list block" state.

//! Hierarchy fixing.
//!
//! Converters often flatten Markdown so that paragraphs, tables and formulas
//! that belong to a list item end up at column 0. Walking the document top
//! to bottom, every content line after a list item is indented by four
//! spaces until the next heading.
//!
//! Content lines that are already indented by at least four columns are
//! left alone, which makes the fix idempotent.

use std::borrow::Cow;

use crate::classify::{classify, leading_width, LineKind};

/// Prefix added to content lines inside a list block.
pub const INDENT: &str = "    ";

const NESTED_WIDTH: usize = 4;

/// Scanner state carried from one line to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProcessingState {
    pub in_list: bool,
}

impl ProcessingState {
    /// State after a line of the given kind.
    pub fn after(self, kind: LineKind) -> Self {
        match kind {
            LineKind::Heading => Self { in_list: false },
            LineKind::ListItem => Self { in_list: true },
            LineKind::Blank | LineKind::Content => self,
        }
    }
}

/// Counters collected while fixing a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixStats {
    pub lines: usize,
    pub indented: usize,
}

/// Fix one line given the state before it.
///
/// Returns the state after the line and the line to emit.
pub fn fix_line(state: ProcessingState, line: &str) -> (ProcessingState, Cow<'_, str>) {
    let kind = classify(line);
    let next = state.after(kind);

    let out = match kind {
        LineKind::Content if state.in_list && leading_width(line) < NESTED_WIDTH => {
            let mut indented = String::with_capacity(INDENT.len() + line.len());
            indented.push_str(INDENT);
            indented.push_str(line);
            Cow::Owned(indented)
        }
        _ => Cow::Borrowed(line),
    };

    (next, out)
}

/// Fix a sequence of lines, each carrying its own terminator.
pub fn fix_lines<'a, I>(lines: I) -> Vec<Cow<'a, str>>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .scan(ProcessingState::default(), |state, line| {
            let (next, out) = fix_line(*state, line);
            *state = next;
            Some(out)
        })
        .collect()
}

/// Fix a whole document, preserving every line terminator.
pub fn fix_text(text: &str) -> (String, FixStats) {
    let mut out = String::with_capacity(text.len());
    let mut stats = FixStats::default();

    for line in fix_lines(text.split_inclusive('\n')) {
        stats.lines += 1;
        if matches!(line, Cow::Owned(_)) {
            stats.indented += 1;
        }
        out.push_str(&line);
    }

    (out, stats)
}
