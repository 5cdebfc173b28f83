// ABOUTME: Library entry point for the Markdown hierarchy fixer.
// ABOUTME: Re-exports line classification, the line fold, and the in-place file fix.

//! Notes hierarchy - restores list nesting in Markdown produced by document
//! converters.
//!
//! # Example
//!
//! ```
//! use notes_hierarchy::fix_text;
//!
//! let (fixed, _) = fix_text("- item\nsome text\n# Heading\nmore text\n");
//! assert_eq!(fixed, "- item\n    some text\n# Heading\nmore text\n");
//! ```

pub mod classify;
pub mod error;
pub mod file;
pub mod fixer;
pub mod logging;

pub use crate::classify::{classify, LineKind};
pub use crate::error::FixError;
pub use crate::file::{fix_file, write_atomic, FixOutcome};
pub use crate::fixer::{fix_line, fix_lines, fix_text, FixStats, ProcessingState, INDENT};
