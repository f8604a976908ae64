//! Error types for inline text formatting
//!
//! Markup errors carry the byte offset of the delimiter that caused them so
//! the caller can report where the source went wrong.

use thiserror::Error;

/// Errors produced while parsing inline markup into styled runs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// An opening delimiter was never closed
    #[error("Unclosed delimiter `{delimiter}` at byte {offset}")]
    Unclosed {
        /// Delimiter as written in the source (e.g. `_` or `**`)
        delimiter: &'static str,
        /// Byte offset of the opening delimiter
        offset: usize,
    },

    /// A delimiter was closed immediately after being opened
    #[error("Empty span for delimiter `{delimiter}` at byte {offset}")]
    EmptySpan {
        /// Delimiter as written in the source
        delimiter: &'static str,
        /// Byte offset of the opening delimiter
        offset: usize,
    },
}
