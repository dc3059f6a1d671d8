//! Stack of delimiters that have been opened but not yet closed.

use super::{Delimiter, Position};

/// An opening delimiter waiting for its close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDelimiter {
    /// The opening delimiter.
    pub delimiter: Delimiter,
    /// Where it was opened.
    pub position: Position,
}

/// Last-in-first-out store of pending delimiters.
///
/// Lookups are family-aware: a closing `)` matches a pending `(`, while quotes
/// and backticks match themselves. Matching searches the whole stack, not just
/// the top, so a close may remove an entry below other open contexts.
#[derive(Debug, Clone, Default)]
pub struct DelimiterStack {
    entries: Vec<PendingDelimiter>,
}

impl DelimiterStack {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: vec![] }
    }

    /// Pushes an opening delimiter.
    pub fn push(&mut self, delimiter: Delimiter, position: Position) {
        self.entries.push(PendingDelimiter {
            delimiter,
            position,
        });
    }

    /// Removes and returns the top entry, if any.
    #[doc(alias = "pop_top")]
    pub fn pop(&mut self) -> Option<PendingDelimiter> {
        self.entries.pop()
    }

    /// Removes the topmost entry of `close`'s family and returns it.
    ///
    /// Returns `None` and leaves the stack untouched when nothing of that
    /// family is pending.
    pub fn pop_matching(&mut self, close: Delimiter) -> Option<PendingDelimiter> {
        let opener = close.opener();
        let index = self.entries.iter().rposition(|e| e.delimiter == opener)?;
        Some(self.entries.remove(index))
    }

    /// Returns true if any entry of `delimiter`'s family is pending.
    #[must_use]
    pub fn is_open(&self, delimiter: Delimiter) -> bool {
        let opener = delimiter.opener();
        self.entries.iter().any(|e| e.delimiter == opener)
    }

    /// Empties the stack, yielding entries from most to least recently opened.
    pub fn drain_unclosed(&mut self) -> impl Iterator<Item = PendingDelimiter> + '_ {
        self.entries.drain(..).rev()
    }

    /// Returns the number of pending entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
