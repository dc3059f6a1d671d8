//! Line and column tracking for a linear scan.

/// A zero-based location in scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Number of newlines seen before this character.
    pub line: usize,
    /// Number of characters since the last newline.
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Converts a stream of characters into positions, one character at a time.
///
/// The character right after a newline is at column 0 of the next line.
#[derive(Debug, Clone, Default)]
pub struct PositionTracker {
    line: usize,
    next_column: usize,
}

impl PositionTracker {
    /// Creates a tracker positioned before the first character.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            line: 0,
            next_column: 0,
        }
    }

    /// Consumes `c` and returns the position it occupies.
    pub fn advance(&mut self, c: char) -> Position {
        let position = Position::new(self.line, self.next_column);
        if c == '\n' {
            self.line += 1;
            self.next_column = 0;
        } else {
            self.next_column += 1;
        }
        position
    }
}
