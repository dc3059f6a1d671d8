//! Diagnostics reported by the delimiter checker.

use core::fmt;
use std::io::{self, Write};

use super::Position;

/// A delimiter character the checker tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Delimiter {
    /// `(`
    #[cfg_attr(feature = "serde", serde(rename = "("))]
    OpenParen,
    /// `)`
    #[cfg_attr(feature = "serde", serde(rename = ")"))]
    CloseParen,
    /// `'`
    #[cfg_attr(feature = "serde", serde(rename = "'"))]
    Quote,
    /// `` ` ``
    #[cfg_attr(feature = "serde", serde(rename = "`"))]
    Backtick,
}

impl Delimiter {
    /// Classifies a character, returning `None` for anything untracked.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::OpenParen),
            ')' => Some(Self::CloseParen),
            '\'' => Some(Self::Quote),
            '`' => Some(Self::Backtick),
            _ => None,
        }
    }

    /// Returns the character for this delimiter.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::OpenParen => '(',
            Self::CloseParen => ')',
            Self::Quote => '\'',
            Self::Backtick => '`',
        }
    }

    /// Returns the delimiter that opens this one's family.
    ///
    /// Quotes and backticks open their own family.
    #[must_use]
    pub const fn opener(self) -> Self {
        match self {
            Self::CloseParen => Self::OpenParen,
            other => other,
        }
    }

    /// Returns true for delimiters whose open and close characters are the same.
    #[must_use]
    pub const fn is_self_pairing(self) -> bool {
        matches!(self, Self::Quote | Self::Backtick)
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The two classes of imbalance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DiagnosticKind {
    /// A closing delimiter with no pending opener.
    UnopenedDelimiter,
    /// An opening delimiter still pending at the end of the text.
    UnclosedDelimiter,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnopenedDelimiter => write!(f, "Unopened"),
            Self::UnclosedDelimiter => write!(f, "Unclosed"),
        }
    }
}

/// A delimiter imbalance and where it was found.
///
/// For unclosed delimiters the position is where the delimiter was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    /// What went wrong.
    pub kind: DiagnosticKind,
    /// The offending delimiter.
    pub delimiter: Delimiter,
    /// Zero-based line.
    pub line: usize,
    /// Zero-based column, in characters.
    pub column: usize,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub const fn new(kind: DiagnosticKind, delimiter: Delimiter, position: Position) -> Self {
        Self {
            kind,
            delimiter,
            line: position.line,
            column: position.column,
        }
    }

    /// Creates an "unopened" diagnostic.
    #[must_use]
    pub const fn unopened(delimiter: Delimiter, position: Position) -> Self {
        Self::new(DiagnosticKind::UnopenedDelimiter, delimiter, position)
    }

    /// Creates an "unclosed" diagnostic.
    #[must_use]
    pub const fn unclosed(delimiter: Delimiter, position: Position) -> Self {
        Self::new(DiagnosticKind::UnclosedDelimiter, delimiter, position)
    }

    /// Returns the position of the diagnostic.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} at {}, {}",
            self.kind, self.delimiter, self.line, self.column
        )
    }
}

/// Writes a human-readable report: one line per diagnostic, then the
/// examined text when there was anything to report.
///
/// # Errors
///
/// Returns any error raised by the underlying writer.
pub fn write_report<W: Write>(
    mut w: W,
    diagnostics: &[Diagnostic],
    text: &str,
) -> io::Result<()> {
    for diagnostic in diagnostics {
        writeln!(w, "{diagnostic}")?;
    }
    if !diagnostics.is_empty() {
        writeln!(w, "Examined")?;
        writeln!(w, "{text}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_round_trip_chars() {
        for c in ['(', ')', '\'', '`'] {
            let d = Delimiter::from_char(c).unwrap();
            assert_eq!(d.as_char(), c);
        }
        assert_eq!(Delimiter::from_char('"'), None);
        assert_eq!(Delimiter::from_char('['), None);
    }

    #[test]
    fn test_opener() {
        assert_eq!(Delimiter::CloseParen.opener(), Delimiter::OpenParen);
        assert_eq!(Delimiter::Quote.opener(), Delimiter::Quote);
        assert_eq!(Delimiter::Backtick.opener(), Delimiter::Backtick);
        assert!(!Delimiter::OpenParen.is_self_pairing());
        assert!(Delimiter::Backtick.is_self_pairing());
    }

    #[test]
    fn test_display() {
        let d = Diagnostic::unopened(Delimiter::CloseParen, Position::new(2, 14));
        assert_eq!(d.to_string(), "Unopened ) at 2, 14");
        let d = Diagnostic::unclosed(Delimiter::Backtick, Position::new(0, 3));
        assert_eq!(d.to_string(), "Unclosed ` at 0, 3");
    }

    #[test]
    fn test_write_report_empty_writes_nothing() {
        let mut out = Vec::new();
        write_report(&mut out, &[], "SELECT 1").unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_report_includes_examined_text() {
        let diagnostics = [Diagnostic::unclosed(Delimiter::OpenParen, Position::new(0, 0))];
        let mut out = Vec::new();
        write_report(&mut out, &diagnostics, "(a").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Unclosed ( at 0, 0\nExamined\n(a\n"
        );
    }
}
