//! The delimiter balance scan.

use super::{Delimiter, DelimiterStack, Diagnostic, PositionTracker};
use crate::error::{Error, Result};

/// Scans `text` and returns every delimiter imbalance found.
///
/// Unopened delimiters are reported in scan order. Delimiters still open at
/// the end follow, most recently opened first, each at the position where it
/// was opened. An empty result means all three families are balanced.
#[must_use]
pub fn validate(text: &str) -> Vec<Diagnostic> {
    let mut tracker = PositionTracker::new();
    let mut stack = DelimiterStack::new();
    let mut diagnostics = vec![];

    for c in text.chars() {
        let position = tracker.advance(c);
        let Some(delimiter) = Delimiter::from_char(c) else {
            continue;
        };

        match delimiter {
            Delimiter::OpenParen => stack.push(delimiter, position),
            d if d.is_self_pairing() && !stack.is_open(d) => stack.push(d, position),
            d if stack.is_open(d) => {
                stack.pop_matching(d);
            }
            d => diagnostics.push(Diagnostic::unopened(d, position)),
        }
    }

    diagnostics.extend(
        stack
            .drain_unclosed()
            .map(|pending| Diagnostic::unclosed(pending.delimiter, pending.position)),
    );
    diagnostics
}

/// Like [`validate`], but turns any diagnostic into an error.
///
/// # Errors
///
/// Returns [`Error::Unbalanced`] carrying every diagnostic found.
pub fn check(text: &str) -> Result<()> {
    let diagnostics = validate(text);
    if diagnostics.is_empty() {
        Ok(())
    } else {
        Err(Error::Unbalanced { diagnostics })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::DiagnosticKind;

    #[test]
    fn test_plain_text_is_clean() {
        assert!(validate("").is_empty());
        assert!(validate("SELECT id FROM users").is_empty());
    }

    #[test]
    fn test_unopened_paren() {
        let diagnostics = validate("a)");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::UnopenedDelimiter);
        assert_eq!(diagnostics[0].delimiter, Delimiter::CloseParen);
        assert_eq!((diagnostics[0].line, diagnostics[0].column), (0, 1));
    }

    #[test]
    fn test_quote_pairs_with_itself() {
        assert!(validate("'a'").is_empty());
        let diagnostics = validate("x 'a");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::UnclosedDelimiter);
        assert_eq!(diagnostics[0].delimiter, Delimiter::Quote);
        assert_eq!(diagnostics[0].column, 2);
    }

    #[test]
    fn test_close_paren_reaches_past_open_backtick() {
        let diagnostics = validate("(a `b c)");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].delimiter, Delimiter::Backtick);
        assert_eq!(diagnostics[0].column, 3);
    }

    #[test]
    fn test_unopened_before_unclosed() {
        let diagnostics = validate("(\n))");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::UnopenedDelimiter);
        assert_eq!((diagnostics[0].line, diagnostics[0].column), (1, 1));

        let diagnostics = validate(")(");
        assert_eq!(diagnostics[0].kind, DiagnosticKind::UnopenedDelimiter);
        assert_eq!(diagnostics[1].kind, DiagnosticKind::UnclosedDelimiter);
    }

    #[test]
    fn test_check() {
        assert!(check("COUNT(*)").is_ok());
        let Err(Error::Unbalanced { diagnostics }) = check("COUNT(*") else {
            panic!("expected unbalanced error");
        };
        assert_eq!(diagnostics.len(), 1);
    }
}
