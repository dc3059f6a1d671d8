//! Properties of the delimiter checker over families of inputs.

mod common;
use common::*;

use sqlgen_core::syntax::{Position, PositionTracker};

fn end_position(text: &str) -> Position {
    let mut tracker = PositionTracker::new();
    for c in text.chars() {
        tracker.advance(c);
    }
    tracker.advance(')')
}

#[test]
fn text_without_delimiters_is_clean() {
    let inputs = [
        "",
        "SELECT id FROM users",
        "a\nb\nc",
        "\"double quotes are ignored\"",
        "[brackets] {braces} <angles>",
        "unicode é ü 日本",
    ];
    for input in inputs {
        assert_clean(input);
    }
}

#[test]
fn balanced_samples_are_clean() {
    for sample in balanced_samples() {
        assert_clean(&sample);
    }
}

#[test]
fn appended_close_paren_is_unopened_at_its_position() {
    for sample in balanced_samples() {
        let text = format!("{sample})");
        let position = end_position(&sample);
        assert_diagnostics(&text, &[unopened(')', position.line, position.column)]);
    }
}

#[test]
fn nested_parens_balance_for_every_depth() {
    for n in 0..64 {
        assert_clean(&format!("{}{}", "(".repeat(n), ")".repeat(n)));
    }
}

#[test]
fn quote_self_pairing() {
    assert_clean("'a'");
    assert_diagnostics("'a", &[unclosed('\'', 0, 0)]);
    assert_clean("'a' 'b'");
    assert_diagnostics("'a' 'b", &[unclosed('\'', 0, 4)]);
}

#[test]
fn backtick_inside_parens() {
    assert_clean("(a `b` c)");
    assert_diagnostics("(a `b c)", &[unclosed('`', 0, 3)]);
}

#[test]
fn unclosed_are_reported_most_recent_first() {
    assert_diagnostics("((", &[unclosed('(', 0, 1), unclosed('(', 0, 0)]);
    assert_diagnostics(
        "( ' `",
        &[unclosed('`', 0, 4), unclosed('\'', 0, 2), unclosed('(', 0, 0)],
    );
}

#[test]
fn unopened_precede_unclosed_in_scan_order() {
    assert_diagnostics(
        ")\n(\n)\n)",
        &[unopened(')', 0, 0), unopened(')', 3, 0)],
    );
    assert_diagnostics("( ) ) (", &[unopened(')', 0, 4), unclosed('(', 0, 6)]);
}

#[test]
fn quotes_are_never_unopened() {
    for text in ["'", "`", "x'", "(`"] {
        let diagnostics = diagnose(text);
        assert!(diagnostics
            .iter()
            .all(|d| d.kind == sqlgen_core::DiagnosticKind::UnclosedDelimiter));
    }
}

#[test]
fn close_paren_matches_below_pending_quote() {
    // The quote stays open because `)` reaches past it to the pending `(`.
    assert_diagnostics("('x)", &[unclosed('\'', 0, 1)]);
}

#[test]
fn positions_span_lines() {
    let text = "SELECT *\nFROM users\nWHERE name = 'bob";
    assert_diagnostics(text, &[unclosed('\'', 2, 13)]);
    assert_eq!(delimiter('\'').as_char(), '\'');
}

#[test]
fn newline_resets_column() {
    assert_diagnostics("abc\n)", &[unopened(')', 1, 0)]);
    assert_diagnostics("\n\n  )", &[unopened(')', 2, 2)]);
}
