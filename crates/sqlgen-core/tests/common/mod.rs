#![allow(dead_code)]

use sqlgen_core::syntax::{validate, Delimiter, Diagnostic, DiagnosticKind};

pub fn diagnose(text: &str) -> Vec<Diagnostic> {
    validate(text)
}

pub fn assert_clean(text: &str) {
    let diagnostics = validate(text);
    assert!(
        diagnostics.is_empty(),
        "Expected no diagnostics for {text:?}, got {diagnostics:?}"
    );
}

/// Asserts the diagnostics as `(kind, delimiter, line, column)` tuples.
pub fn assert_diagnostics(text: &str, expected: &[(DiagnosticKind, char, usize, usize)]) {
    let got: Vec<_> = validate(text)
        .into_iter()
        .map(|d| (d.kind, d.delimiter.as_char(), d.line, d.column))
        .collect();
    assert_eq!(got, expected, "Diagnostics differ for {text:?}");
}

pub fn unopened(c: char, line: usize, column: usize) -> (DiagnosticKind, char, usize, usize) {
    (DiagnosticKind::UnopenedDelimiter, c, line, column)
}

pub fn unclosed(c: char, line: usize, column: usize) -> (DiagnosticKind, char, usize, usize) {
    (DiagnosticKind::UnclosedDelimiter, c, line, column)
}

/// Balanced strings used as building blocks for property checks.
pub fn balanced_samples() -> Vec<String> {
    let mut samples = vec![
        String::new(),
        String::from("SELECT 1"),
        String::from("COUNT(*)"),
        String::from("'it''s'"),
        String::from("`order` (a, 'b')"),
        String::from("((x))\n(y)"),
        String::from("f(g(h('x')))"),
        String::from("multi\nline\n`text`"),
    ];
    for n in 0..12 {
        samples.push(format!("{}{}", "(".repeat(n), ")".repeat(n)));
    }
    samples
}

pub fn delimiter(c: char) -> Delimiter {
    Delimiter::from_char(c).unwrap_or_else(|| panic!("{c:?} is not a delimiter"))
}
