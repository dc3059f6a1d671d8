//! Rendering options and diagnostic reporting.

use std::io;

use tracing::{debug, warn};

use crate::syntax::{validate, write_report, Diagnostic};

/// Where diagnostics go when a render validates its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagnosticSink {
    /// Plain text report on standard output.
    #[default]
    Stdout,
    /// Plain text report on standard error.
    Stderr,
    /// One `warn!` event per diagnostic.
    Tracing,
}

/// Options controlling [`StatementNode::render`](crate::builder::StatementNode::render).
///
/// Validation is on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Check the rendered text and report diagnostics.
    pub validate: bool,
    /// Destination for diagnostics.
    pub sink: DiagnosticSink,
}

impl RenderOptions {
    /// Creates options with validation switched on or off.
    #[must_use]
    pub const fn new(validate: bool) -> Self {
        Self {
            validate,
            sink: DiagnosticSink::Stdout,
        }
    }

    /// Options that skip validation entirely.
    #[must_use]
    pub const fn quiet() -> Self {
        Self::new(false)
    }

    /// Sets the diagnostic sink.
    #[must_use]
    pub const fn with_sink(mut self, sink: DiagnosticSink) -> Self {
        self.sink = sink;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Validates `text` and sends any diagnostics to the configured sink.
///
/// Does nothing when validation is disabled. The diagnostics are returned so
/// callers can act on them as well.
pub fn report(text: &str, options: &RenderOptions) -> Vec<Diagnostic> {
    if !options.validate {
        return vec![];
    }

    let diagnostics = validate(text);
    debug!(diagnostics = diagnostics.len(), "Validated rendered SQL");
    if diagnostics.is_empty() {
        return diagnostics;
    }

    let written = match options.sink {
        DiagnosticSink::Stdout => write_report(io::stdout().lock(), &diagnostics, text),
        DiagnosticSink::Stderr => write_report(io::stderr().lock(), &diagnostics, text),
        DiagnosticSink::Tracing => {
            for d in &diagnostics {
                warn!(
                    kind = %d.kind,
                    delimiter = %d.delimiter,
                    line = d.line,
                    column = d.column,
                    "Unbalanced delimiter"
                );
            }
            debug!(sql = %text, "Examined");
            Ok(())
        }
    };
    if let Err(e) = written {
        warn!(error = %e, "Failed to write diagnostics");
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates_to_stdout() {
        let options = RenderOptions::default();
        assert!(options.validate);
        assert_eq!(options.sink, DiagnosticSink::Stdout);
    }

    #[test]
    fn test_quiet_reports_nothing() {
        assert!(report("((", &RenderOptions::quiet()).is_empty());
    }

    #[test]
    fn test_report_returns_diagnostics() {
        let options = RenderOptions::default().with_sink(DiagnosticSink::Tracing);
        assert_eq!(report("((", &options).len(), 2);
        assert!(report("()", &options).is_empty());
    }
}
