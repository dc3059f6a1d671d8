//! Error types.

use crate::syntax::Diagnostic;

/// Errors raised by the strict checking helpers.
///
/// Plain rendering and [`validate`](crate::syntax::validate) never fail;
/// this type exists for callers that want imbalance to stop them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The text contains unbalanced delimiters.
    #[error("Unbalanced delimiters:\n{}", .diagnostics.iter().map(|d| format!("  - {d}")).collect::<Vec<_>>().join("\n"))]
    Unbalanced {
        /// Every diagnostic found, in report order.
        diagnostics: Vec<Diagnostic>,
    },
}

/// Result type for strict checking.
pub type Result<T> = std::result::Result<T, Error>;
