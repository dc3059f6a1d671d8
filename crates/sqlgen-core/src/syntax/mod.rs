//! Delimiter balance checking.
//!
//! This is not a SQL parser. The checker only looks at three families of
//! paired delimiters: parentheses, single quotes and backticks. Quotes and
//! backticks pair with themselves, so whether an occurrence opens or closes a
//! context depends on whether one of the same family is already pending.
//!
//! # Example
//!
//! ```rust
//! use sqlgen_core::syntax::{validate, DiagnosticKind};
//!
//! assert!(validate("SELECT COUNT(*) FROM `users` WHERE name = 'bob'").is_empty());
//!
//! let diagnostics = validate("SELECT (1");
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].kind, DiagnosticKind::UnclosedDelimiter);
//! assert_eq!(diagnostics[0].to_string(), "Unclosed ( at 0, 7");
//! ```

mod diagnostic;
mod position;
mod stack;
mod validator;

pub use diagnostic::{write_report, Delimiter, Diagnostic, DiagnosticKind};
pub use position::{Position, PositionTracker};
pub use stack::{DelimiterStack, PendingDelimiter};
pub use validator::{check, validate};
