//! # sqlgen-core
//!
//! A small SQL statement builder paired with a delimiter balance checker.
//!
//! This crate provides:
//! - Chainable builders for SELECT, INSERT, CREATE TABLE, INNER JOIN, SET,
//!   set operations, EXISTS and DROP TABLE that render to formatted SQL text
//! - A checker that scans text for unbalanced parentheses, single quotes and
//!   backticks and reports the line and column of each problem
//!
//! The checker does not understand SQL. It only tracks the three delimiter
//! families, which is enough to catch the most common mistakes in generated
//! queries.
//!
//! ## Building and checking
//!
//! ```rust
//! use sqlgen_core::builder::{Select, StatementNode};
//! use sqlgen_core::RenderOptions;
//!
//! let query = Select::new()
//!     .select(["id", "name"])
//!     .from(["users"]);
//!
//! let sql = query.render(0, &RenderOptions::default());
//! assert_eq!(sql, "SELECT id, name\nFROM users\n");
//! assert!(query.validate().is_empty());
//! ```
//!
//! ## Checking arbitrary text
//!
//! ```rust
//! use sqlgen_core::syntax::validate;
//!
//! let diagnostics = validate("SELECT name FROM `users WHERE id = 1");
//! assert_eq!(diagnostics[0].to_string(), "Unclosed ` at 0, 17");
//! ```

pub mod builder;
pub mod error;
pub mod render;
pub mod syntax;

pub use builder::{Fragment, Statement, StatementNode};
pub use error::{Error, Result};
pub use render::{DiagnosticSink, RenderOptions};
pub use syntax::{validate, Diagnostic, DiagnosticKind};
