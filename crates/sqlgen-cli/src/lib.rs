//! Command-line front end for `sqlgen-core`.
//!
//! The `sqlgen` binary has two commands:
//!
//! - `check` scans SQL files (or standard input) for unbalanced
//!   parentheses, single quotes and backticks
//! - `render` turns a JSON statement plan into SQL text
//!
//! # CLI Usage
//!
//! ```bash
//! # Check files, failing when anything is unbalanced
//! sqlgen check queries/*.sql
//!
//! # Machine-readable diagnostics
//! sqlgen check --format json report.sql
//!
//! # Render a plan without validation
//! sqlgen --no-validate render plan.json --delimiter ';'
//! ```

pub mod check;
pub mod error;
pub mod plan;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::check::{
        check_file, check_reader, run_check, write_reports, FileReport, OutputFormat,
    };
    pub use crate::error::{CliError, Result};
    pub use crate::plan::{load_plan, parse_plan, render_plan, run_render, RenderSettings};
}
