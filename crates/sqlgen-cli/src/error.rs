//! Error types for the command-line tool.

use std::path::PathBuf;

/// Errors that can occur while checking or rendering.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// An input file could not be read.
    #[error("Failed to read '{path}': {source}")]
    Read {
        /// Path of the input.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// A statement plan is not valid JSON for a statement or list of statements.
    #[error("Invalid statement plan '{path}': {source}")]
    Plan {
        /// Path of the plan.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// IO error writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error writing JSON output.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Checked text had unbalanced delimiters.
    #[error("Found {0} delimiter diagnostic(s)")]
    DiagnosticsFound(usize),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
