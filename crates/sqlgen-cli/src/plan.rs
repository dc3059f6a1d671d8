//! The `render` command: statement plans described in JSON.

use std::io::Write;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use sqlgen_core::builder::{Statement, StatementNode};
use sqlgen_core::{DiagnosticSink, RenderOptions};

use crate::error::{CliError, Result};

/// A plan file holds either one statement or a list of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PlanFile {
    Many(Vec<Statement>),
    One(Statement),
}

/// How a plan is rendered.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    /// Indentation level of each statement.
    pub indent: usize,
    /// Text appended after each statement.
    pub delimiter: String,
    /// Validation settings.
    pub options: RenderOptions,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            indent: 0,
            delimiter: String::from(";"),
            options: RenderOptions::default().with_sink(DiagnosticSink::Stderr),
        }
    }
}

/// Parses a plan from JSON text.
///
/// # Errors
///
/// Returns [`CliError::Plan`] if the text is not a statement or a list of
/// statements.
pub fn parse_plan(path: &Path, json: &str) -> Result<Vec<Statement>> {
    let plan: PlanFile = serde_json::from_str(json).map_err(|source| CliError::Plan {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match plan {
        PlanFile::Many(statements) => statements,
        PlanFile::One(statement) => vec![statement],
    })
}

/// Reads and parses a plan file.
///
/// # Errors
///
/// Returns [`CliError::Read`] or [`CliError::Plan`].
pub fn load_plan(path: &Path) -> Result<Vec<Statement>> {
    let json = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let statements = parse_plan(path, &json)?;
    info!(path = %path.display(), statements = statements.len(), "Loaded plan");
    Ok(statements)
}

/// Renders each statement followed by the delimiter and a newline.
///
/// Returns the number of diagnostics reported while rendering.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn render_plan<W: Write>(
    mut w: W,
    statements: &[Statement],
    settings: &RenderSettings,
) -> Result<usize> {
    let mut diagnostics = 0;
    for statement in statements {
        let (sql, reported) =
            statement.render_with_diagnostics(settings.indent, &settings.options);
        diagnostics += reported.len();
        debug!(bytes = sql.len(), "Rendered statement");
        writeln!(w, "{sql}{}", settings.delimiter)?;
    }
    Ok(diagnostics)
}

/// Runs the `render` command on the plan at `path`.
///
/// # Errors
///
/// Returns [`CliError::DiagnosticsFound`] when rendering reported any
/// diagnostic, or the error from loading the plan or writing.
pub fn run_render<W: Write>(w: W, path: &Path, settings: &RenderSettings) -> Result<()> {
    let statements = load_plan(path)?;
    let total = render_plan(w, &statements, settings)?;
    if total > 0 {
        return Err(CliError::DiagnosticsFound(total));
    }
    Ok(())
}
