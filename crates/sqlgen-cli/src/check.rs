//! The `check` command: delimiter checking of SQL files.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use sqlgen_core::syntax::{validate, write_report, Diagnostic};

use crate::error::{CliError, Result};

/// Name used for input read from standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// How diagnostics are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report.
    #[default]
    Text,
    /// JSON array of per-file results.
    Json,
}

/// Diagnostics for one input.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Input name.
    pub file: String,
    /// Diagnostics found, in report order.
    pub diagnostics: Vec<Diagnostic>,
    #[serde(skip)]
    text: String,
}

impl FileReport {
    /// Checks `text` under the given input name.
    #[must_use]
    pub fn new(file: impl Into<String>, text: String) -> Self {
        let file = file.into();
        let diagnostics = validate(&text);
        debug!(file = %file, diagnostics = diagnostics.len(), "Checked input");
        Self {
            file,
            diagnostics,
            text,
        }
    }

    /// Returns true if nothing was reported.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Reads and checks a file.
///
/// # Errors
///
/// Returns [`CliError::Read`] if the file cannot be read.
pub fn check_file(path: &Path) -> Result<FileReport> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(FileReport::new(path.display().to_string(), text))
}

/// Reads and checks everything from `reader`.
///
/// # Errors
///
/// Returns [`CliError::Read`] if reading fails.
pub fn check_reader<R: Read>(mut reader: R) -> Result<FileReport> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| CliError::Read {
            path: STDIN_NAME.into(),
            source,
        })?;
    Ok(FileReport::new(STDIN_NAME, text))
}

/// Writes reports in the requested format and returns the total number of
/// diagnostics.
///
/// # Errors
///
/// Returns an error if writing or serializing fails.
pub fn write_reports<W: Write>(
    mut w: W,
    reports: &[FileReport],
    format: OutputFormat,
) -> Result<usize> {
    let total = reports.iter().map(|r| r.diagnostics.len()).sum();

    match format {
        OutputFormat::Text => {
            for report in reports {
                if report.is_clean() {
                    info!(file = %report.file, "No delimiter problems");
                    continue;
                }
                writeln!(w, "{}:", report.file)?;
                write_report(&mut w, &report.diagnostics, &report.text)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut w, reports)?;
            writeln!(w)?;
        }
    }

    Ok(total)
}

/// Runs the `check` command over `files`, or standard input when empty.
///
/// # Errors
///
/// Returns [`CliError::DiagnosticsFound`] when any input is unbalanced, or
/// the error from reading or writing.
pub fn run_check<W: Write>(w: W, files: &[PathBuf], format: OutputFormat) -> Result<()> {
    let reports = if files.is_empty() {
        vec![check_reader(std::io::stdin().lock())?]
    } else {
        files
            .iter()
            .map(|path| check_file(path))
            .collect::<Result<Vec<_>>>()?
    };

    let total = write_reports(w, &reports, format)?;
    if total > 0 {
        return Err(CliError::DiagnosticsFound(total));
    }
    info!(files = reports.len(), "All inputs balanced");
    Ok(())
}
