//! sqlgen CLI
//!
//! Command-line tool for checking and rendering SQL.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use sqlgen_cli::prelude::*;
use sqlgen_core::{DiagnosticSink, RenderOptions};

/// SQL statement builder and delimiter checker.
#[derive(Parser)]
#[command(name = "sqlgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Skip delimiter validation of rendered statements.
    #[arg(long, env = "SQLGEN_NO_VALIDATE")]
    no_validate: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check SQL files for unbalanced parentheses, quotes and backticks.
    Check {
        /// Files to check (standard input if none).
        files: Vec<PathBuf>,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Render a JSON statement plan to SQL.
    Render {
        /// Plan file holding a statement or a list of statements.
        plan: PathBuf,

        /// Delimiter written after each statement.
        #[arg(short, long, default_value = ";")]
        delimiter: String,

        /// Indentation level.
        #[arg(short, long, default_value_t = 0)]
        indent: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let stdout = std::io::stdout();

    match cli.command {
        Commands::Check { files, format } => run_check(stdout.lock(), &files, format)?,

        Commands::Render {
            plan,
            delimiter,
            indent,
        } => {
            let settings = RenderSettings {
                indent,
                delimiter,
                options: RenderOptions::new(!cli.no_validate).with_sink(DiagnosticSink::Stderr),
            };
            run_render(stdout.lock(), &plan, &settings)?;
        }
    }

    Ok(())
}
