//! CLI entry point for the campus navigator.
//!
//! Parses arguments with clap, runs the requested query, renders the result
//! to stdout and maps failures to a non-zero exit status. Logging is
//! initialised first so every later step can emit diagnostics.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, field};

use wayfinder_cli::{
    cli::{Cli, CliError, render_output, run_cli},
    logging::{self, LoggingError},
};

/// Parse CLI arguments, execute the command, render the output, and flush
/// the stream.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let output = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_output(&output, &mut writer).context("failed to render output")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let cli_error = err.downcast_ref::<CliError>();
        let code = cli_error.and_then(|cli_error| match cli_error {
            CliError::Query(query) => Some(query.code().as_str()),
            CliError::EdgeList(edges) => Some(edges.code().as_str()),
            CliError::Io { .. } => None,
        });

        error!(
            error = %format!("{err:#}"),
            code = code.map(field::display),
            "command execution failed"
        );
        report_failure(cli_error.map_or_else(|| format!("{err:#}"), ToString::to_string));
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}

#[expect(
    clippy::print_stderr,
    reason = "Query failures are shown to the user whatever the log filter"
)]
fn report_failure(message: String) {
    eprintln!("{message}");
}
