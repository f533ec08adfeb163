//! The `pda` Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and wires the
//! validators, the fixture harness, and the output renderers together.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use termcolor::{ColorChoice, StandardStream};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::args::{Command, Format, PdaArgs};
use crate::error::{PdaError, RejectionDiagnostic, Result};
use crate::harness;
use crate::validators::ValidatorKind;

pub mod args;
pub mod output;

/// Exit code for a rejected input or a failing fixture run.
const EXIT_REJECTED: u8 = 1;
/// Exit code for errors that prevented a verdict.
const EXIT_ERROR: u8 = 2;

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

/// The main entry point for the CLI.
pub fn run() -> ExitCode {
    let args = PdaArgs::parse();
    init_logging(args.verbose);
    let color = output::color_choice(args.color);

    let result = match args.command {
        Command::Check {
            kind,
            input,
            file,
            format,
        } => load_input(input, file.as_deref())
            .and_then(|input| handle_check(kind, &input, format, color)),
        Command::Test {
            kind,
            failures_only,
        } => handle_test(kind, failures_only, color),
        Command::List => handle_list(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            output::print_diagnostic(e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

// ============================================================================
// SUBCOMMAND HANDLERS
// ============================================================================

/// Picks the inline input or reads it from `file`.
fn load_input(input: Option<String>, file: Option<&Path>) -> Result<String> {
    match (input, file) {
        (Some(input), _) => Ok(input),
        (None, Some(path)) => read_input_file(path),
        (None, None) => Err(PdaError::MissingInput),
    }
}

/// Reads an input file, dropping a single trailing line ending.
pub fn read_input_file(path: &Path) -> Result<String> {
    let mut content = fs::read_to_string(path).map_err(|source| PdaError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    if content.ends_with('\n') {
        content.pop();
        if content.ends_with('\r') {
            content.pop();
        }
    }
    Ok(content)
}

fn handle_check(
    kind: ValidatorKind,
    input: &str,
    format: Format,
    color: ColorChoice,
) -> Result<ExitCode> {
    let mut validator = kind.create();
    let accepted = validator.validate(input);
    let outcome = validator.outcome();
    info!(validator = kind.label(), accepted, "checked input");

    let mut stdout = StandardStream::stdout(color);
    match format {
        Format::Text => {
            output::write_verdict(&mut stdout, kind, accepted)?;
            output::write_listing(&mut stdout, &outcome.trace)?;
            stdout.flush()?;
            if let Some(rejection) = &outcome.rejection {
                output::print_diagnostic(RejectionDiagnostic::new(kind, input, rejection));
            }
        }
        Format::Json => {
            let report = output::CheckReport::new(kind, input, outcome);
            serde_json::to_writer_pretty(&mut stdout, &report)?;
            writeln!(stdout)?;
        }
        Format::Dot => write!(stdout, "{}", output::to_dot(&outcome.trace))?,
    }

    Ok(verdict_code(accepted))
}

fn handle_test(
    kind: Option<ValidatorKind>,
    failures_only: bool,
    color: ColorChoice,
) -> Result<ExitCode> {
    let outcomes = harness::run_fixtures_for(kind);
    let mut stdout = StandardStream::stdout(color);
    let summary = harness::report_results(&mut stdout, &outcomes, failures_only)?;
    Ok(verdict_code(summary.failed == 0))
}

fn handle_list() -> Result<ExitCode> {
    let stdout = io::stdout();
    output::write_kinds(&mut stdout.lock())?;
    Ok(ExitCode::SUCCESS)
}

fn verdict_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_REJECTED)
    }
}
