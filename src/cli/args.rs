//! Defines the command-line arguments and subcommands for the `pda` CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::validators::ValidatorKind;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "pda",
    version,
    about = "Check strings with stack-driven recognizers and show every step."
)]
pub struct PdaArgs {
    #[command(subcommand)]
    pub command: Command,

    /// When to color the output.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    pub color: ColorMode,

    /// Log more detail to stderr (repeat for more). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one validator over an input and print its verdict and trace.
    Check {
        /// Which recognizer to run.
        #[arg(value_enum)]
        kind: ValidatorKind,
        /// The string to validate.
        #[arg(
            required_unless_present = "file",
            conflicts_with = "file",
            allow_hyphen_values = true
        )]
        input: Option<String>,
        /// Read the input from a file instead (one trailing newline is dropped).
        #[arg(long)]
        file: Option<PathBuf>,
        /// How to print the result.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Replay the built-in fixture table and report pass/fail.
    Test {
        /// Only replay fixtures for this validator.
        #[arg(long, value_enum)]
        kind: Option<ValidatorKind>,
        /// Hide passing fixtures from the listing.
        #[arg(long)]
        failures_only: bool,
    },
    /// List the available validators.
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

/// Output formats for `check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Verdict, trace listing, and a rejection diagnostic.
    Text,
    /// Verdict, trace, and rejection as one JSON document.
    Json,
    /// The trace as a Graphviz digraph, one node per step.
    Dot,
}
