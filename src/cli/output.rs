//! Handles all user-facing output for the CLI.
//!
//! This module is responsible for colorizing the verdict, listing traces,
//! emitting Graphviz and JSON, and printing diagnostics. By centralizing
//! output logic here, every subcommand presents results the same way.

use std::fmt::Write as _;
use std::io::{self, Write};

use clap::ValueEnum;
use miette::{Diagnostic, Report};
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, WriteColor};

use crate::cli::args::ColorMode;
use crate::trace::{Trace, TraceStep};
use crate::validators::{Outcome, ValidatorKind};

/// Placeholder shown for a step whose stack is empty.
pub const EMPTY_STACK: &str = "Empty";

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Resolves `--color` against the terminal, the way the fixture runner
/// always has: only color when stdout is a tty.
pub fn color_choice(mode: ColorMode) -> ColorChoice {
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto if atty::is(atty::Stream::Stdout) => ColorChoice::Auto,
        ColorMode::Auto => ColorChoice::Never,
    }
}

// ============================================================================
// TRACE RENDERERS
// ============================================================================

fn stack_label(step: &TraceStep) -> String {
    if step.stack.is_empty() {
        EMPTY_STACK.to_string()
    } else {
        step.joined_stack()
    }
}

/// Writes `Input: <symbol> → Stack: <contents>` for every step.
pub fn write_listing<W: Write>(out: &mut W, trace: &Trace) -> io::Result<()> {
    for step in trace {
        writeln!(out, "Input: {} → Stack: {}", step.input, stack_label(step))?;
    }
    Ok(())
}

fn escape_dot(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Renders the trace as a linear Graphviz chain.
pub fn to_dot(trace: &Trace) -> String {
    let mut dot = String::from("digraph {\n");
    for (i, step) in trace.iter().enumerate() {
        let _ = writeln!(
            dot,
            "    {i} [label=\"{}\\nStack: {}\"]",
            escape_dot(&step.input.to_string()),
            escape_dot(&stack_label(step))
        );
        if i > 0 {
            let _ = writeln!(dot, "    {} -> {i}", i - 1);
        }
    }
    dot.push_str("}\n");
    dot
}

/// The JSON document printed by `check --format json`.
#[derive(Debug, Serialize)]
pub struct CheckReport<'a> {
    pub validator: ValidatorKind,
    pub input: &'a str,
    #[serde(flatten)]
    pub outcome: &'a Outcome,
}

impl<'a> CheckReport<'a> {
    pub fn new(validator: ValidatorKind, input: &'a str, outcome: &'a Outcome) -> Self {
        Self {
            validator,
            input,
            outcome,
        }
    }
}

// ============================================================================
// CORE OUTPUT FUNCTIONS
// ============================================================================

/// Prints the colored verdict line.
pub fn write_verdict<W: WriteColor>(
    out: &mut W,
    kind: ValidatorKind,
    accepted: bool,
) -> io::Result<()> {
    let (word, color) = if accepted {
        ("accepted", Color::Green)
    } else {
        ("rejected", Color::Red)
    };
    write!(out, "{}: input ", kind.label())?;
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{word}")?;
    out.reset()?;
    writeln!(out)
}

/// Lists every validator kind with its CLI name and description.
pub fn write_kinds<W: Write>(out: &mut W) -> io::Result<()> {
    for kind in ValidatorKind::ALL {
        let name = kind
            .to_possible_value()
            .map(|value| value.get_name().to_owned())
            .unwrap_or_default();
        writeln!(out, "{name:<12}{:<22}{}", kind.label(), kind.description())?;
    }
    Ok(())
}

/// Prints any diagnostic with full miette rendering.
pub fn print_diagnostic<D: Diagnostic + Send + Sync + 'static>(diagnostic: D) {
    let report = Report::new(diagnostic);
    eprintln!("{report:?}");
}
