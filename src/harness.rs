//! Fixture harness.
//!
//! Replays a hand-authored table of `(validator, input, expected verdict)`
//! entries against fresh validator instances and reports how each one
//! fared. Every fixture gets its own validator so no run can observe
//! another's state.
//!
//! # Example
//!
//! ```rust
//! use pda::harness::{run_fixtures, summarize};
//!
//! let outcomes = run_fixtures();
//! assert_eq!(summarize(&outcomes).failed, 0);
//! ```

use std::io;

use serde::Serialize;
use termcolor::{Color, ColorSpec, WriteColor};
use tracing::{debug, instrument};

use crate::validators::ValidatorKind;

// =============================================================================
// CORE TYPES
// =============================================================================

/// One entry of the fixture table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixture {
    pub kind: ValidatorKind,
    pub input: &'static str,
    pub expected: bool,
}

/// The result of replaying one fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureOutcome {
    pub kind: ValidatorKind,
    pub input: &'static str,
    pub expected: bool,
    pub actual: bool,
}

impl FixtureOutcome {
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }

    /// `(validator label, input, expected, actual)`.
    pub fn as_tuple(&self) -> (&'static str, &'static str, bool, bool) {
        (self.kind.label(), self.input, self.expected, self.actual)
    }
}

/// Pass/fail counts for a batch of outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HarnessSummary {
    pub passed: usize,
    pub failed: usize,
}

impl HarnessSummary {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}

// =============================================================================
// FIXTURE TABLE
// =============================================================================

const fn fixture(kind: ValidatorKind, input: &'static str, expected: bool) -> Fixture {
    Fixture {
        kind,
        input,
        expected,
    }
}

use ValidatorKind::{Arithmetic, Bracket, Palindrome};

pub static FIXTURES: &[Fixture] = &[
    // Brackets
    fixture(Bracket, "([]{})", true),
    fixture(Bracket, "([)]", false),
    fixture(Bracket, "{[(])}", false),
    fixture(Bracket, "", true),
    fixture(Bracket, "([{}]){}", true),
    fixture(Bracket, "((({{{[[[]]]}}})))", true),
    fixture(Bracket, "([{}])", true),
    fixture(Bracket, "]", false),
    fixture(Bracket, "[", false),
    fixture(Bracket, "}{", false),
    fixture(Bracket, "(()", false),
    fixture(Bracket, "))", false),
    fixture(Bracket, "([", false),
    fixture(Bracket, "(}", false),
    fixture(Bracket, "[)", false),
    fixture(Bracket, "{]", false),
    // Palindromes
    fixture(Palindrome, "racecar", true),
    fixture(Palindrome, "madam", true),
    fixture(Palindrome, "a", true),
    fixture(Palindrome, "", true),
    fixture(Palindrome, "hello", false),
    fixture(Palindrome, "racer", false),
    fixture(Palindrome, "aba", true),
    fixture(Palindrome, "abba", true),
    fixture(Palindrome, "abc", false),
    fixture(Palindrome, "abca", false),
    fixture(Palindrome, "level", true),
    fixture(Palindrome, "rotor", true),
    fixture(Palindrome, "stats", true),
    fixture(Palindrome, "deified", true),
    fixture(Palindrome, "reviver", true),
    // Arithmetic
    fixture(Arithmetic, "(3+2)*4", true),
    fixture(Arithmetic, "((1+2)*3)", true),
    fixture(Arithmetic, "a+b*(c-d)", true),
    fixture(Arithmetic, "((3+2]*4", false),
    fixture(Arithmetic, "3++2", false),
    fixture(Arithmetic, "a+@*b", false),
    fixture(Arithmetic, "3+4$", false),
    fixture(Arithmetic, ")3+2(", false),
    fixture(Arithmetic, "3+*", false),
    fixture(Arithmetic, "*3+2", false),
    fixture(Arithmetic, "3 + 2", true),
    fixture(Arithmetic, "( )", true),
    fixture(Arithmetic, "[ ]", true),
    fixture(Arithmetic, "{ }", true),
    fixture(Arithmetic, "a", true),
    fixture(Arithmetic, "123", true),
    fixture(Arithmetic, "3 % 2", true),
    fixture(Arithmetic, "2 ^ 3", true),
    fixture(Arithmetic, "++3", false),
    fixture(Arithmetic, "3--", false),
    fixture(Arithmetic, ")(", false),
    fixture(Arithmetic, "[(])", false),
];

// =============================================================================
// EXECUTION
// =============================================================================

/// Replays a single fixture against a fresh validator.
pub fn run_fixture(fixture: &Fixture) -> FixtureOutcome {
    let mut validator = fixture.kind.create();
    let actual = validator.validate(fixture.input);
    FixtureOutcome {
        kind: fixture.kind,
        input: fixture.input,
        expected: fixture.expected,
        actual,
    }
}

/// Replays the whole table in order.
pub fn run_fixtures() -> Vec<FixtureOutcome> {
    run_fixtures_for(None)
}

/// Replays the table, restricted to one validator kind when given.
#[instrument(level = "debug")]
pub fn run_fixtures_for(kind: Option<ValidatorKind>) -> Vec<FixtureOutcome> {
    let outcomes: Vec<FixtureOutcome> = FIXTURES
        .iter()
        .filter(|fixture| kind.map_or(true, |k| fixture.kind == k))
        .map(run_fixture)
        .collect();

    let summary = summarize(&outcomes);
    debug!(
        passed = summary.passed,
        failed = summary.failed,
        "fixtures replayed"
    );
    outcomes
}

pub fn summarize(outcomes: &[FixtureOutcome]) -> HarnessSummary {
    let passed = outcomes.iter().filter(|o| o.passed()).count();
    HarnessSummary {
        passed,
        failed: outcomes.len() - passed,
    }
}

// =============================================================================
// REPORTING
// =============================================================================

fn write_status<W: WriteColor>(out: &mut W, text: &str, color: Color) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{text}")?;
    out.reset()
}

/// Writes one line per outcome plus a summary, and returns the counts.
///
/// With `failures_only`, passing fixtures are left out of the listing but
/// still counted.
pub fn report_results<W: WriteColor>(
    out: &mut W,
    outcomes: &[FixtureOutcome],
    failures_only: bool,
) -> io::Result<HarnessSummary> {
    let summary = summarize(outcomes);

    for outcome in outcomes {
        if outcome.passed() && failures_only {
            continue;
        }
        let (status, color) = if outcome.passed() {
            ("PASS", Color::Green)
        } else {
            ("FAIL", Color::Red)
        };
        write_status(out, status, color)?;
        writeln!(
            out,
            ": {} - Input: `{}` (expected {}, got {})",
            outcome.kind.label(),
            outcome.input,
            outcome.expected,
            outcome.actual
        )?;
    }

    write!(out, "\nTest summary: total {}, ", summary.total())?;
    write_status(out, "passed", Color::Green)?;
    write!(out, " {}, ", summary.passed)?;
    write_status(out, "failed", Color::Red)?;
    writeln!(out, " {}", summary.failed)?;

    if summary.failed > 0 {
        writeln!(out, "\nFailed fixtures:")?;
        for outcome in outcomes.iter().filter(|o| !o.passed()) {
            writeln!(out, "  - {} `{}`", outcome.kind.label(), outcome.input)?;
        }
    }

    Ok(summary)
}
