//! The three stack-driven recognizers and the abstraction every front-end
//! uses to reach them.
//!
//! Each recognizer is a pure function from input to [`Outcome`]. The
//! validator structs wrap that function and keep the outcome of the most
//! recent run so callers can inspect the trace afterwards.

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;
use tracing::debug;

use crate::trace::{StepInput, Trace};

pub mod arithmetic;
pub mod bracket;
pub mod palindrome;

pub use arithmetic::ArithmeticValidator;
pub use bracket::BracketValidator;
pub use palindrome::PalindromeValidator;

// ============================================================================
// VALIDATOR KINDS - Selecting a recognizer
// ============================================================================

/// Identifies one of the available recognizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidatorKind {
    /// Balanced `()`, `[]` and `{}` sequences.
    Bracket,
    /// Strings that read the same in both directions.
    Palindrome,
    /// Arithmetic-looking expressions with balanced brackets.
    Arithmetic,
}

impl ValidatorKind {
    pub const ALL: [ValidatorKind; 3] = [
        ValidatorKind::Bracket,
        ValidatorKind::Palindrome,
        ValidatorKind::Arithmetic,
    ];

    /// Human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            ValidatorKind::Bracket => "Bracket Validator",
            ValidatorKind::Palindrome => "Palindrome Checker",
            ValidatorKind::Arithmetic => "Arithmetic Validator",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ValidatorKind::Bracket => "balanced and correctly nested (), [] and {}",
            ValidatorKind::Palindrome => "strings equal to their own reverse",
            ValidatorKind::Arithmetic => {
                "expressions over letters, digits, spaces and + - * / % ^ with balanced brackets"
            }
        }
    }

    /// Builds a fresh validator of this kind.
    pub fn create(&self) -> Box<dyn Validator> {
        match self {
            ValidatorKind::Bracket => Box::new(BracketValidator::new()),
            ValidatorKind::Palindrome => Box::new(PalindromeValidator::new()),
            ValidatorKind::Arithmetic => Box::new(ArithmeticValidator::new()),
        }
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// OUTCOMES AND REJECTIONS
// ============================================================================

/// Byte range of a symbol within the validated input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn of_char(offset: usize, symbol: char) -> Self {
        Self {
            start: offset,
            end: offset + symbol.len_utf8(),
        }
    }
}

/// Why a run was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectionKind {
    /// A closing bracket with no opener, or the wrong one, on top of the stack.
    UnmatchedCloser { found: char, expected: Option<char> },
    /// A symbol outside the recognizer's alphabet.
    UnexpectedSymbol { found: char },
    /// Input ended with openers still on the stack.
    UnclosedOpeners { count: usize },
    /// Second half of a would-be palindrome disagreed with the first.
    Mismatch { expected: Option<char>, found: char },
    /// Expression starts or ends with a binary operator.
    OperatorPlacement,
    /// Two operators next to each other.
    AdjacentOperators { first: char, second: char },
}

impl RejectionKind {
    /// Stable, machine-friendly name of the rejection.
    pub fn code(&self) -> &'static str {
        match self {
            RejectionKind::UnmatchedCloser { .. } => "unmatched_closer",
            RejectionKind::UnexpectedSymbol { .. } => "unexpected_symbol",
            RejectionKind::UnclosedOpeners { .. } => "unclosed_openers",
            RejectionKind::Mismatch { .. } => "mismatch",
            RejectionKind::OperatorPlacement => "operator_placement",
            RejectionKind::AdjacentOperators { .. } => "adjacent_operators",
        }
    }
}

impl fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionKind::UnmatchedCloser {
                found,
                expected: Some(expected),
            } => write!(f, "'{found}' does not close '{expected}'"),
            RejectionKind::UnmatchedCloser {
                found,
                expected: None,
            } => write!(f, "'{found}' has no opening bracket"),
            RejectionKind::UnexpectedSymbol { found } => {
                write!(f, "unexpected symbol '{found}'")
            }
            RejectionKind::UnclosedOpeners { count: 1 } => f.write_str("1 bracket left unclosed"),
            RejectionKind::UnclosedOpeners { count } => {
                write!(f, "{count} brackets left unclosed")
            }
            RejectionKind::Mismatch {
                expected: Some(expected),
                found,
            } => write!(f, "expected '{expected}' to mirror the first half, found '{found}'"),
            RejectionKind::Mismatch {
                expected: None,
                found,
            } => write!(f, "nothing left to mirror '{found}'"),
            RejectionKind::OperatorPlacement => f.write_str("Invalid Operator Placement"),
            RejectionKind::AdjacentOperators { first, second } => {
                write!(f, "operator '{second}' directly follows '{first}'")
            }
        }
    }
}

/// A rejection reason plus the offending location, when there is one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    #[serde(flatten)]
    pub kind: RejectionKind,
    pub span: Option<Span>,
}

/// The complete result of one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub accepted: bool,
    pub trace: Trace,
    pub rejection: Option<Rejection>,
}

// ============================================================================
// VALIDATOR TRAIT
// ============================================================================

/// Common contract of every recognizer.
///
/// `validate` replaces whatever the previous run left behind, so running the
/// same input twice produces the same verdict and an identical trace.
pub trait Validator {
    fn kind(&self) -> ValidatorKind;

    /// Runs the recognizer over `input` and returns the verdict.
    fn validate(&mut self, input: &str) -> bool;

    /// Outcome of the most recent run (empty and rejected before any run).
    fn outcome(&self) -> &Outcome;

    fn trace(&self) -> &Trace {
        &self.outcome().trace
    }

    fn rejection(&self) -> Option<&Rejection> {
        self.outcome().rejection.as_ref()
    }
}

// ============================================================================
// RUN STATE - Private to a single validate call
// ============================================================================

/// Stack, trace, and opener positions for one run.
///
/// Built fresh by every recognizer call and consumed into an [`Outcome`].
#[derive(Debug, Default)]
pub(crate) struct Run {
    stack: Vec<char>,
    offsets: Vec<usize>,
    trace: Trace,
}

impl Run {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, symbol: char, offset: usize) {
        self.stack.push(symbol);
        self.offsets.push(offset);
    }

    pub(crate) fn pop(&mut self) -> Option<char> {
        self.offsets.pop();
        self.stack.pop()
    }

    pub(crate) fn top(&self) -> Option<char> {
        self.stack.last().copied()
    }

    pub(crate) fn record(&mut self, symbol: char) {
        self.trace.record_symbol(symbol, &self.stack);
    }

    pub(crate) fn annotate(&mut self, text: &'static str) {
        self.trace.record(StepInput::Annotation(text), &self.stack);
    }

    pub(crate) fn accept(self) -> Outcome {
        Outcome {
            accepted: true,
            trace: self.trace,
            rejection: None,
        }
    }

    pub(crate) fn reject(self, kind: RejectionKind, span: Option<Span>) -> Outcome {
        Outcome {
            accepted: false,
            trace: self.trace,
            rejection: Some(Rejection { kind, span }),
        }
    }

    /// Accepts when the stack drained, otherwise points at the innermost
    /// opener still waiting for its closer.
    pub(crate) fn finish(self) -> Outcome {
        match (self.stack.last().copied(), self.offsets.last().copied()) {
            (Some(opener), Some(offset)) => {
                let count = self.stack.len();
                self.reject(
                    RejectionKind::UnclosedOpeners { count },
                    Some(Span::of_char(offset, opener)),
                )
            }
            _ => self.accept(),
        }
    }
}

pub(crate) fn log_outcome(kind: ValidatorKind, input: &str, outcome: &Outcome) {
    debug!(
        validator = kind.label(),
        input_len = input.chars().count(),
        accepted = outcome.accepted,
        steps = outcome.trace.len(),
        "validation finished"
    );
    if let Some(rejection) = &outcome.rejection {
        tracing::trace!(
            reason = rejection.kind.code(),
            span = ?rejection.span,
            "{}",
            rejection.kind
        );
    }
}
