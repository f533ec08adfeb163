//! Errors raised at the edges of the crate.
//!
//! Validators themselves never fail; every input yields a verdict. The only
//! fallible work is reading input files, writing output, and serializing
//! reports, and all of it funnels into [`PdaError`].

use std::path::PathBuf;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode};
use thiserror::Error;

use crate::validators::{Rejection, RejectionKind, Span, ValidatorKind};

#[derive(Error, Diagnostic, Debug)]
pub enum PdaError {
    #[error("could not read input file '{}'", path.display())]
    #[diagnostic(
        code(pda::io),
        help("pass the input inline instead, or check that the file exists and is readable")
    )]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write output")]
    #[diagnostic(code(pda::output))]
    Output(#[from] std::io::Error),

    #[error("could not serialize report as JSON")]
    #[diagnostic(code(pda::json))]
    Json(#[from] serde_json::Error),

    #[error("no input given")]
    #[diagnostic(code(pda::usage), help("provide INPUT or --file <PATH>"))]
    MissingInput,
}

pub type Result<T> = std::result::Result<T, PdaError>;

// ============================================================================
// REJECTION DIAGNOSTICS - Presenting a rejected input
// ============================================================================

/// A rejected input rendered as a diagnostic that points at the offending
/// symbol. This is presentation only; a rejection is not an error.
#[derive(Error, Debug)]
#[error("{label} rejected the input: {reason}")]
pub struct RejectionDiagnostic {
    label: &'static str,
    reason: RejectionKind,
    code: String,
    src: NamedSource<String>,
    span: Option<Span>,
}

impl RejectionDiagnostic {
    pub fn new(kind: ValidatorKind, input: &str, rejection: &Rejection) -> Self {
        Self {
            label: kind.label(),
            reason: rejection.kind.clone(),
            code: format!("pda::rejected::{}", rejection.kind.code()),
            src: NamedSource::new("input", input.to_string()),
            span: rejection.span,
        }
    }
}

impl Diagnostic for RejectionDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(&self.code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let help = match self.reason {
            RejectionKind::UnmatchedCloser { .. } => {
                "every closer must match the most recent open bracket"
            }
            RejectionKind::UnclosedOpeners { .. } => "close every bracket before the input ends",
            RejectionKind::OperatorPlacement => {
                "only '-' may start an expression; none of + * / % ^ may end one"
            }
            RejectionKind::AdjacentOperators { .. } => "put an operand between the two operators",
            RejectionKind::UnexpectedSymbol { .. } | RejectionKind::Mismatch { .. } => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.src)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span?;
        let len = if span.end > span.start {
            span.end - span.start
        } else {
            1
        };
        let label = LabeledSpan::new(Some(self.reason.to_string()), span.start, len);
        Some(Box::new(std::iter::once(label)))
    }
}
