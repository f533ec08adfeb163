//! Stack-driven recognizers for three small languages: balanced brackets,
//! palindromes, and arithmetic-looking expressions. Every run yields a
//! verdict plus a step-by-step trace of the symbol consumed and the stack
//! left behind.

pub use crate::error::{PdaError, RejectionDiagnostic};
pub use crate::trace::{StepInput, Trace, TraceStep};
pub use crate::validators::{
    ArithmeticValidator, BracketValidator, Outcome, PalindromeValidator, Rejection,
    RejectionKind, Span, Validator, ValidatorKind,
};

pub mod cli;
pub mod error;
pub mod harness;
pub mod trace;
pub mod validators;
