//! Palindrome recognizer.
//!
//! The first half of the input is pushed, then the second half is read
//! forwards while popping, so the stack's LIFO order does the reversal.

use super::{log_outcome, Outcome, RejectionKind, Run, Span, Validator, ValidatorKind};

#[derive(Debug, Default)]
pub struct PalindromeValidator {
    last: Outcome,
}

impl PalindromeValidator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validator for PalindromeValidator {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Palindrome
    }

    fn validate(&mut self, input: &str) -> bool {
        self.last = recognize(input);
        log_outcome(self.kind(), input, &self.last);
        self.last.accepted
    }

    fn outcome(&self) -> &Outcome {
        &self.last
    }
}

/// Runs the palindrome automaton over `input`.
pub fn recognize(input: &str) -> Outcome {
    let symbols: Vec<(usize, char)> = input.char_indices().collect();
    let n = symbols.len();
    let mut run = Run::new();

    for &(offset, symbol) in &symbols[..n / 2] {
        run.push(symbol, offset);
        run.record(symbol);
    }

    // Odd lengths skip the middle symbol.
    for &(offset, symbol) in &symbols[(n + 1) / 2..] {
        let popped = run.pop();
        run.record(symbol);
        if popped != Some(symbol) {
            return run.reject(
                RejectionKind::Mismatch {
                    expected: popped,
                    found: symbol,
                },
                Some(Span::of_char(offset, symbol)),
            );
        }
    }

    run.finish()
}
