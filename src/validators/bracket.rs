//! Balanced bracket recognizer.

use super::{log_outcome, Outcome, RejectionKind, Run, Span, Validator, ValidatorKind};

/// Closing brackets and the opener each one requires.
pub const BRACKET_PAIRS: [(char, char); 3] = [(')', '('), (']', '['), ('}', '{')];

/// Returns the opener a closing bracket must match, or `None` for any other
/// symbol.
pub fn opener_for(closer: char) -> Option<char> {
    BRACKET_PAIRS
        .iter()
        .find(|(close, _)| *close == closer)
        .map(|(_, open)| *open)
}

pub fn is_opener(symbol: char) -> bool {
    matches!(symbol, '(' | '[' | '{')
}

pub fn is_closer(symbol: char) -> bool {
    opener_for(symbol).is_some()
}

/// Accepts sequences made only of `()[]{}` that nest correctly.
#[derive(Debug, Default)]
pub struct BracketValidator {
    last: Outcome,
}

impl BracketValidator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validator for BracketValidator {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Bracket
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

/// Runs the bracket automaton over `input`.
pub fn recognize(input: &str) -> Outcome {
    let mut run = Run::new();

    for (offset, symbol) in input.char_indices() {
        if is_opener(symbol) {
            run.push(symbol, offset);
            run.record(symbol);
            continue;
        }

        let Some(required) = opener_for(symbol) else {
            // Foreign symbols reject without leaving a step behind.
            return run.reject(
                RejectionKind::UnexpectedSymbol { found: symbol },
                Some(Span::of_char(offset, symbol)),
            );
        };

        let top = run.top();
        if top != Some(required) {
            run.record(symbol);
            return run.reject(
                RejectionKind::UnmatchedCloser {
                    found: symbol,
                    expected: top,
                },
                Some(Span::of_char(offset, symbol)),
            );
        }

        run.pop();
        run.record(symbol);
    }

    run.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairing_table_maps_each_closer() {
        assert_eq!(opener_for(')'), Some('('));
        assert_eq!(opener_for(']'), Some('['));
        assert_eq!(opener_for('}'), Some('{'));
        assert_eq!(opener_for('('), None);
        assert!(is_closer('}'));
        assert!(!is_closer('{'));
    }

    #[test]
    fn foreign_symbol_leaves_no_step() {
        let outcome = recognize("(a)");
        assert!(!outcome.accepted);
        assert_eq!(outcome.trace.len(), 1);
        assert_eq!(
            outcome.rejection.unwrap().kind,
            RejectionKind::UnexpectedSymbol { found: 'a' }
        );
    }

    #[test]
    fn mismatched_closer_keeps_stack_unchanged() {
        let outcome = recognize("(]");
        let last = outcome.trace.last().unwrap();
        assert_eq!(last.stack, vec!['(']);
        assert_eq!(outcome.trace.len(), 2);
    }
}
