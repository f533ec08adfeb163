//! Arithmetic expression recognizer.
//!
//! This is a lexical well-formedness check, not a grammar: it looks at the
//! expression boundaries once, then scans every symbol with a bracket
//! stack. Operand/operator alternation is only enforced as far as rejecting
//! two operators in a row, so `3 + 2`, `abc` and `( )` are all accepted.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_general_category::{get_general_category, GeneralCategory};

use super::bracket::{is_opener, opener_for};
use super::{log_outcome, Outcome, RejectionKind, Run, Span, Validator, ValidatorKind};

/// Operators recognized inside an expression.
pub const OPERATORS: [char; 6] = ['+', '-', '*', '/', '%', '^'];

/// Label of the synthetic step recorded when the boundary check fails.
pub const OPERATOR_PLACEMENT: &str = "Invalid Operator Placement";

/// An operator at either end of the trimmed expression. `-` may lead (unary
/// minus) and is not checked at the end either.
static BOUNDARY_OPERATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+*/%^]|[+*/%^]$").unwrap());

pub fn is_operator(symbol: char) -> bool {
    OPERATORS.contains(&symbol)
}

/// Letters (`L*`) and numbers (`N*`) by general category. Combining marks
/// and symbols such as `Ⓐ` carry the Alphabetic property but are not
/// operands, so `char::is_alphanumeric` is too wide here.
pub fn is_operand_symbol(symbol: char) -> bool {
    use GeneralCategory::*;
    matches!(
        get_general_category(symbol),
        UppercaseLetter
            | LowercaseLetter
            | TitlecaseLetter
            | ModifierLetter
            | OtherLetter
            | DecimalNumber
            | LetterNumber
            | OtherNumber
    )
}

/// Whitespace stripped from the expression edges: Unicode `White_Space`
/// plus the information separators U+001C..=U+001F.
pub fn is_edge_whitespace(symbol: char) -> bool {
    symbol.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&symbol)
}

fn trim_edges(input: &str) -> &str {
    input.trim_matches(is_edge_whitespace)
}

fn is_expression_symbol(symbol: char) -> bool {
    is_operand_symbol(symbol) || is_operator(symbol) || symbol == ' '
}

#[derive(Debug, Default)]
pub struct ArithmeticValidator {
    last: Outcome,
}

impl ArithmeticValidator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validator for ArithmeticValidator {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Arithmetic
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

/// Runs the boundary pass, then the symbol scan.
pub fn recognize(input: &str) -> Outcome {
    if trim_edges(input).is_empty() {
        return Run::new().accept();
    }

    if let Some(span) = misplaced_operator(input) {
        let mut run = Run::new();
        run.annotate(OPERATOR_PLACEMENT);
        return run.reject(RejectionKind::OperatorPlacement, Some(span));
    }

    scan(input)
}

/// Finds an operator at the start or end of the trimmed expression and
/// returns its position in the untrimmed input.
pub fn misplaced_operator(input: &str) -> Option<Span> {
    let leading = input.len() - input.trim_start_matches(is_edge_whitespace).len();
    let found = BOUNDARY_OPERATOR.find(trim_edges(input))?;
    Some(Span {
        start: leading + found.start(),
        end: leading + found.end(),
    })
}

fn scan(input: &str) -> Outcome {
    let mut run = Run::new();
    let mut previous: Option<char> = None;

    for (offset, symbol) in input.char_indices() {
        let span = Some(Span::of_char(offset, symbol));

        if is_opener(symbol) {
            run.push(symbol, offset);
        } else if let Some(required) = opener_for(symbol) {
            let top = run.top();
            if top != Some(required) {
                run.record(symbol);
                return run.reject(
                    RejectionKind::UnmatchedCloser {
                        found: symbol,
                        expected: top,
                    },
                    span,
                );
            }
            run.pop();
        } else if !is_expression_symbol(symbol) {
            run.record(symbol);
            return run.reject(RejectionKind::UnexpectedSymbol { found: symbol }, span);
        }

        run.record(symbol);

        if let Some(first) = previous {
            if is_operator(first) && is_operator(symbol) {
                return run.reject(
                    RejectionKind::AdjacentOperators {
                        first,
                        second: symbol,
                    },
                    span,
                );
            }
        }
        previous = Some(symbol);
    }

    run.finish()
}
