//! Property-based tests for the recognizers
//!
//! These check the language laws each recognizer should obey over
//! generated inputs, rather than hand-picked examples.

use proptest::prelude::*;
use pda::{ArithmeticValidator, BracketValidator, PalindromeValidator, Validator, ValidatorKind};

/// Generate well-nested bracket strings
fn balanced_strategy() -> impl Strategy<Value = String> {
    let leaf = Just(String::new());
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(|s| format!("({s})")),
            inner.clone().prop_map(|s| format!("[{s}]")),
            inner.clone().prop_map(|s| format!("{{{s}}}")),
            (inner.clone(), inner).prop_map(|(a, b)| format!("{a}{b}")),
        ]
    })
}

/// Generate operands made of letters and digits
fn operand_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,3}"
}

/// Generate expressions that alternate operands and operators
fn expression_strategy() -> impl Strategy<Value = String> {
    let operator = prop::sample::select(vec!["+", "-", "*", "/", "%", "^"]);
    (
        operand_strategy(),
        prop::collection::vec((operator, operand_strategy(), any::<bool>()), 0..5),
    )
        .prop_map(|(first, rest)| {
            let mut expr = first;
            for (op, operand, wrap) in rest {
                if wrap {
                    expr = format!("({expr}){op}{operand}");
                } else {
                    expr = format!("{expr} {op} {operand}");
                }
            }
            expr
        })
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_palindrome_matches_reversal(input in "\\PC{0,12}") {
            let reversed: String = input.chars().rev().collect();
            let mut v = PalindromeValidator::new();
            prop_assert_eq!(v.validate(&input), reversed == input);
        }

        #[test]
        fn test_palindrome_small_alphabet(input in "[ab]{0,9}") {
            let reversed: String = input.chars().rev().collect();
            let mut v = PalindromeValidator::new();
            prop_assert_eq!(v.validate(&input), reversed == input);
        }

        #[test]
        fn test_mirrored_strings_are_palindromes(half in "[a-z]{0,6}", middle in "[a-z]?") {
            let mirrored: String = half.chars().rev().collect();
            let input = format!("{half}{middle}{mirrored}");
            let mut v = PalindromeValidator::new();
            prop_assert!(v.validate(&input), "{} should be a palindrome", input);
        }

        #[test]
        fn test_balanced_brackets_accept(input in balanced_strategy()) {
            let mut v = BracketValidator::new();
            prop_assert!(v.validate(&input), "{} should be balanced", input);
            prop_assert_eq!(v.trace().len(), input.chars().count());
        }

        #[test]
        fn test_extra_closer_rejects(input in balanced_strategy(), closer in "[)\\]}]") {
            let mut v = BracketValidator::new();
            let broken = format!("{input}{closer}");
            prop_assert!(!v.validate(&broken));
            prop_assert_eq!(v.trace().len(), broken.chars().count());
        }

        #[test]
        fn test_extra_opener_rejects(input in balanced_strategy(), opener in "[(\\[{]") {
            let mut v = BracketValidator::new();
            let broken = format!("{opener}{input}");
            prop_assert!(!v.validate(&broken), "{} should be unbalanced", broken);
        }

        #[test]
        fn test_well_formed_expressions_accept(input in expression_strategy()) {
            let mut v = ArithmeticValidator::new();
            prop_assert!(v.validate(&input), "{} should be accepted", input);
            prop_assert_eq!(v.trace().len(), input.chars().count());
        }

        #[test]
        fn test_doubled_operator_rejects(left in operand_strategy(), right in operand_strategy()) {
            let mut v = ArithmeticValidator::new();
            let doubled = format!("{left}+*{right}");
            prop_assert!(!v.validate(&doubled), "{} should be rejected", doubled);
        }

        #[test]
        fn test_any_input_is_decided_and_repeatable(input in "\\PC{0,16}") {
            for kind in ValidatorKind::ALL {
                let mut v = kind.create();
                let first = v.validate(&input);
                let trace = v.trace().clone();
                prop_assert_eq!(first, v.validate(&input));
                prop_assert_eq!(&trace, v.trace());
                prop_assert!(trace.len() <= input.chars().count().max(1));
            }
        }
    }
}
