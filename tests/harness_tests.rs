//! Fixture harness tests: the built-in table must pass in full, and the
//! outcome tuples must keep the `(label, input, expected, actual)` shape.

use pda::harness::{
    report_results, run_fixture, run_fixtures, run_fixtures_for, summarize, Fixture, FIXTURES,
};
use pda::ValidatorKind;
use termcolor::Buffer;

#[cfg(test)]
mod table_tests {
    use super::*;

    #[test]
    fn test_every_fixture_passes() {
        let outcomes = run_fixtures();
        let failures: Vec<_> = outcomes.iter().filter(|o| !o.passed()).collect();
        assert!(failures.is_empty(), "failing fixtures: {failures:#?}");
        assert_eq!(outcomes.len(), FIXTURES.len());
    }

    #[test]
    fn test_outcomes_keep_table_order() {
        let outcomes = run_fixtures();
        for (fixture, outcome) in FIXTURES.iter().zip(&outcomes) {
            assert_eq!(fixture.kind, outcome.kind);
            assert_eq!(fixture.input, outcome.input);
            assert_eq!(fixture.expected, outcome.expected);
        }
    }

    #[test]
    fn test_filter_by_kind() {
        let outcomes = run_fixtures_for(Some(ValidatorKind::Palindrome));
        assert_eq!(outcomes.len(), 15);
        assert!(outcomes.iter().all(|o| o.kind == ValidatorKind::Palindrome));
        assert_eq!(run_fixtures_for(Some(ValidatorKind::Bracket)).len(), 16);
        assert_eq!(run_fixtures_for(Some(ValidatorKind::Arithmetic)).len(), 22);
    }

    #[test]
    fn test_tuple_shape() {
        let outcome = run_fixture(&Fixture {
            kind: ValidatorKind::Arithmetic,
            input: "3++2",
            expected: true,
        });
        assert_eq!(
            outcome.as_tuple(),
            ("Arithmetic Validator", "3++2", true, false)
        );
        assert!(!outcome.passed());
    }
}

#[cfg(test)]
mod report_tests {
    use super::*;

    #[test]
    fn test_full_report_counts_everything() {
        let outcomes = run_fixtures();
        let mut buffer = Buffer::no_color();
        let summary = report_results(&mut buffer, &outcomes, false).unwrap();
        let text = String::from_utf8(buffer.into_inner()).unwrap();

        assert_eq!(summary, summarize(&outcomes));
        assert_eq!(summary.total(), FIXTURES.len());
        assert_eq!(text.matches("PASS: ").count(), FIXTURES.len());
        assert!(text.contains("PASS: Bracket Validator - Input: `([]{})` (expected true, got true)"));
        assert!(!text.contains("Failed fixtures:"));
    }

    #[test]
    fn test_colored_report_emits_escapes() {
        let outcomes = run_fixtures_for(Some(ValidatorKind::Bracket));
        let mut buffer = Buffer::ansi();
        report_results(&mut buffer, &outcomes, false).unwrap();
        let text = String::from_utf8(buffer.into_inner()).unwrap();
        assert!(text.contains("\x1b["));
    }
}
