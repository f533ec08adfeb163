// CLI regression tests: verdict exit codes, output formats, and miette
// diagnostics for rejections and I/O errors.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use std::fs;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

fn pda() -> Command {
    let mut cmd = Command::cargo_bin("pda").unwrap();
    cmd.env_remove("RUST_LOG").arg("--color").arg("never");
    cmd
}

#[test]
fn check_accepts_with_trace_listing() {
    pda()
        .args(["check", "bracket", "([]{})"])
        .assert()
        .success()
        .stdout(contains("Bracket Validator: input accepted"))
        .stdout(contains("Input: ( → Stack: ("))
        .stdout(contains("Input: ) → Stack: Empty"));
}

#[test]
fn check_rejection_exits_one_with_diagnostic() {
    pda()
        .args(["check", "arithmetic", "3++2"])
        .assert()
        .code(1)
        .stdout(contains("Arithmetic Validator: input rejected"))
        .stderr(contains("pda::rejected::adjacent_operators").and(contains("directly follows")));
}

#[test]
fn check_accepts_leading_minus_as_input() {
    pda()
        .args(["check", "arithmetic", "-3+2"])
        .assert()
        .success();
}

#[test]
fn check_json_reports_trace_and_rejection() {
    let output = pda()
        .args(["check", "palindrome", "abca", "--format", "json"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();
    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(report["validator"], "palindrome");
    assert_eq!(report["accepted"], false);
    assert_eq!(report["trace"][0]["input"], "a");
    assert_eq!(report["trace"][0]["stack"][0], "a");
    assert_eq!(report["rejection"]["kind"], "mismatch");
}

#[test]
fn check_dot_renders_linear_chain() {
    pda()
        .args(["check", "bracket", "()", "--format", "dot"])
        .assert()
        .success()
        .stdout(contains("digraph {"))
        .stdout(contains("0 -> 1"));
}

#[test]
fn check_reads_input_file() {
    let path = std::env::temp_dir().join("pda_cli_regression_input.txt");
    fs::write(&path, "racecar\n").unwrap();

    pda()
        .args(["check", "palindrome", "--file"])
        .arg(&path)
        .assert()
        .success();

    let _ = fs::remove_file(&path);
}

#[test]
fn missing_input_file_is_a_diagnostic() {
    pda()
        .args(["check", "bracket", "--file", "does/not/exist.txt"])
        .assert()
        .code(2)
        .stderr(contains("pda::io").or(contains("could not read input file")));
}

#[test]
fn test_subcommand_passes_all_fixtures() {
    pda()
        .arg("test")
        .assert()
        .success()
        .stdout(contains("Test summary: total 53, passed 53, failed 0"));
}

#[test]
fn test_subcommand_filters_and_hides_passes() {
    pda()
        .args(["test", "--kind", "bracket", "--failures-only"])
        .assert()
        .success()
        .stdout(contains("PASS").not())
        .stdout(contains("total 16"));
}

#[test]
fn list_names_every_validator() {
    pda()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("bracket").and(contains("palindrome")).and(contains("arithmetic")));
}
