//! Integration tests for the `basic` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> String {
    format!("{}/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn basic() -> Command {
    Command::cargo_bin("basic").unwrap()
}

// ============================================================================
// Expression and file mode
// ============================================================================

#[test]
fn eval_expression() {
    basic()
        .arg("-e")
        .arg("3 + 4 * 2")
        .assert()
        .success()
        .stdout("[INT:3, PLUS, INT:4, MUL, INT:2]\n");
}

#[test]
fn eval_float_and_groups() {
    basic()
        .arg("-e")
        .arg("(12.5)^2")
        .assert()
        .success()
        .stdout("[LPAREN, FLOAT:12.5, RPAREN, POWER, INT:2]\n");
}

#[test]
fn eval_zero_and_wide_integers() {
    basic()
        .arg("-e")
        .arg("0 * 123456789012345678901234567890")
        .assert()
        .success()
        .stdout("[INT:0, MUL, INT:123456789012345678901234567890]\n");
}

#[test]
fn eval_illegal_character() {
    basic()
        .arg("-e")
        .arg("5 & 2")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr("Illegal characters: '&'File<expr>, line1\n");
}

#[test]
fn eval_two_decimal_points() {
    basic()
        .arg("-e")
        .arg("1.2.3")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Illegal characters: '.'"));
}

#[test]
fn scan_file() {
    basic()
        .arg(fixture("expression.bas"))
        .assert()
        .success()
        .stdout("[INT:3, PLUS, INT:4, MUL, INT:2]\n");
}

#[test]
fn scan_file_reports_path() {
    basic()
        .arg(fixture("illegal.bas"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Illegal characters: '&'File"))
        .stderr(predicate::str::contains("illegal.bas, line1"));
}

#[test]
fn missing_file() {
    basic()
        .arg(fixture("does-not-exist.bas"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read"));
}

// ============================================================================
// Output options
// ============================================================================

#[test]
fn context_flag_shows_source_line() {
    basic()
        .args(["--context", "-e", "5 & 2"])
        .assert()
        .failure()
        .stderr("Illegal characters: '&'File<expr>, line1\n1 | 5 & 2\n  |   ^\n");
}

#[test]
fn json_tokens() {
    basic()
        .args(["--format", "json", "-e", "1 + 2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r#"{"tokens":[{"kind":"INT","value":1"#));
}

#[test]
fn json_error() {
    basic()
        .args(["--format", "json", "-e", "1 ~ 2"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(r#""kind":"IllegalCharacter""#))
        .stdout(predicate::str::contains(r#""message":"'~'""#));
}

#[test]
fn config_file_enables_context() {
    basic()
        .args(["--config", &fixture("context.json"), "-e", "2 # 3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("  |   ^"));
}

#[test]
fn broken_config_file() {
    basic()
        .args(["--config", &fixture("broken.json"), "-e", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn unknown_format_is_rejected() {
    basic()
        .args(["--format", "xml", "-e", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format"));
}

// ============================================================================
// REPL
// ============================================================================

#[test]
fn repl_session() {
    basic()
        .write_stdin("1 + 2\n5 & 2\n(3)\n")
        .assert()
        .success()
        .stdout("basic > [INT:1, PLUS, INT:2]\nbasic > basic > [LPAREN, INT:3, RPAREN]\nbasic > \n")
        .stderr(predicate::str::contains("Illegal characters: '&'File<stdin>, line1"));
}
