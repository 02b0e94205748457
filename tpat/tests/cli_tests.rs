//! CLI Interface Tests
//!
//! These tests run the `tpa` binary end to end: token reports, exit
//! statuses, rendered diagnostics, line mode, configuration files, the
//! interactive scanner and the symbol listing.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// A `tpa` command isolated from any configuration in the environment.
fn tpa(work_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tpa").expect("tpa binary should be built");
    cmd.current_dir(work_dir)
        .env_remove("TPA_CONFIG")
        .env_remove("TPA_VERBOSE")
        .env("TPA_NO_COLOR", "true");
    cmd
}

fn read_report(path: &Path) -> Vec<Value> {
    let text = fs::read_to_string(path).expect("report should exist");
    let value: Value = serde_json::from_str(&text).expect("report should be JSON");
    value.as_array().expect("report should be an array").clone()
}

#[test]
fn test_cli_help() {
    let temp_dir = TempDir::new().unwrap();
    tpa(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("lex"))
        .stdout(predicate::str::contains("repl"))
        .stdout(predicate::str::contains("symbols"));
}

#[test]
fn test_cli_version() {
    let temp_dir = TempDir::new().unwrap();
    tpa(temp_dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tpa"));
}

#[test]
fn test_lex_writes_report() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("reports");

    tpa(temp_dir.path())
        .arg("lex")
        .arg(fixtures_dir().join("hello.tp"))
        .arg("-o")
        .arg(&out_dir)
        .assert()
        .success();

    let records = read_report(&out_dir.join("hello.tpa"));
    assert_eq!(records.first().unwrap()["type"], "PROGRAM_START");
    assert_eq!(records.last().unwrap()["type"], "PROGRAM_END");
    assert!(records
        .iter()
        .any(|r| r["type"] == "LITERAL_STRING" && r["value"] == "Tupã"));
    assert!(records.iter().any(|r| r["type"] == "WHILE_LOOP"));
    assert!(records.iter().all(|r| r["type"] != "ERROR"));
    assert!(records.iter().all(|r| r["value"] != "// fim"));
}

#[test]
fn test_lex_errors_exit_with_one() {
    let temp_dir = TempDir::new().unwrap();

    tpa(temp_dir.path())
        .arg("lex")
        .arg(fixtures_dir().join("errors.tp"))
        .arg("--output")
        .arg(temp_dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error[E1003]: malformed number literal `1.2.3`"))
        .stderr(predicate::str::contains("error[E1004]: unknown token `@`"))
        .stderr(predicate::str::contains("errors.tp:3:8"))
        .stderr(predicate::str::contains("aborting due to 2 lexical error(s)"));

    let records = read_report(&temp_dir.path().join("errors.tpa"));
    let errors: Vec<_> = records.iter().filter(|r| r["type"] == "ERROR").collect();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["value"], "1.2.3");
}

#[test]
fn test_lex_to_stdout() {
    let temp_dir = TempDir::new().unwrap();

    let output = tpa(temp_dir.path())
        .arg("lex")
        .arg(fixtures_dir().join("hello.tp"))
        .arg("--stdout")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value[0]["type"], "PROGRAM_START");
    assert!(!fixtures_dir().join("hello.tpa").exists());
}

#[test]
fn test_line_mode_breaks_multiline_strings() {
    let temp_dir = TempDir::new().unwrap();
    let input = fixtures_dir().join("multiline.tp");

    tpa(temp_dir.path())
        .arg("lex")
        .arg(&input)
        .arg("--stdout")
        .assert()
        .success();

    tpa(temp_dir.path())
        .arg("lex")
        .arg(&input)
        .arg("--stdout")
        .arg("--mode")
        .arg("line")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error[E1002]: unterminated string literal"))
        .stderr(predicate::str::contains("multiline.tp:1:9"));
}

#[test]
fn test_deprecated_loop_spelling_warns() {
    let temp_dir = TempDir::new().unwrap();

    tpa(temp_dir.path())
        .arg("lex")
        .arg(fixtures_dir().join("legacy_loop.tp"))
        .arg("--stdout")
        .assert()
        .success()
        .stdout(predicate::str::contains("WHILE_LOOP"))
        .stderr(predicate::str::contains("warning[W1001]"))
        .stderr(predicate::str::contains("write `upe_aja` instead"));
}

#[test]
fn test_config_file_sets_report_options() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.toml");
    fs::write(
        &config_path,
        "[report]\noutput_dir = \"json-out\"\nextension = \"json\"\npretty = false\n",
    )
    .unwrap();

    tpa(temp_dir.path())
        .arg("--config")
        .arg(&config_path)
        .arg("lex")
        .arg(fixtures_dir().join("hello.tp"))
        .assert()
        .success();

    let report = temp_dir.path().join("json-out").join("hello.json");
    let text = fs::read_to_string(&report).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("[{\"type\":\"PROGRAM_START\""));
}

#[test]
fn test_config_in_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("tpa.toml"),
        "[report]\ninclude_errors = false\n",
    )
    .unwrap();

    tpa(temp_dir.path())
        .arg("lex")
        .arg(fixtures_dir().join("errors.tp"))
        .arg("--stdout")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ERROR").not());
}

#[test]
fn test_invalid_config_exits_with_two() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad.toml");
    fs::write(&config_path, "[scan]\nmode = \"word\"\n").unwrap();

    tpa(temp_dir.path())
        .arg("--config")
        .arg(&config_path)
        .arg("symbols")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse configuration"));
}

#[test]
fn test_missing_input_exits_with_two() {
    let temp_dir = TempDir::new().unwrap();

    tpa(temp_dir.path())
        .arg("lex")
        .arg("does-not-exist.tp")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read"))
        .stderr(predicate::str::contains("1 file(s) failed to process"));
}

#[test]
fn test_inputs_sharing_a_report_exit_with_two() {
    let temp_dir = TempDir::new().unwrap();
    for dir in ["a", "b"] {
        fs::create_dir_all(temp_dir.path().join(dir)).unwrap();
        fs::write(temp_dir.path().join(dir).join("main.tp"), "paite x -> 1;").unwrap();
    }

    tpa(temp_dir.path())
        .arg("lex")
        .arg("a/main.tp")
        .arg("b/main.tp")
        .arg("-o")
        .arg("out")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("would both write the report"));

    assert!(!temp_dir.path().join("out").join("main.tpa").exists());
}

#[test]
fn test_lex_without_files_is_usage_error() {
    let temp_dir = TempDir::new().unwrap();
    tpa(temp_dir.path()).arg("lex").assert().failure();
}

#[test]
fn test_repl_session() {
    let temp_dir = TempDir::new().unwrap();

    tpa(temp_dir.path())
        .arg("repl")
        .write_stdin("paite x -> 42;\nx # y\nexit\nkoseva\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("enter a line (or 'exit' to quit): "))
        .stdout(predicate::str::contains("> found type keyword: paite"))
        .stdout(predicate::str::contains("> found integer: 42"))
        .stdout(predicate::str::contains("> invalid token: #"))
        .stdout(predicate::str::contains("koseva").not())
        .stderr(predicate::str::contains("error[E1004]"));
}

#[test]
fn test_repl_ends_at_end_of_input() {
    let temp_dir = TempDir::new().unwrap();

    tpa(temp_dir.path())
        .arg("repl")
        .write_stdin("true")
        .assert()
        .success()
        .stdout(predicate::str::contains("> found boolean: true"));
}

#[test]
fn test_symbols_listing() {
    let temp_dir = TempDir::new().unwrap();

    tpa(temp_dir.path())
        .arg("symbols")
        .assert()
        .success()
        .stdout(predicate::str::contains("ramoramo"))
        .stdout(predicate::str::contains("IF_CONDITIONAL"))
        .stdout(predicate::str::contains("=!="))
        .stdout(predicate::str::contains("(deprecated)"));
}
