//! Tests for the `scanner` binary.
//!
//! These run the built executable to check input selection, token output,
//! `--quiet` and the exit status on lexical errors.

use assert_cmd::Command;
use predicates::prelude::*;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

fn scanner_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_scanner"))
}

#[test]
fn test_reads_stdin_without_file() {
    let mut cmd = Command::new(scanner_bin());
    cmd.write_stdin("var x = 1;");

    cmd.assert()
        .success()
        .stdout("Var ()\nIdentifier (x)\nEq ()\nNumber (1)\nSemicolon ()\nEof ()\n");
}

#[test]
fn test_reads_stdin_with_dash() {
    let mut cmd = Command::new(scanner_bin());
    cmd.arg("-").write_stdin("+");

    cmd.assert().success().stdout("Plus ()\nEof ()\n");
}

#[test]
fn test_reads_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("main.lang");
    fs::write(&path, "print \"hi\";\n").unwrap();

    let mut cmd = Command::new(scanner_bin());
    cmd.arg(&path);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Print ()\nString (\"hi\")\n"));
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    let mut cmd = Command::new(scanner_bin());
    cmd.arg(dir.path().join("absent.lang"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_lexical_error_exit_status() {
    let mut cmd = Command::new(scanner_bin());
    cmd.write_stdin("@");

    cmd.assert()
        .code(65)
        .stdout("Eof ()\n")
        .stderr(predicate::str::contains("Error: UnexpectedCharacter"))
        .stderr(predicate::str::contains("-> <stdin>:1"));
}

#[test]
fn test_unterminated_string_exit_status() {
    let mut cmd = Command::new(scanner_bin());
    cmd.args(["-q", "-"]).write_stdin("\"open");

    cmd.assert()
        .code(65)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: UnterminatedString"));
}

#[test]
fn test_quiet_suppresses_tokens() {
    let mut cmd = Command::new(scanner_bin());
    cmd.arg("-q").write_stdin("+");

    cmd.assert().success().stdout(predicate::str::is_empty());
}
