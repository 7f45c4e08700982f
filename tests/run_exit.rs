//! Run and Exit Status Tests
//!
//! - a readable batch prints the report and exits 0
//! - an unreadable source logs the error and exits non-zero
//! - out-of-range `--year` is refused before any record is read

use passcheck::utils::{BatchConfig, OutputFormat, PassportError};
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tempfile::NamedTempFile;

const VALID: &str =
    "born:1990 issued:2020 expires:2030 height:180cm hair:#123abc eyes:blue usmca:123456789";

// =============================================================================
// Helper Functions
// =============================================================================

fn batch_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn config(source: &Path) -> BatchConfig {
    BatchConfig {
        source: source.to_path_buf(),
        display_limit: 2,
        current_year: 2024,
        format: OutputFormat::Text,
    }
}

fn passcheck() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_passcheck"));
    command.env("RUST_LOG", "error");
    command
}

// =============================================================================
// Library Run Tests
// =============================================================================

#[test]
fn test_run_writes_report() {
    let file = batch_file(&format!("{VALID}\n\n{VALID}\n\n{VALID}\n"));
    let mut out = Vec::new();
    passcheck::run(&config(file.path()), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches(&"-".repeat(132)).count(), 2);
    assert!(text.ends_with("Valid records: 3\n"));
}

#[test]
fn test_run_propagates_io_failure() {
    let dir = tempfile::tempdir().unwrap();
    let mut out = Vec::new();
    let result = passcheck::run(&config(&dir.path().join("missing.txt")), &mut out);
    assert!(matches!(result, Err(PassportError::Io { .. })));
    assert!(out.is_empty());
}

// =============================================================================
// Binary Exit Status Tests
// =============================================================================

#[test]
fn test_binary_succeeds_on_readable_batch() {
    let file = batch_file(VALID);
    let output = passcheck()
        .arg(file.path())
        .arg("--year=2024")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with("Valid records: 1\n"));
}

#[test]
fn test_binary_fails_on_missing_source() {
    let dir = tempfile::tempdir().unwrap();
    let output = passcheck()
        .arg(dir.path().join("missing.txt"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error validating passports"), "stderr: {stderr}");
}

#[test]
fn test_binary_refuses_out_of_range_year() {
    let file = batch_file(VALID);
    let output = passcheck()
        .arg(file.path())
        .arg("--year=-2147483648")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
