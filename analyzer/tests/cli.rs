use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn run_on(path: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_math-skills"))
        .arg(path)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn run_with(contents: &str) -> Output {
    let mut temp = NamedTempFile::new().unwrap();
    temp.write_all(contents.as_bytes()).unwrap();
    let path = temp.into_temp_path();
    run_on(&path)
}

#[test]
fn prints_rounded_statistics() {
    let output = run_with("10\n20\n30\n\n");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Average: 20\nMedian: 20\nVariance: 67\nStandard Deviation: 8\n"
    );
}

#[test]
fn single_value_has_zero_spread() {
    let output = run_with("5\n");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Average: 5\nMedian: 5\nVariance: 0\nStandard Deviation: 0\n"
    );
}

#[test]
fn even_count_rounds_halves_to_even() {
    let output = run_with("1\n2\n3\n4\n");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Average: 2\nMedian: 2\nVariance: 1\nStandard Deviation: 1\n"
    );
}

#[test]
fn negative_fraction_prints_negative_zero() {
    let output = run_with("-0.4\n");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Average: -0\nMedian: -0\nVariance: 0\nStandard Deviation: 0\n"
    );
}

#[test]
fn invalid_line_fails_without_output() {
    let output = run_with("1\nabc\n3\n");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8(output.stderr).unwrap(),
        "error: loading samples: line 2: invalid number \"abc\": invalid float literal\n"
    );
}

#[test]
fn empty_file_is_reported() {
    let output = run_with("\n\n");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8(output.stderr).unwrap(),
        "error: computing statistics: no data to analyze\n"
    );
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let cause = std::fs::read_to_string(&path).unwrap_err();
    let output = run_on(&path);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8(output.stderr).unwrap(),
        format!(
            "error: loading samples: failed to read {}: {}\n",
            path.display(),
            cause
        )
    );
}

#[test]
fn missing_argument_is_a_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_math-skills"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
