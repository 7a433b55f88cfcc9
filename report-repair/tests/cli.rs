//! CLI tests for the `report-repair` binary.
//!
//! Spawns the binary against scratch input files and checks stdout and exit
//! codes for solved, unsolved, and malformed reports.

use std::process::Command;

use puzzle::exit_codes;
use puzzle::test_support::TestPuzzle;

fn report_repair() -> Command {
    Command::new(env!("CARGO_BIN_EXE_report-repair"))
}

#[test]
fn solves_bundled_example() {
    let output = report_repair()
        .arg("--example")
        .output()
        .expect("report-repair --example");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("pair product: 514579\n"), "{stdout}");
    assert!(stdout.contains("triple product: 241861950\n"), "{stdout}");
}

#[test]
fn unsolved_report_still_exits_ok() {
    let puzzle = TestPuzzle::new().expect("puzzle");
    let input = puzzle.write_input("input.txt", &["1", "2", "3"]).expect("write");

    let output = report_repair()
        .arg("--input")
        .arg(&input)
        .output()
        .expect("report-repair --input");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.ends_with("no two expenses sum to 2020\n"), "{stdout}");
}

#[test]
fn target_override_is_used() {
    let puzzle = TestPuzzle::new().expect("puzzle");
    let input = puzzle
        .write_input("input.txt", &["1", "2", "3", "5"])
        .expect("write");

    let output = report_repair()
        .arg("--input")
        .arg(&input)
        .args(["--target", "6"])
        .output()
        .expect("report-repair --target");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("pair: 1, 5\n"), "{stdout}");
    assert!(stdout.contains("triple: 1, 2, 3\n"), "{stdout}");
}

#[test]
fn malformed_line_aborts_without_output() {
    let puzzle = TestPuzzle::new().expect("puzzle");
    let input = puzzle
        .write_input("input.txt", &["1721", "979", "not-an-entry"])
        .expect("write");

    let output = report_repair()
        .arg("--input")
        .arg(&input)
        .output()
        .expect("report-repair --input");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("invalid expense: \"not-an-entry\""), "{stderr}");
    assert!(stderr.contains("input.txt:3"), "{stderr}");
}

#[test]
fn missing_input_file_is_invalid() {
    let puzzle = TestPuzzle::new().expect("puzzle");

    let output = report_repair()
        .arg("--input")
        .arg(puzzle.path().join("absent.txt"))
        .output()
        .expect("report-repair --input");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(output.stdout.is_empty());
}
