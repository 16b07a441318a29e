//! Binary tests: spawn `rinha` and check exit codes and streams.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;

use crate::common::fixture_path;

fn rinha(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rinha"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn rinha")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_run_prints_program_output_only() {
    let output = rinha(&["run", &fixture_path("add.json")]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "5\n");
}

#[test]
fn test_show_result_appends_final_value() {
    let output = rinha(&["run", &fixture_path("tuple.json"), "--show-result"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\"a\"\n\"a\"\n");
}

#[test]
fn test_bare_json_path_runs() {
    let output = rinha(&[&fixture_path("fib.json")]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "832040\n");
}

#[test]
fn test_runtime_error_exit_and_diagnostic() {
    let output = rinha(&["run", &fixture_path("div_zero.json"), "--file-name=main.rinha"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert_eq!(
        stderr(&output),
        "error: main.rinha at 10:11 > Division by zero\n"
    );
}

#[test]
fn test_load_error_exits_one() {
    let output = rinha(&["run", &fixture_path("malformed.json")]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error: "), "{}", stderr(&output));
}

#[test]
fn test_bad_flag_exits_two() {
    let output = rinha(&["run", &fixture_path("add.json"), "--memo-capacity=-1"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("invalid --memo-capacity value '-1'"));
}

#[test]
fn test_unknown_command_exits_one() {
    let output = rinha(&["frobnicate"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Unknown command: frobnicate"));
}

#[test]
fn test_check_reports_summary() {
    let path = fixture_path("echo.json");
    let output = rinha(&["check", &path]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        format!("OK: {path} (11 terms, 1 functions, 0 memoizable)\n")
    );
}

#[test]
fn test_run_reads_stdin() {
    let program = std::fs::read_to_string(fixture_path("add.json")).unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_rinha"))
        .args(["run", "-"])
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(program.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "5\n");
}

#[test]
fn test_version() {
    let output = rinha(&["version"]);
    assert_eq!(
        stdout(&output),
        format!("rinha {}\n", env!("CARGO_PKG_VERSION"))
    );
}
