//! Evaluation phase tests.
//!
//! Whole programs loaded from fixtures and evaluated through `run_program`,
//! plus `run` option parsing.

use pretty_assertions::assert_eq;
use rinha_eval::{EvalConfig, EvalErrorKind, Value};
use rinhac::commands::{parse_run_options, RunOptions};

use crate::common::eval_fixture;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_add_prints_and_returns_sum() {
    let run = eval_fixture("add.json", EvalConfig::default());
    assert_eq!(run.result, Ok(Value::int(5)));
    assert_eq!(run.output, "5\n");
}

#[test]
fn test_fib_same_with_and_without_memo() {
    let memo = eval_fixture("fib.json", EvalConfig::default());
    let plain = eval_fixture("fib.json", EvalConfig::default().memoize(false));
    assert_eq!(memo.result, Ok(Value::int(832_040)));
    assert_eq!(memo.result, plain.result);
    assert_eq!(memo.output, "832040\n");
    assert_eq!(memo.output, plain.output);
}

#[test]
fn test_fib_with_tiny_memo_capacity() {
    let run = eval_fixture("fib.json", EvalConfig::default().memo_capacity(Some(2)));
    assert_eq!(run.result, Ok(Value::int(832_040)));
}

#[test]
fn test_printing_function_runs_every_call() {
    let run = eval_fixture("echo.json", EvalConfig::default());
    assert_eq!(run.output, "1\n1\n");
    assert_eq!(run.result, Ok(Value::int(1)));
}

#[test]
fn test_second_of_tuple_prints_quoted_string() {
    let run = eval_fixture("tuple.json", EvalConfig::default());
    assert_eq!(run.output, "\"a\"\n");
    assert_eq!(run.result, Ok(Value::string("a")));
}

#[test]
fn test_division_by_zero_diagnostic() {
    let run = eval_fixture("div_zero.json", EvalConfig::default());
    assert_eq!(run.output, "");
    let err = run.result.clone().unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    assert_eq!(run.diagnostic(), "div_zero.rinha at 10:11 > Division by zero");
}

#[test]
fn test_parse_run_options_defaults() {
    let (path, options) = parse_run_options(&args(&["prog.json"])).unwrap();
    assert_eq!(path, "prog.json");
    assert_eq!(options, RunOptions::default());
}

#[test]
fn test_parse_run_options_all_flags() {
    let (path, options) = parse_run_options(&args(&[
        "--no-memo",
        "-",
        "--memo-capacity=64",
        "--show-result",
        "--file-name=main.rinha",
    ]))
    .unwrap();
    assert_eq!(path, "-");
    assert_eq!(
        options,
        RunOptions {
            config: EvalConfig::default().memoize(false).memo_capacity(Some(64)),
            show_result: true,
            file_name: Some("main.rinha".to_string()),
        }
    );
}

#[test]
fn test_parse_run_options_rejections() {
    assert_eq!(
        parse_run_options(&args(&["--memo-capacity=lots", "a.json"])).unwrap_err(),
        "invalid --memo-capacity value 'lots'"
    );
    assert_eq!(
        parse_run_options(&args(&["--fast", "a.json"])).unwrap_err(),
        "unknown option '--fast'"
    );
    assert_eq!(
        parse_run_options(&args(&["a.json", "b.json"])).unwrap_err(),
        "unexpected argument 'b.json'"
    );
    assert_eq!(
        parse_run_options(&args(&["--show-result"])).unwrap_err(),
        "missing input file"
    );
    assert_eq!(
        parse_run_options(&args(&["--file-name=", "a.json"])).unwrap_err(),
        "--file-name needs a value"
    );
}
