//! Loading phase tests.
//!
//! JSON fixtures through `load_program`, the `check` summary, and the
//! wording of load failures.

use pretty_assertions::assert_eq;
use rinha_ir::{LoadError, StringInterner};
use rinhac::commands::{check_source, describe_load_error, load_program, CheckReport};

use crate::common::{fixture_path, load_fixture};

#[test]
fn test_add_fixture_shape() {
    let interner = StringInterner::new();
    let program = load_fixture("add.json", &interner);
    assert_eq!(interner.lookup(program.file), "add.rinha");
    assert_eq!(
        CheckReport::of(&program),
        CheckReport {
            terms: 10,
            functions: 1,
            memoizable: 1,
        }
    );
}

#[test]
fn test_check_counts_printing_functions_as_unmemoizable() {
    let interner = StringInterner::new();
    let program = load_fixture("echo.json", &interner);
    assert_eq!(
        CheckReport::of(&program),
        CheckReport {
            terms: 11,
            functions: 1,
            memoizable: 0,
        }
    );
}

#[test]
fn test_check_fib() {
    let interner = StringInterner::new();
    let text = std::fs::read_to_string(fixture_path("fib.json")).unwrap();
    let report = check_source(&text, &interner).unwrap();
    assert_eq!(report.terms, 22);
    assert_eq!(report.functions, 1);
    assert_eq!(report.memoizable, 1);
}

#[test]
fn test_file_name_override() {
    let interner = StringInterner::new();
    let program = load_program(&fixture_path("add.json"), &interner, Some("main.rinha")).unwrap();
    assert_eq!(interner.lookup(program.file), "main.rinha");
}

#[test]
fn test_unknown_term_kind_is_json_error() {
    let interner = StringInterner::new();
    let err = load_program(&fixture_path("malformed.json"), &interner, None).unwrap_err();
    assert!(matches!(err, LoadError::Json(_)), "got {err:?}");
}

#[test]
fn test_missing_file_message() {
    let interner = StringInterner::new();
    let path = fixture_path("does_not_exist.json");
    let err = load_program(&path, &interner, None).unwrap_err();
    assert_eq!(
        describe_load_error(&path, &err),
        format!("cannot find file '{path}'")
    );
}

#[test]
fn test_malformed_message_names_input() {
    let interner = StringInterner::new();
    let path = fixture_path("malformed.json");
    let err = load_program(&path, &interner, None).unwrap_err();
    let message = describe_load_error(&path, &err);
    assert!(
        message.starts_with(&format!("{path}: malformed AST: ")),
        "got {message}"
    );
}
