//! Shared test utilities for phase tests.

use std::path::PathBuf;

use rinha_eval::{buffer_handler, EvalConfig, EvalResult};
use rinha_ir::{Program, StringInterner};
use rinhac::commands::{load_program, run_program};

/// Absolute path of a file under `tests/fixtures/`.
pub fn fixture_path(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path.to_string_lossy().into_owned()
}

/// Load a fixture, panicking on load errors.
pub fn load_fixture(name: &str, interner: &StringInterner) -> Program {
    load_program(&fixture_path(name), interner, None)
        .unwrap_or_else(|err| panic!("fixture {name} failed to load: {err}"))
}

/// Outcome of evaluating a fixture into a buffer.
pub struct Evaluated {
    pub result: EvalResult,
    pub output: String,
    pub interner: StringInterner,
}

impl Evaluated {
    /// The rendered diagnostic of a failed run.
    pub fn diagnostic(&self) -> String {
        match &self.result {
            Ok(value) => panic!("expected failure, got {}", value.display(&self.interner)),
            Err(err) => err.render(&self.interner),
        }
    }
}

/// Evaluate a fixture with `config`, capturing `Print` output.
pub fn eval_fixture(name: &str, config: EvalConfig) -> Evaluated {
    let interner = StringInterner::new();
    let program = load_fixture(name, &interner);
    let output = buffer_handler();
    let result = run_program(&interner, &program, config, output.clone());
    Evaluated {
        result,
        output: output.get_output(),
        interner,
    }
}
