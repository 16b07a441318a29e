//! The `check` command: load and lower a JSON AST without evaluating it.

use rinha_eval::is_memoizable;
use rinha_ir::{LoadError, Program, StringInterner, TermKind};

use super::{describe_load_error, load_program};

/// What `check` found in a well-formed program.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub terms: usize,
    pub functions: usize,
    /// Functions whose calls may be served from the memo cache.
    pub memoizable: usize,
}

impl CheckReport {
    pub fn of(program: &Program) -> Self {
        let arena = &program.arena;
        let mut report = CheckReport {
            terms: arena.len(),
            ..CheckReport::default()
        };
        for id in arena.ids() {
            if arena.kind(id).kind() == TermKind::Function {
                report.functions += 1;
                if is_memoizable(arena, id) {
                    report.memoizable += 1;
                }
            }
        }
        report
    }
}

/// Load `text` as a JSON AST and summarize it.
pub fn check_source(text: &str, interner: &StringInterner) -> Result<CheckReport, LoadError> {
    let program = rinha_ir::load_str(text, interner)?;
    Ok(CheckReport::of(&program))
}

/// Check a file and return the process exit code.
pub fn check_file(path: &str) -> i32 {
    let interner = StringInterner::new();
    match load_program(path, &interner, None) {
        Ok(program) => {
            let report = CheckReport::of(&program);
            println!(
                "OK: {path} ({} terms, {} functions, {} memoizable)",
                report.terms, report.functions, report.memoizable
            );
            0
        }
        Err(err) => {
            eprintln!("error: {}", describe_load_error(path, &err));
            1
        }
    }
}
