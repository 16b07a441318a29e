//! Command handlers for the `rinha` CLI.
//!
//! Each submodule implements one command. Input handling shared by all of
//! them lives here in the module root.

use std::io::{self, Read};

use rinha_ir::{LoadError, Program, StringInterner};

mod check;
mod run;

pub use check::{check_file, check_source, CheckReport};
pub use run::{parse_run_options, run_file, run_program, RunOptions};

/// Path argument that reads the AST from stdin.
pub const STDIN_PATH: &str = "-";

/// Read a whole input, either a file or stdin when `path` is `-`.
pub fn read_input(path: &str) -> io::Result<String> {
    if path == STDIN_PATH {
        let mut text = String::new();
        io::stdin().lock().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
    }
}

/// Read and lower a JSON AST.
///
/// `file_name`, when given, replaces the file name recorded in the AST.
pub fn load_program(
    path: &str,
    interner: &StringInterner,
    file_name: Option<&str>,
) -> Result<Program, LoadError> {
    let text = read_input(path)?;
    let program = rinha_ir::load_str(&text, interner)?;
    Ok(match file_name {
        Some(name) => program.with_file_name(interner.intern(name)),
        None => program,
    })
}

/// One-line description of a load failure, naming the input.
pub fn describe_load_error(path: &str, err: &LoadError) -> String {
    let shown = if path == STDIN_PATH { "<stdin>" } else { path };
    match err {
        LoadError::Io(e) => match e.kind() {
            io::ErrorKind::NotFound => format!("cannot find file '{shown}'"),
            io::ErrorKind::PermissionDenied => format!("permission denied reading '{shown}'"),
            io::ErrorKind::InvalidData => format!("'{shown}' contains invalid UTF-8 data"),
            _ => format!("error reading '{shown}': {e}"),
        },
        other => format!("{shown}: {other}"),
    }
}
