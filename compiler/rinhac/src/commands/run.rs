//! The `run` command: load a JSON AST and evaluate it.

use rinha_eval::{stdout_handler, EvalConfig, EvalResult, InterpreterBuilder, SharedPrintHandler};
use rinha_ir::{Program, StringInterner};

use super::{describe_load_error, load_program, STDIN_PATH};

/// Options accepted by `rinha run`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub config: EvalConfig,
    /// Print the final value after the program's own output.
    pub show_result: bool,
    /// File name that replaces the one recorded in the AST.
    pub file_name: Option<String>,
}

/// Parse the arguments following `run` into an input path and options.
///
/// Flags may appear before or after the path. Returns a message naming the
/// offending argument on unknown flags, malformed values, or a missing path.
pub fn parse_run_options(args: &[String]) -> Result<(String, RunOptions), String> {
    let mut options = RunOptions::default();
    let mut path = None;

    for arg in args {
        if arg == "--no-memo" {
            options.config = options.config.memoize(false);
        } else if let Some(value) = arg.strip_prefix("--memo-capacity=") {
            let capacity = value
                .parse::<usize>()
                .map_err(|_| format!("invalid --memo-capacity value '{value}'"))?;
            options.config = options.config.memo_capacity(Some(capacity));
        } else if arg == "--show-result" {
            options.show_result = true;
        } else if let Some(name) = arg.strip_prefix("--file-name=") {
            if name.is_empty() {
                return Err("--file-name needs a value".to_string());
            }
            options.file_name = Some(name.to_string());
        } else if arg.starts_with('-') && arg != STDIN_PATH {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_some() {
            return Err(format!("unexpected argument '{arg}'"));
        } else {
            path = Some(arg.clone());
        }
    }

    let path = path.ok_or_else(|| "missing input file".to_string())?;
    Ok((path, options))
}

/// Evaluate a loaded program, sending `Print` output to `handler`.
pub fn run_program(
    interner: &StringInterner,
    program: &Program,
    config: EvalConfig,
    handler: SharedPrintHandler,
) -> EvalResult {
    let mut interpreter = InterpreterBuilder::new(interner, program)
        .config(config)
        .print_handler(handler)
        .build();
    interpreter.run()
}

/// Run a JSON AST file and return the process exit code.
pub fn run_file(path: &str, options: &RunOptions) -> i32 {
    let interner = StringInterner::new();
    let program = match load_program(path, &interner, options.file_name.as_deref()) {
        Ok(program) => program,
        Err(err) => {
            eprintln!("error: {}", describe_load_error(path, &err));
            return 1;
        }
    };

    match run_program(&interner, &program, options.config, stdout_handler()) {
        Ok(value) => {
            if options.show_result {
                println!("{}", value.display(&interner));
            }
            0
        }
        Err(err) => {
            eprintln!("error: {}", err.render(&interner));
            1
        }
    }
}
