//! Rinha Eval - tree-walking evaluator for Rinha programs.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Environment`: one flat persistent map of bindings, forked per call
//! - `evaluate_binary`: direct enum-based binary operator dispatch
//! - `MemoCache`: results of calls to functions without `Print`
//! - `PrintHandlerImpl`: where `Print` output goes
//! - `Interpreter`: case dispatch over the term arena of a `Program`
//!
//! ```
//! use rinha_eval::{buffer_handler, InterpreterBuilder, Value};
//! use rinha_ir::{BinaryOp, ProgramBuilder, StringInterner};
//!
//! let interner = StringInterner::new();
//! let mut b = ProgramBuilder::new(&interner, "doc.rinha");
//! let one = b.int(1);
//! let two = b.int(2);
//! let sum = b.binary(one, BinaryOp::Add, two);
//! let root = b.print(sum);
//! let program = b.finish(root);
//!
//! let output = buffer_handler();
//! let mut interpreter = InterpreterBuilder::new(&interner, &program)
//!     .print_handler(output.clone())
//!     .build();
//! assert_eq!(interpreter.run(), Ok(Value::int(3)));
//! assert_eq!(output.get_output(), "3\n");
//! ```

mod config;
mod environment;
pub mod errors;
pub mod interpreter;
mod memo;
mod operators;
mod print_handler;
mod value;

pub use config::EvalConfig;
pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use memo::{is_memoizable, Args, MemoCache, MemoKey, MemoStats};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::{FunctionValue, Value, ValueDisplay, ValueKind};

// Re-export error constructors for convenience (canonical path is rinha_eval::errors::*)
pub use errors::{
    arity_mismatch, division_by_zero, invalid_binary_op, not_callable, type_mismatch,
    undefined_variable,
};
