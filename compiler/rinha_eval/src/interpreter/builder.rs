//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use rinha_ir::{Program, StringInterner};

use super::Interpreter;
use crate::config::EvalConfig;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Builder for creating Interpreter instances.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    program: &'a Program,
    config: EvalConfig,
    print_handler: Option<SharedPrintHandler>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner, program: &'a Program) -> Self {
        Self {
            interner,
            program,
            config: EvalConfig::default(),
            print_handler: None,
        }
    }

    /// Set the evaluation settings.
    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the print handler for `Print` output.
    ///
    /// Default is stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Build the interpreter.
    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            program: self.program,
            memo: self.config.memo_cache(),
            config: self.config,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            calls: 0,
        }
    }
}
