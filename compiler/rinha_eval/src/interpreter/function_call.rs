//! Function call evaluation methods for the Interpreter.

use rinha_ir::ExprId;

use super::Interpreter;
use crate::errors::{arity_mismatch, not_callable, type_mismatch, EvalError, EvalResult};
use crate::memo::Args;
use crate::value::{FunctionValue, Value, ValueKind};
use crate::Environment;

impl Interpreter<'_> {
    /// Evaluate the `Call` term `call`.
    ///
    /// The callee's scope is forked from `env` before any argument runs;
    /// arguments are evaluated left to right in `env` itself, so bindings
    /// they make stay with the caller.
    #[tracing::instrument(level = "debug", skip_all, fields(at = %self.program.arena.span(call)))]
    pub(super) fn eval_call(
        &mut self,
        call: ExprId,
        callee: ExprId,
        args: &[ExprId],
        env: &mut Environment,
    ) -> EvalResult {
        let program = self.program;
        let func = self.resolve_callee(callee, env)?;
        if func.arity() != args.len() {
            return Err(arity_mismatch(func.arity(), args.len()).at(program.location(call)));
        }

        let mut scope = env.fork();
        let mut values = Args::with_capacity(args.len());
        for (&param, &arg) in func.params.iter().zip(args) {
            let value = self.eval(arg, env)?;
            scope.set(param, value.clone());
            values.push(value);
        }
        self.calls += 1;

        let memoize = self.config.memoize && self.memo.is_eligible(&program.arena, &func);
        if memoize {
            if let Some(cached) = self.memo.lookup(func.id, &values) {
                tracing::trace!(function = %func.id.location().span, "memo hit");
                return Ok(cached);
            }
        }

        let result = self.eval(func.body, &mut scope)?;

        if memoize {
            tracing::trace!(function = %func.id.location().span, "memo store");
            self.memo.store(func.id, values, result.clone());
        }
        Ok(result)
    }

    /// Reduce a callee term to the function it denotes.
    ///
    /// Only variables and function literals may appear in callee position.
    fn resolve_callee(
        &mut self,
        callee: ExprId,
        env: &mut Environment,
    ) -> Result<FunctionValue, EvalError> {
        let program = self.program;
        let kind = program.arena.kind(callee).kind();
        if !kind.is_callable() {
            return Err(not_callable(kind).at(program.location(callee)));
        }
        match self.eval(callee, env)? {
            Value::Function(func) => Ok(func),
            other => Err(type_mismatch(ValueKind::Function, other.kind()).at(program.location(callee))),
        }
    }
}
