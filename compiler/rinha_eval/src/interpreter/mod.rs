//! Tree-walking interpreter for Rinha.
//!
//! # Evaluation Order
//!
//! Operand order is part of the semantics, since `Print` is observable:
//! the left operand of a `Binary` before the right, tuple components first
//! to second, call arguments left to right, and an `If` condition before
//! exactly one branch.
//!
//! # Scoping
//!
//! `Let` binds into the environment it is evaluated in, and the rest of
//! that environment's evaluation sees the binding. A call evaluates its
//! body in a fork of the caller's environment holding the parameters.
//! Functions do not capture where they were defined, so free variables in
//! a body resolve against the environment at the call.

mod builder;
mod function_call;

pub use builder::InterpreterBuilder;

use std::rc::Rc;

use rinha_ir::{ExprId, ExprKind, Program, StringInterner};
use rinha_stack::ensure_sufficient_stack;

use crate::config::EvalConfig;
use crate::errors::{type_mismatch, undefined_variable, EvalErrorKind, EvalResult};
use crate::memo::{MemoCache, MemoStats};
use crate::operators::evaluate_binary;
use crate::print_handler::SharedPrintHandler;
use crate::value::{FunctionValue, Value, ValueKind};
use crate::Environment;

/// Tree-walking interpreter over one loaded program.
pub struct Interpreter<'a> {
    pub(crate) interner: &'a StringInterner,
    pub(crate) program: &'a Program,
    pub(crate) config: EvalConfig,
    pub(crate) memo: MemoCache,
    pub(crate) print_handler: SharedPrintHandler,
    /// Function calls performed, memo hits included.
    pub(crate) calls: u64,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter with default settings, printing to stdout.
    pub fn new(interner: &'a StringInterner, program: &'a Program) -> Self {
        InterpreterBuilder::new(interner, program).build()
    }

    /// Evaluate the program's root term in an empty environment.
    pub fn run(&mut self) -> EvalResult {
        let mut env = Environment::new();
        let result = self.eval(self.program.root, &mut env);
        let stats = self.memo.stats();
        tracing::debug!(
            calls = self.calls,
            memo_hits = stats.hits,
            memo_misses = stats.misses,
            memo_stores = stats.stores,
            memo_evictions = stats.evictions,
            ok = result.is_ok(),
            "evaluation finished"
        );
        result
    }

    /// Evaluate a term of the program in `env`.
    pub fn eval(&mut self, id: ExprId, env: &mut Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(id, env))
    }

    fn eval_inner(&mut self, id: ExprId, env: &mut Environment) -> EvalResult {
        let program = self.program;
        match program.arena.kind(id) {
            ExprKind::Int(n) => Ok(Value::Int(n.clone())),
            ExprKind::Str(s) => Ok(Value::Str(Rc::clone(s))),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Function { params, body } => Ok(Value::Function(FunctionValue {
                id: program.function_id(id),
                expr: id,
                params: Rc::clone(params),
                body: *body,
            })),
            ExprKind::Var(name) => env.get(*name).cloned().ok_or_else(|| {
                undefined_variable(self.interner.lookup(*name)).at(program.location(id))
            }),
            ExprKind::Binary { op, left, right } => {
                let lhs = self.eval(*left, env)?;
                let rhs = self.eval(*right, env)?;
                evaluate_binary(&lhs, &rhs, *op).map_err(|err| {
                    let location = if err.kind == EvalErrorKind::DivisionByZero {
                        program.location(*right)
                    } else {
                        program.location(*left).to(program.location(*right))
                    };
                    err.at(location)
                })
            }
            ExprKind::Let { name, value, next } => {
                let value = self.eval(*value, env)?;
                env.set(*name, value);
                self.eval(*next, env)
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => match self.eval(*cond, env)? {
                Value::Bool(true) => self.eval(*then_branch, env),
                Value::Bool(false) => self.eval(*else_branch, env),
                other => {
                    Err(type_mismatch(ValueKind::Bool, other.kind()).at(program.location(*cond)))
                }
            },
            ExprKind::Print(inner) => {
                let value = self.eval(*inner, env)?;
                let line = value.display(self.interner).to_string();
                self.print_handler.println(&line);
                Ok(value)
            }
            ExprKind::First(inner) => match self.eval(*inner, env)? {
                Value::Tuple(pair) => Ok(pair.0.clone()),
                other => {
                    Err(type_mismatch(ValueKind::Tuple, other.kind()).at(program.location(*inner)))
                }
            },
            ExprKind::Second(inner) => match self.eval(*inner, env)? {
                Value::Tuple(pair) => Ok(pair.1.clone()),
                other => {
                    Err(type_mismatch(ValueKind::Tuple, other.kind()).at(program.location(*inner)))
                }
            },
            ExprKind::Tuple(first, second) => {
                let first = self.eval(*first, env)?;
                let second = self.eval(*second, env)?;
                Ok(Value::tuple(first, second))
            }
            ExprKind::Call { callee, args } => self.eval_call(id, *callee, args, env),
        }
    }

    /// Render a value the way `Print` does.
    pub fn render(&self, value: &Value) -> String {
        value.display(self.interner).to_string()
    }

    /// Call-result cache of this run.
    pub fn memo(&self) -> &MemoCache {
        &self.memo
    }

    /// Hit, miss, store and eviction counters of the memo cache.
    pub fn memo_stats(&self) -> MemoStats {
        self.memo.stats()
    }

    /// Function calls performed so far, memo hits included.
    pub fn call_count(&self) -> u64 {
        self.calls
    }
}
