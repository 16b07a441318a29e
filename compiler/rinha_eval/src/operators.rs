//! Binary operator implementations for the evaluator.
//!
//! Provides direct enum-based dispatch for binary operations. Both operands
//! are already evaluated when an operator runs, so `And` and `Or` do not
//! short-circuit.

use std::fmt::Write;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;
use rinha_ir::BinaryOp;

use crate::errors::{division_by_zero, invalid_binary_op, EvalResult};
use crate::{Value, ValueKind};

/// Evaluate a binary operation using direct pattern matching.
///
/// Failures carry no location; the evaluator attaches the span of the
/// `Binary` term.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(a, b, op),
        (Value::Bool(a), Value::Bool(b)) => eval_bool_binary(*a, *b, op),
        (Value::Str(_), Value::Str(_) | Value::Int(_)) | (Value::Int(_), Value::Str(_))
            if op == BinaryOp::Add =>
        {
            Ok(concat(left, right))
        }
        (Value::Str(a), Value::Str(b)) => eval_equality(a == b, op)
            .ok_or_else(|| invalid_binary_op(op, left.kind(), right.kind())),
        (Value::Tuple(_), Value::Tuple(_)) | (Value::Function(_), Value::Function(_)) => {
            eval_equality(left == right, op)
                .ok_or_else(|| invalid_binary_op(op, left.kind(), right.kind()))
        }
        _ => Err(invalid_binary_op(op, left.kind(), right.kind())),
    }
}

/// `Eq`/`Neq` given whether the operands are equal; `None` for other ops.
#[inline]
fn eval_equality(equal: bool, op: BinaryOp) -> Option<Value> {
    match op {
        BinaryOp::Eq => Some(Value::Bool(equal)),
        BinaryOp::Neq => Some(Value::Bool(!equal)),
        _ => None,
    }
}

fn eval_int_binary(a: &BigInt, b: &BigInt, op: BinaryOp) -> EvalResult {
    let value = match op {
        BinaryOp::Add => Value::Int(a + b),
        BinaryOp::Sub => Value::Int(a - b),
        BinaryOp::Mul => Value::Int(a * b),
        BinaryOp::Div => {
            if b.is_zero() {
                return Err(division_by_zero());
            }
            Value::Int(a.div_floor(b))
        }
        BinaryOp::Rem => {
            if b.is_zero() {
                return Err(division_by_zero());
            }
            Value::Int(a.mod_floor(b))
        }
        BinaryOp::Eq => Value::Bool(a == b),
        BinaryOp::Neq => Value::Bool(a != b),
        BinaryOp::Lt => Value::Bool(a < b),
        BinaryOp::Gt => Value::Bool(a > b),
        BinaryOp::Lte => Value::Bool(a <= b),
        BinaryOp::Gte => Value::Bool(a >= b),
        BinaryOp::And | BinaryOp::Or => {
            return Err(invalid_binary_op(op, ValueKind::Int, ValueKind::Int))
        }
    };
    Ok(value)
}

fn eval_bool_binary(a: bool, b: bool, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::And => Ok(Value::Bool(a && b)),
        BinaryOp::Or => Ok(Value::Bool(a || b)),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::Neq => Ok(Value::Bool(a != b)),
        _ => Err(invalid_binary_op(op, ValueKind::Bool, ValueKind::Bool)),
    }
}

/// Concatenate the raw text of two `Str`/`Int` operands.
fn concat(left: &Value, right: &Value) -> Value {
    let mut out = String::new();
    push_text(&mut out, left);
    push_text(&mut out, right);
    Value::Str(out.into())
}

fn push_text(out: &mut String, value: &Value) {
    match value {
        Value::Str(s) => out.push_str(s),
        // Writing to a String cannot fail.
        Value::Int(n) => {
            let _ = write!(out, "{n}");
        }
        Value::Bool(_) | Value::Tuple(_) | Value::Function(_) => {}
    }
}
