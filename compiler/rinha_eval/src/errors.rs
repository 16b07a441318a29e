//! Error types for evaluation.
//!
//! Every runtime failure is fatal: it aborts the whole run and propagates
//! to the caller of [`Interpreter::eval`](crate::Interpreter::eval).
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` provides typed error categories. Factory functions
//! (e.g., `division_by_zero()`) are the public API for creating errors;
//! the evaluator attaches the location of the term that failed.

use std::fmt;

use rinha_ir::{BinaryOp, Location, StringInterner, TermKind};

use crate::value::{Value, ValueKind};

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// A value of the wrong kind where `Bool`, `Tuple` or `Function` was
    /// required.
    TypeMismatch { expected: ValueKind, got: ValueKind },
    /// A call whose callee term is neither a variable nor a function literal.
    NotCallable { got: TermKind },
    /// Operand kinds not admitted by the operator.
    InvalidBinaryOp {
        op: BinaryOp,
        left: ValueKind,
        right: ValueKind,
    },
    DivisionByZero,
    UndefinedVariable { name: String },
    ArityMismatch { expected: usize, got: usize },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { expected, got } => write!(f, "{expected} expected, got {got}"),
            Self::NotCallable { got } => write!(f, "Variable or Function expected, got {got}"),
            Self::InvalidBinaryOp { op, left, right } => {
                write!(f, "{op} between {left} and {right} is not valid")
            }
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::UndefinedVariable { name } => write!(f, "Variable {name} not defined"),
            Self::ArityMismatch { expected, got } => {
                write!(f, "Function expected {expected} parameters, got {got}")
            }
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Location of the term that failed.
    ///
    /// Set once, by the innermost term that raised the error.
    pub location: Option<Location>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            location: None,
        }
    }

    /// Attach `location` unless a location is already recorded.
    #[must_use]
    pub fn at(mut self, location: Location) -> Self {
        if self.location.is_none() {
            self.location = Some(location);
        }
        self
    }

    /// Render as `<file> at <start>:<end> > <message>`.
    ///
    /// Errors without a location render as the bare message.
    pub fn render(&self, interner: &StringInterner) -> String {
        match self.location {
            Some(location) => format!(
                "{} at {} > {}",
                interner.lookup(location.file),
                location.span,
                self.kind
            ),
            None => self.kind.to_string(),
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Some(location) => write!(f, "at {} > {}", location.span, self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for EvalError {}

// Factory functions

#[cold]
pub fn type_mismatch(expected: ValueKind, got: ValueKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch { expected, got })
}

#[cold]
pub fn not_callable(got: TermKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable { got })
}

#[cold]
pub fn invalid_binary_op(op: BinaryOp, left: ValueKind, right: ValueKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidBinaryOp { op, left, right })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn arity_mismatch(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch { expected, got })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rinha_ir::Span;

    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            type_mismatch(ValueKind::Bool, ValueKind::Int).to_string(),
            "Bool expected, got Int"
        );
        assert_eq!(
            not_callable(TermKind::Int).to_string(),
            "Variable or Function expected, got Int"
        );
        assert_eq!(
            invalid_binary_op(BinaryOp::Sub, ValueKind::Str, ValueKind::Int).to_string(),
            "Sub between Str and Int is not valid"
        );
        assert_eq!(division_by_zero().to_string(), "Division by zero");
        assert_eq!(
            undefined_variable("fib").to_string(),
            "Variable fib not defined"
        );
        assert_eq!(
            arity_mismatch(2, 1).to_string(),
            "Function expected 2 parameters, got 1"
        );
    }

    #[test]
    fn test_render_with_location() {
        let interner = StringInterner::new();
        let file = interner.intern("fib.rinha");
        let err = division_by_zero().at(Location::new(file, Span::new(12, 19)));
        assert_eq!(err.render(&interner), "fib.rinha at 12:19 > Division by zero");
    }

    #[test]
    fn test_innermost_location_wins() {
        let interner = StringInterner::new();
        let file = interner.intern("t");
        let inner = Location::new(file, Span::new(5, 6));
        let outer = Location::new(file, Span::new(0, 20));
        let err = undefined_variable("x").at(inner).at(outer);
        assert_eq!(err.location, Some(inner));
    }

    #[test]
    fn test_render_without_location() {
        let interner = StringInterner::new();
        assert_eq!(arity_mismatch(1, 3).render(&interner), "Function expected 1 parameters, got 3");
    }
}
