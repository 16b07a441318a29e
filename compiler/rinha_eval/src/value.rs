//! Runtime values.
//!
//! Values are the fully reduced subset of terms. They are cheap to clone:
//! strings and tuples are reference counted, functions carry only their
//! identity, parameter names and body id.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::rc::Rc;

use num_bigint::BigInt;
use rinha_ir::{ExprId, FunctionId, Name, StringInterner};
use rinha_stack::ensure_sufficient_stack;

/// A function value.
///
/// Functions do not capture their defining environment. Equality and
/// hashing use only [`FunctionId`], the location of the defining literal.
#[derive(Clone, Debug)]
pub struct FunctionValue {
    pub id: FunctionId,
    /// The `Function` term this value was produced from.
    pub expr: ExprId,
    pub params: Rc<[Name]>,
    pub body: ExprId,
}

impl FunctionValue {
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FunctionValue {}

impl Hash for FunctionValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Int(BigInt),
    Str(Rc<str>),
    Bool(bool),
    Tuple(Rc<(Value, Value)>),
    Function(FunctionValue),
}

impl Value {
    #[inline]
    pub fn int(n: impl Into<BigInt>) -> Self {
        Value::Int(n.into())
    }

    #[inline]
    pub fn string(s: &str) -> Self {
        Value::Str(s.into())
    }

    #[inline]
    pub fn tuple(first: Value, second: Value) -> Self {
        Value::Tuple(Rc::new((first, second)))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Str(_) => ValueKind::Str,
            Value::Bool(_) => ValueKind::Bool,
            Value::Tuple(_) => ValueKind::Tuple,
            Value::Function(_) => ValueKind::Function,
        }
    }

    /// Render for output: strings quoted, tuples as `(a,b)`, functions as
    /// `fn(p1, p2)`.
    pub fn display<'a>(&'a self, interner: &'a StringInterner) -> ValueDisplay<'a> {
        ValueDisplay {
            value: self,
            interner,
        }
    }
}

// Tuples nest arbitrarily deep (lists are chains of pairs), so structural
// equality and hashing recurse under `ensure_sufficient_stack`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => {
                Rc::ptr_eq(a, b) || ensure_sufficient_stack(|| a.0 == b.0 && a.1 == b.1)
            }
            (Value::Function(a), Value::Function(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Value::Int(n) => n.hash(state),
            Value::Str(s) => s.hash(state),
            Value::Bool(b) => b.hash(state),
            Value::Tuple(pair) => ensure_sufficient_stack(|| {
                pair.0.hash(state);
                pair.1.hash(state);
            }),
            Value::Function(f) => f.hash(state),
        }
    }
}

/// Display adapter returned by [`Value::display`].
pub struct ValueDisplay<'a> {
    value: &'a Value,
    interner: &'a StringInterner,
}

impl fmt::Display for ValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "\"{s}\""),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Tuple(pair) => ensure_sufficient_stack(|| {
                write!(
                    f,
                    "({},{})",
                    pair.0.display(self.interner),
                    pair.1.display(self.interner)
                )
            }),
            Value::Function(func) => {
                f.write_str("fn(")?;
                for (i, param) in func.params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(self.interner.lookup(*param))?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Kind of a runtime value, for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ValueKind {
    Int,
    Str,
    Bool,
    Tuple,
    Function,
}

impl ValueKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueKind::Int => "Int",
            ValueKind::Str => "Str",
            ValueKind::Bool => "Bool",
            ValueKind::Tuple => "Tuple",
            ValueKind::Function => "Function",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
