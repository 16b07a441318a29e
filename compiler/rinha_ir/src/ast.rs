//! Term nodes.
//!
//! Terms are stored flat in an [`ExprArena`](crate::ExprArena) and refer to
//! their children through [`ExprId`] indices.

use std::fmt;
use std::rc::Rc;

use num_bigint::BigInt;

use crate::{BinaryOp, Name, Span};

/// Index into an expression arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    /// Create a new `ExprId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// A term with its source span.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// Term variants.
///
/// Integer literals are stored already widened to `BigInt`; string literals
/// are reference counted so evaluating one is a pointer copy.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Int(BigInt),
    Str(Rc<str>),
    Bool(bool),
    Var(Name),
    Function {
        params: Rc<[Name]>,
        body: ExprId,
    },
    Call {
        callee: ExprId,
        args: Vec<ExprId>,
    },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    Let {
        name: Name,
        value: ExprId,
        next: ExprId,
    },
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },
    Print(ExprId),
    First(ExprId),
    Second(ExprId),
    Tuple(ExprId, ExprId),
}

impl ExprKind {
    /// The discriminator of this term.
    pub fn kind(&self) -> TermKind {
        match self {
            ExprKind::Int(_) => TermKind::Int,
            ExprKind::Str(_) => TermKind::Str,
            ExprKind::Bool(_) => TermKind::Bool,
            ExprKind::Var(_) => TermKind::Var,
            ExprKind::Function { .. } => TermKind::Function,
            ExprKind::Call { .. } => TermKind::Call,
            ExprKind::Binary { .. } => TermKind::Binary,
            ExprKind::Let { .. } => TermKind::Let,
            ExprKind::If { .. } => TermKind::If,
            ExprKind::Print(_) => TermKind::Print,
            ExprKind::First(_) => TermKind::First,
            ExprKind::Second(_) => TermKind::Second,
            ExprKind::Tuple(..) => TermKind::Tuple,
        }
    }

    /// Call `f` on every direct child, in evaluation order.
    pub fn for_each_child(&self, mut f: impl FnMut(ExprId)) {
        match self {
            ExprKind::Int(_) | ExprKind::Str(_) | ExprKind::Bool(_) | ExprKind::Var(_) => {}
            ExprKind::Function { body, .. } => f(*body),
            ExprKind::Call { callee, args } => {
                f(*callee);
                args.iter().copied().for_each(f);
            }
            ExprKind::Binary { left, right, .. } => {
                f(*left);
                f(*right);
            }
            ExprKind::Let { value, next, .. } => {
                f(*value);
                f(*next);
            }
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                f(*cond);
                f(*then_branch);
                f(*else_branch);
            }
            ExprKind::Print(inner) | ExprKind::First(inner) | ExprKind::Second(inner) => f(*inner),
            ExprKind::Tuple(first, second) => {
                f(*first);
                f(*second);
            }
        }
    }
}

/// Discriminator over term variants, usable for exhaustive dispatch and
/// for naming kinds in diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TermKind {
    Int,
    Str,
    Bool,
    Var,
    Function,
    Call,
    Binary,
    Let,
    If,
    Print,
    First,
    Second,
    Tuple,
}

impl TermKind {
    /// Kinds that denote fully reduced values.
    pub const fn is_value(self) -> bool {
        matches!(
            self,
            TermKind::Int | TermKind::Str | TermKind::Bool | TermKind::Tuple | TermKind::Function
        )
    }

    /// Kinds allowed in callee position of a call.
    pub const fn is_callable(self) -> bool {
        matches!(self, TermKind::Var | TermKind::Function)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TermKind::Int => "Int",
            TermKind::Str => "Str",
            TermKind::Bool => "Bool",
            TermKind::Var => "Var",
            TermKind::Function => "Function",
            TermKind::Call => "Call",
            TermKind::Binary => "Binary",
            TermKind::Let => "Let",
            TermKind::If => "If",
            TermKind::Print => "Print",
            TermKind::First => "First",
            TermKind::Second => "Second",
            TermKind::Tuple => "Tuple",
        }
    }
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kinds() {
        let values = [
            TermKind::Int,
            TermKind::Str,
            TermKind::Bool,
            TermKind::Tuple,
            TermKind::Function,
        ];
        for kind in values {
            assert!(kind.is_value(), "{kind} should be a value kind");
        }
        for kind in [TermKind::Var, TermKind::Call, TermKind::Let, TermKind::Print] {
            assert!(!kind.is_value(), "{kind} should not be a value kind");
        }
    }

    #[test]
    fn test_callable_kinds() {
        assert!(TermKind::Var.is_callable());
        assert!(TermKind::Function.is_callable());
        assert!(!TermKind::Call.is_callable());
        assert!(!TermKind::Int.is_callable());
    }

    #[test]
    fn test_children_in_evaluation_order() {
        let kind = ExprKind::If {
            cond: ExprId::new(3),
            then_branch: ExprId::new(1),
            else_branch: ExprId::new(2),
        };
        let mut seen = Vec::new();
        kind.for_each_child(|id| seen.push(id.raw()));
        assert_eq!(seen, vec![3, 1, 2]);

        let call = ExprKind::Call {
            callee: ExprId::new(0),
            args: vec![ExprId::new(5), ExprId::new(4)],
        };
        seen.clear();
        call.for_each_child(|id| seen.push(id.raw()));
        assert_eq!(seen, vec![0, 5, 4]);
    }
}
