//! Loading the JSON AST emitted by the external Rinha parser.
//!
//! The parser writes a `File` object whose `expression` is a tree of
//! `kind`-tagged term objects, each with a `location`. Loading happens in
//! two steps: serde deserializes the document into the mirror types below,
//! then [`lower`] allocates every node into an [`ExprArena`], interning
//! identifiers and widening integer literals to `BigInt`.

use std::io::{self, Read};

use num_bigint::BigInt;
use serde::Deserialize;

use crate::{
    BinaryOp, ExprArena, ExprId, ExprKind, Name, Program, Span, SpanError, StringInterner,
};

/// Stack reserved for deserializing and dropping one document.
///
/// The derived deserializer recurses once per nesting level and cannot be
/// instrumented, so it runs on a dedicated segment this large.
const LOAD_STACK_SIZE: usize = 256 * 1024 * 1024;

/// Failure to turn a JSON document into a [`Program`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read AST: {0}")]
    Io(#[from] io::Error),
    #[error("malformed AST: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid location: {0}")]
    Location(#[from] SpanError),
    #[error("integer literal `{literal}` is not an integer")]
    IntegerLiteral { literal: String },
    #[error("location offset `{literal}` is not a byte offset")]
    Offset { literal: String },
}

/// Top-level document.
#[derive(Debug, Deserialize)]
pub struct File {
    pub name: String,
    pub expression: Term,
    pub location: Loc,
}

/// Node location as written by the parser.
///
/// Offsets stay `Number`s: terms are buffered while serde looks for their
/// `kind` tag, and with `arbitrary_precision` a buffered number only
/// deserializes back into a `Number`.
#[derive(Debug, Clone, Deserialize)]
pub struct Loc {
    pub start: serde_json::Number,
    pub end: serde_json::Number,
    pub filename: String,
}

impl Loc {
    /// Byte range of the node.
    pub fn span(&self) -> Result<Span, LoadError> {
        Ok(Span::try_from_offsets(offset(&self.start)?, offset(&self.end)?)?)
    }
}

/// Identifier with its own location (`Let` names, parameters).
#[derive(Debug, Deserialize)]
pub struct Ident {
    pub text: String,
    pub location: Loc,
}

/// Mirror of the parser's term objects.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind")]
pub enum Term {
    Int {
        value: serde_json::Number,
        location: Loc,
    },
    Str {
        value: String,
        location: Loc,
    },
    Bool {
        value: bool,
        location: Loc,
    },
    Var {
        text: String,
        location: Loc,
    },
    Function {
        parameters: Vec<Ident>,
        value: Box<Term>,
        location: Loc,
    },
    Call {
        callee: Box<Term>,
        arguments: Vec<Term>,
        location: Loc,
    },
    Binary {
        lhs: Box<Term>,
        op: BinaryOp,
        rhs: Box<Term>,
        location: Loc,
    },
    Let {
        name: Ident,
        value: Box<Term>,
        next: Box<Term>,
        location: Loc,
    },
    If {
        condition: Box<Term>,
        then: Box<Term>,
        otherwise: Box<Term>,
        location: Loc,
    },
    Print {
        value: Box<Term>,
        location: Loc,
    },
    First {
        value: Box<Term>,
        location: Loc,
    },
    Second {
        value: Box<Term>,
        location: Loc,
    },
    Tuple {
        first: Box<Term>,
        second: Box<Term>,
        location: Loc,
    },
}

impl Term {
    pub fn location(&self) -> &Loc {
        match self {
            Term::Int { location, .. }
            | Term::Str { location, .. }
            | Term::Bool { location, .. }
            | Term::Var { location, .. }
            | Term::Function { location, .. }
            | Term::Call { location, .. }
            | Term::Binary { location, .. }
            | Term::Let { location, .. }
            | Term::If { location, .. }
            | Term::Print { location, .. }
            | Term::First { location, .. }
            | Term::Second { location, .. }
            | Term::Tuple { location, .. } => location,
        }
    }
}

/// Load a program from JSON text.
pub fn load_str(text: &str, interner: &StringInterner) -> Result<Program, LoadError> {
    rinha_stack::with_stack_size(LOAD_STACK_SIZE, || {
        let mut deserializer = serde_json::Deserializer::from_str(text);
        deserializer.disable_recursion_limit();
        let file = File::deserialize(&mut deserializer)?;
        deserializer.end()?;
        lower(&file, interner)
    })
}

/// Load a program from a reader yielding JSON.
pub fn load_reader(mut reader: impl Read, interner: &StringInterner) -> Result<Program, LoadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    load_str(&text, interner)
}

/// Lower a deserialized document into an arena-backed [`Program`].
///
/// The program's file is the filename recorded on the root expression.
pub fn lower(file: &File, interner: &StringInterner) -> Result<Program, LoadError> {
    let mut lowerer = Lowerer {
        arena: ExprArena::new(),
        interner,
    };
    let root = lowerer.lower_term(&file.expression)?;
    let file_name = interner.intern(&file.expression.location().filename);
    Ok(Program::new(file_name, lowerer.arena, root))
}

struct Lowerer<'i> {
    arena: ExprArena,
    interner: &'i StringInterner,
}

impl Lowerer<'_> {
    fn lower_term(&mut self, term: &Term) -> Result<ExprId, LoadError> {
        rinha_stack::ensure_sufficient_stack(|| self.lower_term_inner(term))
    }

    fn name(&self, text: &str) -> Name {
        self.interner.intern(text)
    }

    fn lower_term_inner(&mut self, term: &Term) -> Result<ExprId, LoadError> {
        let span = term.location().span()?;
        let kind = match term {
            Term::Int { value, .. } => ExprKind::Int(widen(value)?),
            Term::Str { value, .. } => ExprKind::Str(value.as_str().into()),
            Term::Bool { value, .. } => ExprKind::Bool(*value),
            Term::Var { text, .. } => ExprKind::Var(self.name(text)),
            Term::Function {
                parameters, value, ..
            } => {
                let params = parameters.iter().map(|p| self.name(&p.text)).collect();
                let body = self.lower_term(value)?;
                ExprKind::Function { params, body }
            }
            Term::Call {
                callee, arguments, ..
            } => {
                let callee = self.lower_term(callee)?;
                let args = arguments
                    .iter()
                    .map(|arg| self.lower_term(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                ExprKind::Call { callee, args }
            }
            Term::Binary { lhs, op, rhs, .. } => {
                let left = self.lower_term(lhs)?;
                let right = self.lower_term(rhs)?;
                ExprKind::Binary {
                    op: *op,
                    left,
                    right,
                }
            }
            Term::Let {
                name, value, next, ..
            } => {
                let name = self.name(&name.text);
                let value = self.lower_term(value)?;
                let next = self.lower_term(next)?;
                ExprKind::Let { name, value, next }
            }
            Term::If {
                condition,
                then,
                otherwise,
                ..
            } => {
                let cond = self.lower_term(condition)?;
                let then_branch = self.lower_term(then)?;
                let else_branch = self.lower_term(otherwise)?;
                ExprKind::If {
                    cond,
                    then_branch,
                    else_branch,
                }
            }
            Term::Print { value, .. } => ExprKind::Print(self.lower_term(value)?),
            Term::First { value, .. } => ExprKind::First(self.lower_term(value)?),
            Term::Second { value, .. } => ExprKind::Second(self.lower_term(value)?),
            Term::Tuple { first, second, .. } => {
                let first = self.lower_term(first)?;
                let second = self.lower_term(second)?;
                ExprKind::Tuple(first, second)
            }
        };
        Ok(self.arena.alloc(kind, span))
    }
}

/// Widen a JSON integer to an arbitrary-precision integer.
///
/// The number keeps its source text, so literals of any size survive.
fn widen(value: &serde_json::Number) -> Result<BigInt, LoadError> {
    let literal = value.to_string();
    literal
        .parse::<BigInt>()
        .map_err(|_| LoadError::IntegerLiteral { literal })
}

fn offset(value: &serde_json::Number) -> Result<u64, LoadError> {
    value.as_u64().ok_or_else(|| LoadError::Offset {
        literal: value.to_string(),
    })
}
