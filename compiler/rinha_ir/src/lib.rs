//! Rinha IR - term representation for the Rinha evaluator
//!
//! This crate contains the data structures shared by the loader and the
//! evaluator:
//! - Spans and locations for diagnostics and function identity
//! - Names for interned identifiers
//! - Terms stored flat in an arena
//! - The JSON AST loader that produces a [`Program`]
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers are `Name(u32)`, compared in O(1)
//! - **Flatten Everything**: no `Box<Term>`, children are `ExprId(u32)` indices
//! - **Locations Are Identity**: a function literal is identified by where it
//!   was written, see [`FunctionId`]

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod builder;
mod interner;
pub mod json;
mod name;
mod operators;
mod program;
mod span;

pub use arena::ExprArena;
pub use ast::{Expr, ExprId, ExprKind, TermKind};
pub use builder::ProgramBuilder;
pub use interner::{InternError, StringInterner};
pub use json::{load_reader, load_str, LoadError};
pub use name::Name;
pub use operators::BinaryOp;
pub use program::{FunctionId, Program};
pub use span::{Location, Span, SpanError};
