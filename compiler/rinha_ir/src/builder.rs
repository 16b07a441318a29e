//! Programmatic construction of programs.
//!
//! Every node receives its own one-byte synthetic span, so two function
//! literals built separately always have distinct identities, exactly as if
//! they had been written at different places in a source file.

use num_bigint::BigInt;

use crate::{BinaryOp, ExprArena, ExprId, ExprKind, Name, Program, Span, StringInterner};

pub struct ProgramBuilder<'i> {
    interner: &'i StringInterner,
    arena: ExprArena,
    file: Name,
    offset: u32,
}

impl<'i> ProgramBuilder<'i> {
    pub fn new(interner: &'i StringInterner, file: &str) -> Self {
        ProgramBuilder {
            interner,
            file: interner.intern(file),
            arena: ExprArena::new(),
            offset: 0,
        }
    }

    fn alloc(&mut self, kind: ExprKind) -> ExprId {
        let span = Span::new(self.offset, self.offset.saturating_add(1));
        self.offset = self.offset.saturating_add(1);
        self.arena.alloc(kind, span)
    }

    pub fn int(&mut self, value: impl Into<BigInt>) -> ExprId {
        self.alloc(ExprKind::Int(value.into()))
    }

    pub fn str(&mut self, value: &str) -> ExprId {
        self.alloc(ExprKind::Str(value.into()))
    }

    pub fn bool(&mut self, value: bool) -> ExprId {
        self.alloc(ExprKind::Bool(value))
    }

    pub fn var(&mut self, name: &str) -> ExprId {
        let name = self.interner.intern(name);
        self.alloc(ExprKind::Var(name))
    }

    pub fn function(&mut self, params: &[&str], body: ExprId) -> ExprId {
        let params = params.iter().map(|p| self.interner.intern(p)).collect();
        self.alloc(ExprKind::Function { params, body })
    }

    pub fn call(&mut self, callee: ExprId, args: Vec<ExprId>) -> ExprId {
        self.alloc(ExprKind::Call { callee, args })
    }

    pub fn binary(&mut self, left: ExprId, op: BinaryOp, right: ExprId) -> ExprId {
        self.alloc(ExprKind::Binary { op, left, right })
    }

    pub fn let_in(&mut self, name: &str, value: ExprId, next: ExprId) -> ExprId {
        let name = self.interner.intern(name);
        self.alloc(ExprKind::Let { name, value, next })
    }

    pub fn if_else(&mut self, cond: ExprId, then_branch: ExprId, else_branch: ExprId) -> ExprId {
        self.alloc(ExprKind::If {
            cond,
            then_branch,
            else_branch,
        })
    }

    pub fn print(&mut self, value: ExprId) -> ExprId {
        self.alloc(ExprKind::Print(value))
    }

    pub fn first(&mut self, value: ExprId) -> ExprId {
        self.alloc(ExprKind::First(value))
    }

    pub fn second(&mut self, value: ExprId) -> ExprId {
        self.alloc(ExprKind::Second(value))
    }

    pub fn tuple(&mut self, first: ExprId, second: ExprId) -> ExprId {
        self.alloc(ExprKind::Tuple(first, second))
    }

    /// Finish the program with `root` as its entry term.
    pub fn finish(self, root: ExprId) -> Program {
        Program::new(self.file, self.arena, root)
    }
}
