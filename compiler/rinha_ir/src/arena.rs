//! Expression arena.
//!
//! All terms of a program live in one contiguous `Vec`; children are
//! referenced by [`ExprId`]. Nodes are never removed, so ids stay valid for
//! the lifetime of the arena.

use crate::{Expr, ExprId, ExprKind, Span, TermKind};

/// Arena holding every term of a program.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
}

impl ExprArena {
    pub fn new() -> Self {
        ExprArena { exprs: Vec::new() }
    }

    /// Allocate a term, returning its id.
    ///
    /// # Panics
    /// Panics if the arena would exceed `u32::MAX` nodes.
    pub fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        let index = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("expression arena exceeded u32::MAX nodes"));
        self.exprs.push(Expr::new(kind, span));
        ExprId::new(index)
    }

    /// Get a term by id.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    pub fn get(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.get(id).kind
    }

    #[inline]
    pub fn span(&self, id: ExprId) -> Span {
        self.get(id).span
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    /// Ids of every allocated term, in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = ExprId> {
        // `alloc` caps the arena at u32::MAX nodes.
        (0..self.exprs.len() as u32).map(ExprId::new)
    }

    /// Check whether a term of `kind` is reachable from `root`, `root`
    /// included, by descending through every child position.
    ///
    /// Iterative so arbitrarily deep terms cannot overflow the stack.
    pub fn contains_kind(&self, root: ExprId, kind: TermKind) -> bool {
        let mut pending = vec![root];
        while let Some(id) = pending.pop() {
            let expr = self.kind(id);
            if expr.kind() == kind {
                return true;
            }
            expr.for_each_child(|child| pending.push(child));
        }
        false
    }
}
