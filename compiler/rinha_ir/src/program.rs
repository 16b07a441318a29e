//! A loaded program: its arena, root term and source file name.

use crate::{ExprArena, ExprId, Location, Name};

/// Stable identity of a function literal.
///
/// Two function values are the same function exactly when their defining
/// terms sit at the same location of the same file. Syntactically equal
/// functions written twice are different functions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionId(Location);

impl FunctionId {
    #[inline]
    pub const fn new(location: Location) -> Self {
        FunctionId(location)
    }

    #[inline]
    pub const fn location(self) -> Location {
        self.0
    }
}

/// A complete program ready for evaluation.
#[derive(Clone, Debug)]
pub struct Program {
    /// Interned name of the source file every node belongs to.
    pub file: Name,
    pub arena: ExprArena,
    pub root: ExprId,
}

impl Program {
    pub fn new(file: Name, arena: ExprArena, root: ExprId) -> Self {
        Program { file, arena, root }
    }

    /// Full location of a term.
    #[inline]
    pub fn location(&self, id: ExprId) -> Location {
        Location::new(self.file, self.arena.span(id))
    }

    /// Identity of the function literal at `id`.
    #[inline]
    pub fn function_id(&self, id: ExprId) -> FunctionId {
        FunctionId::new(self.location(id))
    }

    /// Reattribute every node to another file.
    ///
    /// Used when a term was parsed from a scratch file (an interactive
    /// prompt, a temp file) and diagnostics should name the real origin.
    #[must_use]
    pub fn with_file_name(mut self, file: Name) -> Self {
        self.file = file;
        self
    }
}
