//! Source location spans.
//!
//! A `Span` is a compact byte range. A `Location` pairs it with the
//! interned name of the file the range belongs to, which is what
//! diagnostics and function identities are built from.

use std::fmt;

use crate::Name;

/// An AST offset that does not fit the 32-bit span representation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    #[error("start offset {0} does not fit in 32 bits")]
    StartTooLarge(u64),
    #[error("end offset {0} does not fit in 32 bits")]
    EndTooLarge(u64),
}

/// Byte range `[start, end)` within one source file.
///
/// Offsets are `u32`, so a span is 8 bytes and every term carries one.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(C)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Placeholder for terms built without source text.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Narrow offsets read from a JSON AST.
    pub fn try_from_offsets(start: u64, end: u64) -> Result<Self, SpanError> {
        let start = u32::try_from(start).map_err(|_| SpanError::StartTooLarge(start))?;
        let end = u32::try_from(end).map_err(|_| SpanError::EndTooLarge(end))?;
        Ok(Span { start, end })
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Smallest span covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

/// A span inside a named source file.
///
/// Two locations are equal only when file, start and end all match. This
/// is the identity used for function values.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Location {
    pub file: Name,
    pub span: Span,
}

impl Location {
    #[inline]
    pub const fn new(file: Name, span: Span) -> Self {
        Location { file, span }
    }

    /// Location covering `self` through `other`, keeping `self`'s file.
    #[inline]
    #[must_use]
    pub fn to(self, other: Location) -> Location {
        Location {
            file: self.file,
            span: self.span.merge(other.span),
        }
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Location, Span};
    crate::static_assert_size!(Span, 8);
    crate::static_assert_size!(Location, 12);
}

#[cfg(test)]
mod tests;
