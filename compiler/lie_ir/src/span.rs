//! Source positions and spans.
//!
//! Positions are line/column pairs, both 1-based. A position of `0:0` is the
//! "unset" marker used by freshly created AST nodes before the parser fills
//! in their extent.

use std::fmt;

/// A 1-based line/column location in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The unset position (`0:0`).
    pub const UNSET: Position = Position { line: 0, column: 0 };

    /// The first character of any source.
    pub const START: Position = Position { line: 1, column: 1 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Extent of a construct in the source: first and last character positions,
/// both inclusive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Span of a freshly created node.
    pub const EMPTY: Span = Span {
        start: Position::UNSET,
        end: Position::UNSET,
    };

    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    /// A span covering a single position.
    #[inline]
    pub const fn point(at: Position) -> Self {
        Span { start: at, end: at }
    }

    /// Merge two spans to create one covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Returns `true` if the span was never set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Span::EMPTY
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} to {}, {}",
            self.start.line, self.start.column, self.end.line, self.end.column
        )
    }
}

#[cfg(test)]
mod tests;
