//! Source positions and spans.
//!
//! Positions are plain `Copy` values stamped onto tokens as they are
//! produced. Nothing in a token refers back into the live cursor.

use std::fmt;

/// A point in a source unit.
///
/// `line` and `column` are 1-based, `column` counts `char`s (not bytes).
/// `offset` is the 0-based byte index into the source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

impl Position {
    /// The position of the first character of any source.
    pub const START: Position = Position {
        line: 1,
        column: 1,
        offset: 0,
    };

    #[inline]
    pub const fn new(line: u32, column: u32, offset: u32) -> Self {
        Position {
            line,
            column,
            offset,
        }
    }

    /// Move forward by `n` ASCII characters on the same line.
    #[inline]
    #[must_use]
    pub const fn advanced_by(self, n: u32) -> Self {
        Position {
            line: self.line,
            column: self.column + n,
            offset: self.offset + n,
        }
    }

    /// Move back by `n` ASCII characters on the same line.
    ///
    /// Saturates at the line start, so it never produces column 0.
    #[inline]
    #[must_use]
    pub const fn retreated_by(self, n: u32) -> Self {
        let n = if n >= self.column { self.column - 1 } else { n };
        Position {
            line: self.line,
            column: self.column - n,
            offset: self.offset - n,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Half-open source range `[start, end)`.
///
/// Invariant: `end.offset >= start.offset`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    /// Create a point span (zero-length).
    #[inline]
    pub const fn point(at: Position) -> Self {
        Span { start: at, end: at }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.offset - self.start.offset
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    /// Check if a byte offset is within this span.
    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start.offset && offset < self.end.offset
    }

    /// Check if another span is fully contained within this span.
    #[inline]
    pub fn contains_span(&self, other: Span) -> bool {
        self.start.offset <= other.start.offset && other.end.offset <= self.end.offset
    }

    /// Merge two spans to create one covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        let start = if other.start.offset < self.start.offset {
            other.start
        } else {
            self.start
        };
        let end = if other.end.offset > self.end.offset {
            other.end
        } else {
            self.end
        };
        Span { start, end }
    }

    /// Convert to a byte range for slicing the source.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start.offset as usize..self.end.offset as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
