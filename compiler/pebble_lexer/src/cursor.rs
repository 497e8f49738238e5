//! Character cursor with line/column/offset bookkeeping.
//!
//! The cursor walks a `&str` one `char` at a time and never moves backward.
//! Reading past the end yields [`EOF_CHAR`]; because source text may contain
//! a real NUL, callers that care must check [`Cursor::is_eof`].
//!
//! Bulk skips (`eat_until_newline`, `eat_through`) use `memchr` to find their
//! stopping point, then recompute line and column for the skipped slice.

use crate::span::Position;

/// Sentinel returned when peeking past the end of the source.
pub const EOF_CHAR: char = '\0';

#[allow(
    clippy::cast_possible_truncation,
    reason = "source units are limited to u32::MAX bytes; larger offsets saturate"
)]
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Whitespace between tokens. A stray byte-order mark counts as whitespace.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Cursor over one source unit.
///
/// The cursor is [`Copy`]: a copy is an independent view that can scan ahead
/// (e.g. an interpolation sub-scan) and later be adopted by the owner.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'src> {
    source: &'src str,
    /// Current byte offset into `source`.
    pos: usize,
    line: u32,
    column: u32,
    /// Byte offset of the first character of the current line.
    line_start: usize,
}

impl<'src> Cursor<'src> {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Cursor {
            source,
            pos: 0,
            line: 1,
            column: 1,
            line_start: 0,
        }
    }

    /// The full source text this cursor walks.
    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Current byte offset.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Current position as a value that can be stored on a token.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column, to_u32(self.pos))
    }

    /// The unconsumed remainder of the source.
    #[inline]
    pub fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The current character, or [`EOF_CHAR`] at end of input.
    #[inline]
    pub fn current(&self) -> char {
        self.rest().chars().next().unwrap_or(EOF_CHAR)
    }

    /// The character `k` positions ahead (0 = current) without consuming.
    #[inline]
    pub fn peek(&self, k: usize) -> char {
        self.rest().chars().nth(k).unwrap_or(EOF_CHAR)
    }

    /// Consume one character. A no-op at end of input.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.rest().chars().next() else {
            return;
        };
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
            self.line_start = self.pos;
        } else {
            self.column += 1;
        }
    }

    /// Consume `n` characters.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Consume characters while `pred` holds.
    #[inline]
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Consume up to (not including) the line terminator, `\n` or `\r\n`,
    /// or to end of input.
    pub fn eat_until_newline(&mut self) {
        let rest = self.rest().as_bytes();
        let target = match memchr::memchr(b'\n', rest) {
            Some(i) if i > 0 && rest[i - 1] == b'\r' => self.pos + i - 1,
            Some(i) => self.pos + i,
            None => self.source.len(),
        };
        self.jump_to(target);
    }

    /// Consume through the first occurrence of `needle`.
    ///
    /// Returns `false` (having consumed everything) if `needle` never occurs.
    pub fn eat_through(&mut self, needle: &str) -> bool {
        match memchr::memmem::find(self.rest().as_bytes(), needle.as_bytes()) {
            Some(i) => {
                self.jump_to(self.pos + i + needle.len());
                true
            }
            None => {
                self.eat_to_end();
                false
            }
        }
    }

    /// Consume the rest of the source.
    pub fn eat_to_end(&mut self) {
        self.jump_to(self.source.len());
    }

    /// The source text from `start` (a byte offset) to the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'src str {
        &self.source[start..self.pos]
    }

    /// True if only whitespace precedes the cursor on the current line.
    pub fn is_at_line_start(&self) -> bool {
        self.source[self.line_start..self.pos]
            .chars()
            .all(is_whitespace)
    }

    /// Move forward to byte offset `target`, keeping line and column exact.
    ///
    /// `target` must be a char boundary at or after the current offset.
    fn jump_to(&mut self, target: usize) {
        debug_assert!(target >= self.pos && self.source.is_char_boundary(target));
        let skipped = &self.source[self.pos..target];
        match memchr::memrchr(b'\n', skipped.as_bytes()) {
            Some(last) => {
                let newlines = memchr::memchr_iter(b'\n', skipped.as_bytes()).count();
                self.line += to_u32(newlines);
                self.line_start = self.pos + last + 1;
                self.column = 1 + to_u32(self.source[self.line_start..target].chars().count());
            }
            None => {
                self.column += to_u32(skipped.chars().count());
            }
        }
        self.pos = target;
    }
}
