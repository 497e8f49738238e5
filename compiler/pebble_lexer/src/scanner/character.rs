//! Character literals: exactly one character or escape between `'`s.

use super::Tokenizer;
use crate::escape::{decode_escape, EscapeError};
use crate::lex_error::{LexError, LexErrorContext};
use crate::span::Position;
use crate::token::{Token, TokenKind};

impl Tokenizer<'_> {
    /// Scan a character literal starting at its opening `'`.
    ///
    /// Recovery consumes through the next `'` on the same line, or to the
    /// end of the line when there is none.
    pub(super) fn character(&mut self, start: Position) -> Token {
        self.cursor.advance();
        if self.cursor.is_eof() || self.cursor.current() == '\n' {
            let err = LexError::unterminated_char(self.span_from(start));
            return self.error_token(err, start);
        }

        let value = match self.cursor.current() {
            '\'' => {
                self.cursor.advance();
                let err = LexError::empty_char(self.span_from(start));
                return self.error_token(err, start);
            }
            '\\' => {
                let escape_start = self.cursor.position();
                self.cursor.advance();
                match decode_escape(&mut self.cursor) {
                    Ok(c) => Ok(c),
                    Err(EscapeError::Dangling) => {
                        let err = LexError::dangling_escape(self.span_from(escape_start));
                        return self.error_token(err, start);
                    }
                    Err(reason) => Err(LexError::invalid_escape(
                        self.span_from(escape_start),
                        reason,
                    )
                    .with_context(LexErrorContext::InsideChar)),
                }
            }
            c => {
                self.cursor.advance();
                Ok(c)
            }
        };

        if !self.cursor.is_eof() && self.cursor.current() == '\'' {
            self.cursor.advance();
            return match value {
                Ok(c) => self.token(TokenKind::Character(c), start),
                Err(err) => self.error_token(err, start),
            };
        }

        self.cursor.eat_while(|c| c != '\'' && c != '\n');
        let err = if self.cursor.current() == '\'' && !self.cursor.is_eof() {
            self.cursor.advance();
            LexError::multi_char(self.span_from(start))
        } else {
            LexError::unterminated_char(self.span_from(start))
        };
        self.error_token(err, start)
    }
}
