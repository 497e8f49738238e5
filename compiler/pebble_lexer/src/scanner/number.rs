//! Numeric literals.
//!
//! `0x`/`0o`/`0b` prefixed integers, decimal integers, fractions (`1.5`) and
//! unsigned exponents (`1e9`, `2.5e3`). Integers of any base may carry the
//! big-literal suffix `n`. No identifier character may follow a literal.

use super::{is_ident_continue, Tokenizer};
use crate::lex_error::LexError;
use crate::span::Position;
use crate::token::{NumberKind, NumberLiteral, Token, TokenKind};

fn base_name(kind: NumberKind) -> &'static str {
    match kind {
        NumberKind::Hexadecimal => "hexadecimal",
        NumberKind::Octal => "octal",
        NumberKind::Binary => "binary",
        NumberKind::Decimal | NumberKind::Exponent | NumberKind::DecimalFraction => "decimal",
    }
}

impl Tokenizer<'_> {
    /// Scan a numeric literal starting at an ASCII digit.
    pub(super) fn number(&mut self, start: Position) -> Token {
        if self.cursor.current() == '0' {
            let prefixed = match self.cursor.peek(1) {
                'x' | 'X' => Some(NumberKind::Hexadecimal),
                'o' | 'O' => Some(NumberKind::Octal),
                'b' | 'B' => Some(NumberKind::Binary),
                _ => None,
            };
            if let Some(kind) = prefixed {
                return self.prefixed_number(start, kind);
            }
        }
        self.decimal_number(start)
    }

    fn prefixed_number(&mut self, start: Position, kind: NumberKind) -> Token {
        self.cursor.advance_n(2);
        let digits_start = self.cursor.offset();
        self.cursor.eat_while(|c| c.is_digit(kind.radix()));

        if self.cursor.offset() == digits_start {
            let prefix = self.cursor.slice_from(start.offset as usize);
            let err = LexError::missing_radix_digits(self.span_from(start), prefix);
            self.cursor.eat_while(is_ident_continue);
            return self.error_token(err, start);
        }

        let big = self.eat_big_suffix();
        self.finish_number(start, NumberLiteral { kind, big })
    }

    fn decimal_number(&mut self, start: Position) -> Token {
        let mut kind = NumberKind::Decimal;
        self.cursor.eat_while(|c| c.is_ascii_digit());

        // `1.` and `1..2` leave the dot for the next token.
        if self.cursor.current() == '.' && self.cursor.peek(1).is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());
            kind = NumberKind::DecimalFraction;
        }
        if self.cursor.current() == 'e' && self.cursor.peek(1).is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());
            kind = NumberKind::Exponent;
        }

        if self.cursor.current() == 'n' && !kind.allows_big_suffix() {
            let suffix_start = self.cursor.position();
            self.cursor.advance();
            let err = LexError::big_suffix_on_non_integer(self.span_from(suffix_start));
            self.cursor.eat_while(is_ident_continue);
            return self.error_token(err, start);
        }

        let big = self.eat_big_suffix();
        self.finish_number(start, NumberLiteral { kind, big })
    }

    fn eat_big_suffix(&mut self) -> bool {
        if self.cursor.current() == 'n' {
            self.cursor.advance();
            true
        } else {
            false
        }
    }

    /// Apply the boundary rule, then build the token.
    ///
    /// On violation the rest of the identifier run is swallowed so the whole
    /// malformed literal becomes one error token.
    fn finish_number(&mut self, start: Position, literal: NumberLiteral) -> Token {
        let next = self.cursor.current();
        if self.cursor.is_eof() || !is_ident_continue(next) {
            return self.token(TokenKind::Number(literal), start);
        }

        let tail_start = self.cursor.position();
        let err = if next.is_ascii_digit() && !literal.big {
            // A decimal digit the base does not allow (`0b102`, `0o78`).
            self.cursor.advance();
            let span = self.span_from(tail_start);
            LexError::invalid_digit_for_radix(span, next, base_name(literal.kind))
        } else {
            self.cursor.eat_while(is_ident_continue);
            LexError::adjacent_identifier(self.span_from(tail_start))
        };
        self.cursor.eat_while(is_ident_continue);
        self.error_token(err, start)
    }
}
