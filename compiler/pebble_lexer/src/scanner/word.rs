//! Identifiers, keywords and `@` injunctions.

use super::{is_ident_continue, Tokenizer};
use crate::keywords::{Injunction, Keyword};
use crate::lex_error::LexError;
use crate::span::Position;
use crate::token::{Token, TokenKind};

impl Tokenizer<'_> {
    /// Scan an identifier-shaped word and classify it.
    pub(super) fn word(&mut self, start: Position) -> Token {
        let begin = self.cursor.offset();
        self.cursor.eat_while(is_ident_continue);
        let kind = match Keyword::lookup(self.cursor.slice_from(begin)) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier,
        };
        self.token(kind, start)
    }

    /// Scan `@name`. Only names in the injunction table are accepted.
    pub(super) fn injunction(&mut self, start: Position) -> Token {
        self.cursor.advance();
        let name_start = self.cursor.offset();
        self.cursor.eat_while(is_ident_continue);
        let name = self.cursor.slice_from(name_start);

        if name.is_empty() {
            let err = LexError::unexpected_character(self.span_from(start), '@');
            return self.error_token(err, start);
        }
        match Injunction::lookup(name) {
            Some(injunction) => self.token(TokenKind::Injunction(injunction), start),
            None => {
                let err = LexError::unknown_injunction(self.span_from(start), name);
                self.error_token(err, start)
            }
        }
    }
}
