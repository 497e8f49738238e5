//! The tokenizer.
//!
//! A pull-based state machine: each [`Tokenizer::next_token`] call skips
//! whitespace, dispatches on the current character to one of the focused
//! scanning methods, and returns exactly one token. Lexical errors come back
//! as `LexError` tokens so one pass can report several of them.
//!
//! String interpolation re-enters the tokenizer: the string scanner starts a
//! sub-tokenizer on a copy of the cursor, lets it scan the `#{ ... }` body,
//! then adopts the copy's position. Positions stay absolute throughout.
//!
//! Scanning methods live in submodules grouped by token family:
//! - `number`: numeric literals
//! - `string`: string literals and interpolation
//! - `character`: character literals
//! - `comment`: doc, line and block comments
//! - `word`: identifiers, keywords and injunctions

mod character;
mod comment;
mod number;
mod string;
mod word;

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::config::{CommentMode, LexerConfig};
use crate::cursor::{is_whitespace, Cursor};
use crate::lex_error::LexError;
use crate::operator::Operator;
use crate::span::{Position, Span};
use crate::token::{Bracket, CommentKind, Terminator, Token, TokenKind};

/// Where a tokenizer is in its lifecycle.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ScanState {
    /// Scanning a top-level source unit.
    Scanning,
    /// Scanning the body of an interpolation region at this depth.
    InInterpolation(usize),
    /// `EndOfInput` has been emitted.
    AtEnd,
    /// A fatal error was emitted; only `EndOfInput` remains.
    Errored,
}

/// Identifier start: Unicode alphabetic or `_`.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Identifier continuation: Unicode alphanumeric or `_`.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Tokenizer over one source unit.
#[derive(Clone, Debug)]
pub struct Tokenizer<'src> {
    cursor: Cursor<'src>,
    config: LexerConfig,
    state: ScanState,
    /// Unclosed `{` inside the current interpolation body.
    open_braces: usize,
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    pub fn with_config(source: &'src str, config: LexerConfig) -> Self {
        Tokenizer {
            cursor: Cursor::new(source),
            config,
            state: ScanState::Scanning,
            open_braces: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Position of the next unscanned character.
    #[inline]
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    #[inline]
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Produce the next token.
    ///
    /// After the stream has ended this keeps returning `EndOfInput`.
    pub fn next_token(&mut self) -> Token {
        match self.state {
            ScanState::AtEnd => return self.end_of_input(),
            ScanState::Errored => {
                self.cursor.eat_to_end();
                self.state = ScanState::AtEnd;
                return self.end_of_input();
            }
            ScanState::Scanning | ScanState::InInterpolation(_) => {}
        }

        loop {
            self.skip_whitespace();
            if self.cursor.is_eof() {
                self.state = ScanState::AtEnd;
                return self.end_of_input();
            }
            match self.scan_token() {
                Ok(token) if self.discards(&token) => {}
                Ok(token) => {
                    trace!(tag = %token.tag(), span = %token.span, "token");
                    return token;
                }
                Err(fatal) => {
                    debug!(kind = %fatal.kind, span = %fatal.span, "fatal lex error");
                    self.state = ScanState::Errored;
                    return self.fatal_token(fatal);
                }
            }
        }
    }

    /// Scan one token at the current (non-whitespace, non-EOF) character.
    ///
    /// `Err` is reserved for fatal errors; everything recoverable is returned
    /// as a `LexError` token.
    fn scan_token(&mut self) -> Result<Token, LexError> {
        let start = self.cursor.position();
        let c = self.cursor.current();
        let token = match c {
            '"' => return self.string(start),
            '\'' => self.character(start),
            '@' => self.injunction(start),
            '#' if self.cursor.peek(1) == '#' => self.hash_comment(start),
            '/' if self.cursor.peek(1) == '/' => self.line_comment(start),
            '/' if self.cursor.peek(1) == '*' => self.block_comment(start),
            '0'..='9' => self.number(start),
            c if is_ident_start(c) => self.word(start),
            ';' => self.single(start, TokenKind::Terminator(Terminator::Semicolon)),
            ',' => self.single(start, TokenKind::Terminator(Terminator::Comma)),
            c if Operator::is_operator_char(c) => self.operator(start, c),
            c => match Bracket::from_char(c) {
                Some(bracket) => self.bracket(start, bracket),
                None => self.unexpected(start, c),
            },
        };
        Ok(token)
    }

    /// Scan an interpolation body through its closing `}`.
    ///
    /// Returns `Ok(None)` if the input ends before the region closes.
    fn scan_interpolation_body(&mut self) -> Result<Option<Vec<Token>>, LexError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            if self.cursor.is_eof() {
                return Ok(None);
            }
            if self.cursor.current() == '}' && self.open_braces == 0 {
                self.cursor.advance();
                return Ok(Some(tokens));
            }
            let token = self.scan_token()?;
            if !self.discards(&token) {
                tokens.push(token);
            }
        }
    }

    /// Interpolation depth of this tokenizer (0 at the top level).
    #[inline]
    fn depth(&self) -> usize {
        match self.state {
            ScanState::InInterpolation(depth) => depth,
            _ => 0,
        }
    }

    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(is_whitespace);
    }

    fn discards(&self, token: &Token) -> bool {
        self.config.comments == CommentMode::DocOnly
            && matches!(
                token.kind,
                TokenKind::Comment(CommentKind::Line | CommentKind::Block)
            )
    }

    /// Span from `start` to the current position.
    #[inline]
    fn span_from(&self, start: Position) -> Span {
        Span::new(start, self.cursor.position())
    }

    /// Build a token covering `start` to the current position.
    #[inline]
    fn token(&self, kind: TokenKind, start: Position) -> Token {
        let lexeme = self.cursor.slice_from(start.offset as usize);
        Token::new(kind, lexeme, self.span_from(start))
    }

    /// Build an error token covering `start` to the current position.
    ///
    /// The error's own span may be narrower than the token.
    #[cold]
    fn error_token(&self, err: LexError, start: Position) -> Token {
        debug!(kind = %err.kind, span = %err.span, "lex error");
        self.token(TokenKind::LexError(err), start)
    }

    /// The token for a fatal error, covering just the error's span.
    #[cold]
    fn fatal_token(&self, err: LexError) -> Token {
        let lexeme = self
            .cursor
            .source()
            .get(err.span.to_range())
            .unwrap_or_default();
        let span = err.span;
        Token::new(TokenKind::LexError(err), lexeme, span)
    }

    fn end_of_input(&self) -> Token {
        Token::new(
            TokenKind::EndOfInput,
            "",
            Span::point(self.cursor.position()),
        )
    }

    fn single(&mut self, start: Position, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.token(kind, start)
    }

    fn bracket(&mut self, start: Position, bracket: Bracket) -> Token {
        if matches!(self.state, ScanState::InInterpolation(_)) {
            match bracket {
                Bracket::LeftBrace => self.open_braces += 1,
                Bracket::RightBrace => self.open_braces = self.open_braces.saturating_sub(1),
                _ => {}
            }
        }
        self.single(start, TokenKind::Bracket(bracket))
    }

    fn operator(&mut self, start: Position, c: char) -> Token {
        match Operator::longest_prefix(self.cursor.rest()) {
            Some((op, len)) => {
                // Operator lexemes are ASCII, so bytes == chars.
                self.cursor.advance_n(len);
                self.token(TokenKind::Operator(op), start)
            }
            None => self.unexpected(start, c),
        }
    }

    #[cold]
    fn unexpected(&mut self, start: Position, c: char) -> Token {
        self.cursor.advance();
        let err = LexError::unexpected_character(self.span_from(start), c);
        self.error_token(err, start)
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    /// Yields every token including the final `EndOfInput`, then `None`.
    fn next(&mut self) -> Option<Token> {
        if self.state == ScanState::AtEnd {
            return None;
        }
        Some(self.next_token())
    }
}

impl FusedIterator for Tokenizer<'_> {}

#[cfg(test)]
mod tests;
