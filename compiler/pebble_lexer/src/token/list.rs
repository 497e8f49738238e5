//! Owned token sequence handed from the lexer to its consumers.

use std::fmt;
use std::ops::Index;

use super::{StringSegment, Token, TokenKind, TokenTag};
use crate::lex_error::LexError;

/// A list of tokens, terminated by exactly one `EndOfInput` when produced by
/// the tokenizer.
///
/// Keeps a parallel `tags` array so consumers can dispatch on
/// `tags[i] == tokens[i].tag()` without touching the full `TokenKind`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
    tags: Vec<TokenTag>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList {
            tokens: Vec::new(),
            tags: Vec::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
            tags: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn from_vec(tokens: Vec<Token>) -> Self {
        let tags = tokens.iter().map(Token::tag).collect();
        TokenList { tokens, tags }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tags.push(token.tag());
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Tag of the token at `index`.
    #[inline]
    pub fn tag(&self, index: usize) -> Option<TokenTag> {
        self.tags.get(index).copied()
    }

    #[inline]
    pub fn tags(&self) -> &[TokenTag] {
        &self.tags
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }

    /// Every lexical error, including those inside string interpolations,
    /// in source order.
    pub fn errors(&self) -> Vec<&LexError> {
        let mut errors = Vec::new();
        collect_errors(&self.tokens, &mut errors);
        errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    /// Comment tokens at the top level.
    pub fn comments(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|token| token.is_comment())
    }

    /// Everything except comments: the stream a parser consumes.
    pub fn significant(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|token| !token.is_comment())
    }
}

fn collect_errors<'a>(tokens: &'a [Token], out: &mut Vec<&'a LexError>) {
    for token in tokens {
        match &token.kind {
            TokenKind::LexError(err) => out.push(err),
            TokenKind::String(literal) => {
                for segment in &literal.segments {
                    if let StringSegment::Interpolation { tokens, .. } = segment {
                        collect_errors(tokens, out);
                    }
                }
            }
            _ => {}
        }
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.tokens).finish()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for TokenList {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenList::from_vec(iter.into_iter().collect())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TokenList {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.tokens.serialize(serializer)
    }
}
