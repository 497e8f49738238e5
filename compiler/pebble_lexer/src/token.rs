//! Token types.
//!
//! A [`Token`] is an owned value: kind, raw lexeme and span. Tokens never
//! borrow from the source or the cursor, so they can be handed to a parser
//! (or across threads) after the tokenizer is gone.

mod list;

use std::fmt;

pub use list::TokenList;

use crate::keywords::{Injunction, Keyword};
use crate::lex_error::LexError;
use crate::operator::Operator;
use crate::span::Span;

/// A single token.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    pub kind: TokenKind,
    /// Raw source text. Equal to `source[span.to_range()]`.
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    #[inline]
    pub fn tag(&self) -> TokenTag {
        self.kind.tag()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfInput)
    }

    #[inline]
    pub fn is_comment(&self) -> bool {
        matches!(self.kind, TokenKind::Comment(_))
    }

    /// The lexical error carried by this token, if any.
    #[inline]
    pub fn error(&self) -> Option<&LexError> {
        match &self.kind {
            TokenKind::LexError(err) => Some(err),
            _ => None,
        }
    }

    /// Comment text with its markers stripped (`// x` gives ` x`).
    pub fn comment_body(&self) -> Option<&str> {
        let TokenKind::Comment(kind) = self.kind else {
            return None;
        };
        let body = self.lexeme.get(2..)?;
        Some(match kind {
            CommentKind::Block => body.strip_suffix("*/").unwrap_or(body),
            CommentKind::Doc | CommentKind::Line => body,
        })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} @ {}", self.tag(), self.lexeme, self.span)
    }
}

/// What a token is, with its sub-tag payload.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    Number(NumberLiteral),
    String(StringLiteral),
    /// A character literal with its escape already decoded.
    Character(char),
    Bracket(Bracket),
    Keyword(Keyword),
    Identifier,
    Injunction(Injunction),
    Terminator(Terminator),
    Operator(Operator),
    Comment(CommentKind),
    EndOfInput,
    LexError(LexError),
}

impl TokenKind {
    pub fn tag(&self) -> TokenTag {
        match self {
            TokenKind::Number(_) => TokenTag::Number,
            TokenKind::String(_) => TokenTag::String,
            TokenKind::Character(_) => TokenTag::Character,
            TokenKind::Bracket(_) => TokenTag::Bracket,
            TokenKind::Keyword(_) => TokenTag::Keyword,
            TokenKind::Identifier => TokenTag::Identifier,
            TokenKind::Injunction(_) => TokenTag::Injunction,
            TokenKind::Terminator(_) => TokenTag::Terminator,
            TokenKind::Operator(_) => TokenTag::Operator,
            TokenKind::Comment(_) => TokenTag::Comment,
            TokenKind::EndOfInput => TokenTag::EndOfInput,
            TokenKind::LexError(_) => TokenTag::LexError,
        }
    }
}

/// Fieldless discriminant of [`TokenKind`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenTag {
    Number,
    String,
    Character,
    Bracket,
    Keyword,
    Identifier,
    Injunction,
    Terminator,
    Operator,
    Comment,
    EndOfInput,
    LexError,
}

impl TokenTag {
    pub fn name(self) -> &'static str {
        match self {
            TokenTag::Number => "Number",
            TokenTag::String => "String",
            TokenTag::Character => "Character",
            TokenTag::Bracket => "Bracket",
            TokenTag::Keyword => "Keyword",
            TokenTag::Identifier => "Identifier",
            TokenTag::Injunction => "Injunction",
            TokenTag::Terminator => "Terminator",
            TokenTag::Operator => "Operator",
            TokenTag::Comment => "Comment",
            TokenTag::EndOfInput => "EndOfInput",
            TokenTag::LexError => "LexError",
        }
    }
}

impl fmt::Display for TokenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Numeric literal form.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NumberKind {
    Decimal,
    Hexadecimal,
    Octal,
    Binary,
    Exponent,
    DecimalFraction,
}

impl NumberKind {
    /// The radix of the literal's digits.
    pub fn radix(self) -> u32 {
        match self {
            NumberKind::Hexadecimal => 16,
            NumberKind::Octal => 8,
            NumberKind::Binary => 2,
            NumberKind::Decimal | NumberKind::Exponent | NumberKind::DecimalFraction => 10,
        }
    }

    /// Whether the `n` suffix may follow this form.
    pub fn allows_big_suffix(self) -> bool {
        !matches!(self, NumberKind::Exponent | NumberKind::DecimalFraction)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NumberLiteral {
    pub kind: NumberKind,
    /// Trailing `n` big-literal suffix.
    pub big: bool,
}

/// A string literal broken into text runs and interpolations.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StringLiteral {
    pub segments: Vec<StringSegment>,
}

impl StringLiteral {
    /// The decoded text, if the string has no interpolations.
    pub fn as_plain_text(&self) -> Option<&str> {
        match self.segments.as_slice() {
            [StringSegment::Text { value, .. }] => Some(value),
            _ => None,
        }
    }

    pub fn has_interpolation(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, StringSegment::Interpolation { .. }))
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StringSegment {
    /// Literal text with escapes decoded. `span` covers the raw source text.
    Text { value: String, span: Span },
    /// The tokens of one `#{ ... }` region. `span` runs from `#` through `}`.
    Interpolation { tokens: Vec<Token>, span: Span },
}

impl StringSegment {
    pub fn span(&self) -> Span {
        match self {
            StringSegment::Text { span, .. } | StringSegment::Interpolation { span, .. } => *span,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Bracket {
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    LeftParen,
    RightParen,
}

impl Bracket {
    pub fn from_char(c: char) -> Option<Bracket> {
        match c {
            '{' => Some(Bracket::LeftBrace),
            '}' => Some(Bracket::RightBrace),
            '[' => Some(Bracket::LeftBracket),
            ']' => Some(Bracket::RightBracket),
            '(' => Some(Bracket::LeftParen),
            ')' => Some(Bracket::RightParen),
            _ => None,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(
            self,
            Bracket::LeftBrace | Bracket::LeftBracket | Bracket::LeftParen
        )
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Terminator {
    Semicolon,
    Comma,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CommentKind {
    /// `##` at the start of a line.
    Doc,
    /// `//` to end of line.
    Line,
    /// `/* ... */`, non-nesting.
    Block,
}
