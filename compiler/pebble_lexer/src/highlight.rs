//! Presentation categories for editor tooling.
//!
//! [`category`] is a pure function of the token kind; it is the only thing a
//! syntax highlighter needs from the lexer. [`highlight`] flattens a token
//! stream into ordered, non-overlapping runs, descending into string
//! interpolations so embedded expressions are colored like normal code.

use crate::keywords::Keyword;
use crate::span::Span;
use crate::token::{CommentKind, StringSegment, Token, TokenKind};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HighlightCategory {
    Number,
    String,
    Character,
    /// Control-flow and expression keywords.
    Keyword,
    /// Literal words: `true`, `false`, `self`, ...
    Constant,
    /// Injunction words written without `@`.
    Reserved,
    /// `@`-prefixed declaration words.
    Injunction,
    Identifier,
    Operator,
    Bracket,
    Terminator,
    Comment,
    DocComment,
    /// `#{` and `}` around an interpolation.
    InterpolationDelimiter,
    Invalid,
    Plain,
}

impl HighlightCategory {
    /// TextMate-style scope name.
    pub fn scope(self) -> &'static str {
        match self {
            HighlightCategory::Number => "constant.numeric.pebble",
            HighlightCategory::String => "string.quoted.double.pebble",
            HighlightCategory::Character => "constant.character.pebble",
            HighlightCategory::Keyword => "keyword.control.pebble",
            HighlightCategory::Constant => "constant.language.pebble",
            HighlightCategory::Reserved => "keyword.other.reserved.pebble",
            HighlightCategory::Injunction => "storage.type.injunction.pebble",
            HighlightCategory::Identifier => "variable.other.pebble",
            HighlightCategory::Operator => "keyword.operator.pebble",
            HighlightCategory::Bracket => "punctuation.bracket.pebble",
            HighlightCategory::Terminator => "punctuation.terminator.pebble",
            HighlightCategory::Comment => "comment.pebble",
            HighlightCategory::DocComment => "comment.block.documentation.pebble",
            HighlightCategory::InterpolationDelimiter => {
                "punctuation.section.interpolation.pebble"
            }
            HighlightCategory::Invalid => "invalid.illegal.pebble",
            HighlightCategory::Plain => "source.pebble",
        }
    }
}

/// Presentation category of a token kind.
pub fn category(kind: &TokenKind) -> HighlightCategory {
    match kind {
        TokenKind::Number(_) => HighlightCategory::Number,
        TokenKind::String(_) => HighlightCategory::String,
        TokenKind::Character(_) => HighlightCategory::Character,
        TokenKind::Keyword(keyword) if keyword.is_literal() => HighlightCategory::Constant,
        TokenKind::Keyword(Keyword::Reserved(_)) => HighlightCategory::Reserved,
        TokenKind::Keyword(_) => HighlightCategory::Keyword,
        TokenKind::Injunction(_) => HighlightCategory::Injunction,
        TokenKind::Identifier => HighlightCategory::Identifier,
        TokenKind::Operator(_) => HighlightCategory::Operator,
        TokenKind::Bracket(_) => HighlightCategory::Bracket,
        TokenKind::Terminator(_) => HighlightCategory::Terminator,
        TokenKind::Comment(CommentKind::Doc) => HighlightCategory::DocComment,
        TokenKind::Comment(_) => HighlightCategory::Comment,
        TokenKind::LexError(_) => HighlightCategory::Invalid,
        TokenKind::EndOfInput => HighlightCategory::Plain,
    }
}

/// One colored run of source text.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Highlight {
    pub span: Span,
    pub category: HighlightCategory,
}

/// Flatten tokens into highlight runs in source order.
///
/// Zero-width tokens (`EndOfInput`) produce no run.
pub fn highlight(tokens: &[Token]) -> Vec<Highlight> {
    let mut out = Vec::with_capacity(tokens.len());
    push_tokens(tokens, &mut out);
    out
}

fn push_tokens(tokens: &[Token], out: &mut Vec<Highlight>) {
    for token in tokens {
        match &token.kind {
            TokenKind::String(literal) if literal.has_interpolation() => {
                push_interpolated_string(token.span, &literal.segments, out);
            }
            kind => push_run(out, token.span, category(kind)),
        }
    }
}

/// Split a string around its interpolations: text runs stay `String`, the
/// `#{`/`}` delimiters get their own run, and embedded tokens recurse.
fn push_interpolated_string(span: Span, segments: &[StringSegment], out: &mut Vec<Highlight>) {
    let mut cursor = span.start;
    for segment in segments {
        let StringSegment::Interpolation { tokens, span: region } = segment else {
            continue;
        };
        push_run(out, Span::new(cursor, region.start), HighlightCategory::String);
        let open_end = region.start.advanced_by(2);
        push_run(
            out,
            Span::new(region.start, open_end),
            HighlightCategory::InterpolationDelimiter,
        );
        push_tokens(tokens, out);
        let close_start = region.end.retreated_by(1);
        push_run(
            out,
            Span::new(close_start, region.end),
            HighlightCategory::InterpolationDelimiter,
        );
        cursor = region.end;
    }
    push_run(out, Span::new(cursor, span.end), HighlightCategory::String);
}

fn push_run(out: &mut Vec<Highlight>, span: Span, category: HighlightCategory) {
    if !span.is_empty() {
        out.push(Highlight { span, category });
    }
}
