//! String literals and `#{ ... }` interpolation.

use std::mem;

use tracing::debug;

use super::{ScanState, Tokenizer};
use crate::escape::{decode_escape, EscapeError};
use crate::lex_error::{LexError, LexErrorContext};
use crate::span::{Position, Span};
use crate::stack::ensure_sufficient_stack;
use crate::token::{StringLiteral, StringSegment, Token, TokenKind};

impl Tokenizer<'_> {
    /// Scan a string literal starting at its opening `"`.
    ///
    /// Strings may span lines. `Err` only carries a fatal error raised by a
    /// nested interpolation.
    pub(super) fn string(&mut self, start: Position) -> Result<Token, LexError> {
        let quote = Span::new(start, start.advanced_by(1));
        self.cursor.advance();

        let mut segments = Vec::new();
        let mut text = String::new();
        let mut text_start = self.cursor.position();
        // First undecodable escape; the string is still scanned to its end.
        let mut invalid_escape: Option<LexError> = None;

        loop {
            if self.cursor.is_eof() {
                return Ok(self.unterminated_string(start, quote));
            }
            match self.cursor.current() {
                '"' => break,
                '\\' => {
                    let escape_start = self.cursor.position();
                    self.cursor.advance();
                    match decode_escape(&mut self.cursor) {
                        Ok(c) => text.push(c),
                        Err(EscapeError::Dangling) => {
                            return Ok(self.unterminated_string(start, quote));
                        }
                        Err(err) => {
                            if invalid_escape.is_none() {
                                let span = self.span_from(escape_start);
                                let context = LexErrorContext::InsideString { start: quote };
                                invalid_escape =
                                    Some(LexError::invalid_escape(span, err).with_context(context));
                            }
                        }
                    }
                }
                '#' if self.cursor.peek(1) == '{' => {
                    let marker = self.cursor.position();
                    if !text.is_empty() {
                        segments.push(StringSegment::Text {
                            value: mem::take(&mut text),
                            span: Span::new(text_start, marker),
                        });
                    }
                    self.cursor.advance_n(2);
                    let Some(tokens) = self.interpolation(marker)? else {
                        return Ok(self.unterminated_string(start, quote));
                    };
                    segments.push(StringSegment::Interpolation {
                        tokens,
                        span: self.span_from(marker),
                    });
                    text_start = self.cursor.position();
                }
                c => {
                    text.push(c);
                    self.cursor.advance();
                }
            }
        }

        let closing = self.cursor.position();
        if !text.is_empty() || segments.is_empty() {
            segments.push(StringSegment::Text {
                value: text,
                span: Span::new(text_start, closing),
            });
        }
        self.cursor.advance();

        if let Some(err) = invalid_escape {
            return Ok(self.error_token(err, start));
        }
        Ok(self.token(TokenKind::String(StringLiteral { segments }), start))
    }

    /// Scan one interpolation body with a sub-tokenizer, starting after `#{`.
    ///
    /// Returns `Ok(None)` if the input ends before the closing `}`.
    fn interpolation(&mut self, marker: Position) -> Result<Option<Vec<Token>>, LexError> {
        let depth = self.depth() + 1;
        let limit = self.config.interpolation_depth_limit();
        if depth > limit {
            let span = Span::new(marker, marker.advanced_by(2));
            return Err(LexError::interpolation_too_deep(span, limit));
        }

        debug!(depth, at = %marker, "enter interpolation");
        let mut sub = Tokenizer {
            cursor: self.cursor,
            config: self.config,
            state: ScanState::InInterpolation(depth),
            open_braces: 0,
        };
        let body = ensure_sufficient_stack(|| sub.scan_interpolation_body());
        self.cursor = sub.cursor;
        debug!(depth, closed = matches!(body, Ok(Some(_))), "leave interpolation");
        body
    }

    /// Consume the rest of the input as one unterminated string.
    #[cold]
    fn unterminated_string(&mut self, start: Position, quote: Span) -> Token {
        self.cursor.eat_to_end();
        self.error_token(LexError::unterminated_string(quote), start)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use crate::config::LexerConfig;
    use crate::lex_error::LexErrorKind;
    use crate::token::{StringSegment, Token, TokenKind, TokenTag};
    use crate::{tokenize, tokenize_with};
    use pretty_assertions::assert_eq;

    fn segments(token: &Token) -> &[StringSegment] {
        match &token.kind {
            TokenKind::String(literal) => &literal.segments,
            other => panic!("expected a string, got {other:?}"),
        }
    }

    fn text(segment: &StringSegment) -> &str {
        match segment {
            StringSegment::Text { value, .. } => value,
            StringSegment::Interpolation { .. } => panic!("expected text"),
        }
    }

    fn inner_tags(segment: &StringSegment) -> Vec<TokenTag> {
        match segment {
            StringSegment::Interpolation { tokens, .. } => tokens.iter().map(Token::tag).collect(),
            StringSegment::Text { .. } => panic!("expected interpolation"),
        }
    }

    #[test]
    fn plain_string_has_one_text_segment() {
        let tokens = tokenize(r#""hello world""#);
        let segs = segments(&tokens[0]);
        assert_eq!(segs.len(), 1);
        assert_eq!(text(&segs[0]), "hello world");
        assert_eq!(tokens[0].lexeme, r#""hello world""#);
    }

    #[test]
    fn empty_string_has_one_empty_segment() {
        let tokens = tokenize(r#""""#);
        let segs = segments(&tokens[0]);
        assert_eq!(segs.len(), 1);
        assert_eq!(text(&segs[0]), "");
    }

    #[test]
    fn escapes_are_decoded() {
        let tokens = tokenize(r#""a\n\"b\"\x41\u{1F600}\101""#);
        assert_eq!(text(&segments(&tokens[0])[0]), "a\n\"b\"A😀A");
    }

    #[test]
    fn interpolation_splits_segments() {
        let tokens = tokenize(r#""a#{1+2}b""#);
        assert_eq!(tokens.len(), 2);
        let segs = segments(&tokens[0]);
        assert_eq!(segs.len(), 3);
        assert_eq!(text(&segs[0]), "a");
        assert_eq!(
            inner_tags(&segs[1]),
            vec![TokenTag::Number, TokenTag::Operator, TokenTag::Number]
        );
        assert_eq!(text(&segs[2]), "b");
        assert_eq!(segs[1].span().to_range(), 2..8);
    }

    #[test]
    fn interpolation_positions_are_absolute() {
        let tokens = tokenize("x = \"n: #{count}\"");
        let segs = segments(&tokens[2]);
        let StringSegment::Interpolation { tokens: inner, .. } = &segs[1] else {
            panic!("expected interpolation");
        };
        assert_eq!(inner[0].lexeme, "count");
        assert_eq!(inner[0].span.start.offset, 10);
        assert_eq!(inner[0].span.start.column, 11);
    }

    #[test]
    fn inner_braces_are_depth_counted() {
        let tokens = tokenize(r##""#{ { a } }!""##);
        let segs = segments(&tokens[0]);
        assert_eq!(
            inner_tags(&segs[0]),
            vec![TokenTag::Bracket, TokenTag::Identifier, TokenTag::Bracket]
        );
        assert_eq!(text(&segs[1]), "!");
    }

    #[test]
    fn nested_strings_inside_interpolation() {
        let tokens = tokenize(r#""outer #{ "inner #{x}" } end""#);
        assert_eq!(tokens.len(), 2);
        let segs = segments(&tokens[0]);
        assert_eq!(segs.len(), 3);
        let StringSegment::Interpolation { tokens: inner, .. } = &segs[1] else {
            panic!("expected interpolation");
        };
        assert_eq!(inner.len(), 1);
        let inner_segs = segments(&inner[0]);
        assert_eq!(text(&inner_segs[0]), "inner ");
        assert_eq!(inner_tags(&inner_segs[1]), vec![TokenTag::Identifier]);
    }

    #[test]
    fn escaped_hash_is_not_interpolation() {
        let tokens = tokenize(r#""\#{x}""#);
        let segs = segments(&tokens[0]);
        assert_eq!(segs.len(), 1);
        assert_eq!(text(&segs[0]), "#{x}");
    }

    #[test]
    fn strings_may_span_lines() {
        let tokens = tokenize("\"a\nb\" c");
        assert_eq!(text(&segments(&tokens[0])[0]), "a\nb");
        assert_eq!(tokens[1].span.start.line, 2);
    }

    #[test]
    fn unterminated_string_anchors_at_quote() {
        let tokens = tokenize("x \"unterminated");
        assert_eq!(tokens.len(), 3);
        let err = tokens[1].error().unwrap();
        assert_eq!(err.kind, LexErrorKind::UnterminatedString);
        assert_eq!(err.span.to_range(), 2..3);
        assert_eq!(tokens[1].lexeme, "\"unterminated");
        assert!(tokens[2].is_eof());
    }

    #[test]
    fn unclosed_interpolation_is_unterminated_string() {
        let tokens = tokenize(r#""a #{ b "#);
        let err = tokens[0].error().unwrap();
        assert_eq!(err.kind, LexErrorKind::UnterminatedString);
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn trailing_backslash_is_unterminated_string() {
        let tokens = tokenize("\"abc\\");
        assert_eq!(
            tokens[0].error().unwrap().kind,
            LexErrorKind::UnterminatedString
        );
    }

    #[test]
    fn invalid_escape_covers_whole_string() {
        let tokens = tokenize(r#""a\u{D800}b" c"#);
        let err = tokens[0].error().unwrap();
        assert_eq!(err.kind, LexErrorKind::InvalidEscape);
        assert_eq!(err.span.to_range(), 2..10);
        assert_eq!(tokens[0].lexeme, r#""a\u{D800}b""#);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
    }

    #[test]
    fn errors_inside_interpolation_stay_inside() {
        let tokens = tokenize(r##""#{ $ }""##);
        assert_eq!(tokens[0].tag(), TokenTag::String);
        assert_eq!(tokens.errors().len(), 1);
    }

    #[test]
    fn depth_limit_is_fatal() {
        let config = LexerConfig::default().with_max_interpolation_depth(1);
        let ok = tokenize_with(r##""#{ 1 }""##, &config);
        assert!(!ok.has_errors());

        let tokens = tokenize_with(r##""#{ "#{ 1 }" }" tail"##, &config);
        let tags: Vec<_> = tokens.iter().map(Token::tag).collect();
        assert_eq!(tags, vec![TokenTag::LexError, TokenTag::EndOfInput]);
        let err = tokens[0].error().unwrap();
        assert_eq!(err.kind, LexErrorKind::InterpolationTooDeep { limit: 1 });
        assert_eq!(tokens[0].lexeme, "#{");
        assert_eq!(tokens[1].span.start.offset, 20);
    }
}
