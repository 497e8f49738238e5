//! Comments: `##` doc comments, `//` line comments, `/* */` block comments.

use super::Tokenizer;
use crate::lex_error::LexError;
use crate::span::{Position, Span};
use crate::token::{CommentKind, Token, TokenKind};

impl Tokenizer<'_> {
    /// `##` is a doc comment when it is the first thing on its line, and a
    /// line comment otherwise.
    pub(super) fn hash_comment(&mut self, start: Position) -> Token {
        let kind = if self.cursor.is_at_line_start() {
            CommentKind::Doc
        } else {
            CommentKind::Line
        };
        self.cursor.eat_until_newline();
        self.token(TokenKind::Comment(kind), start)
    }

    pub(super) fn line_comment(&mut self, start: Position) -> Token {
        self.cursor.eat_until_newline();
        self.token(TokenKind::Comment(CommentKind::Line), start)
    }

    /// Block comments do not nest: the first `*/` closes them.
    pub(super) fn block_comment(&mut self, start: Position) -> Token {
        self.cursor.advance_n(2);
        if self.cursor.eat_through("*/") {
            return self.token(TokenKind::Comment(CommentKind::Block), start);
        }
        let opener = Span::new(start, start.advanced_by(2));
        self.error_token(LexError::unterminated_comment(opener), start)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use crate::config::{CommentMode, LexerConfig};
    use crate::lex_error::LexErrorKind;
    use crate::token::{CommentKind, TokenKind, TokenTag};
    use crate::{tokenize, tokenize_with};
    use pretty_assertions::assert_eq;

    #[test]
    fn doc_comment_at_line_start() {
        let tokens = tokenize("  ## Adds numbers.\n@function add");
        assert_eq!(tokens[0].kind, TokenKind::Comment(CommentKind::Doc));
        assert_eq!(tokens[0].lexeme, "## Adds numbers.");
        assert_eq!(tokens[1].lexeme, "@function");
    }

    #[test]
    fn doc_comment_after_byte_order_mark() {
        let tokens = tokenize("\u{FEFF}## doc");
        assert_eq!(tokens[0].kind, TokenKind::Comment(CommentKind::Doc));
        assert_eq!(tokens[0].lexeme, "## doc");
    }

    #[test]
    fn crlf_is_not_part_of_comment() {
        let tokens = tokenize("## doc\r\nx // note\r\n");
        assert_eq!(tokens[0].lexeme, "## doc");
        assert_eq!(tokens[1].lexeme, "x");
        assert_eq!(tokens[1].span.start.line, 2);
        assert_eq!(tokens[1].span.start.column, 1);
        assert_eq!(tokens[2].lexeme, "// note");
        assert!(tokens[3].is_eof());
    }

    #[test]
    fn hash_pair_mid_line_is_line_comment() {
        let tokens = tokenize("x ## trailing");
        assert_eq!(tokens[1].kind, TokenKind::Comment(CommentKind::Line));
    }

    #[test]
    fn single_hash_is_unexpected() {
        let tokens = tokenize("# nope");
        assert_eq!(
            tokens[0].error().unwrap().kind,
            LexErrorKind::UnexpectedCharacter { found: '#' }
        );
    }

    #[test]
    fn line_comment_excludes_newline() {
        let tokens = tokenize("a // note\nb");
        assert_eq!(tokens[1].lexeme, "// note");
        assert_eq!(tokens[2].lexeme, "b");
        assert_eq!(tokens[2].span.start.line, 2);
    }

    #[test]
    fn block_comment_does_not_nest() {
        let tokens = tokenize("/* outer /* inner */ still in comment */");
        assert_eq!(tokens[0].lexeme, "/* outer /* inner */");
        assert_eq!(tokens[0].kind, TokenKind::Comment(CommentKind::Block));
        let rest: Vec<_> = tokens.iter().skip(1).map(|t| t.lexeme.as_str()).collect();
        assert_eq!(rest, ["still", "in", "comment", "*", "/", ""]);
    }

    #[test]
    fn block_comment_spans_lines() {
        let tokens = tokenize("/* a\n b */ c");
        assert_eq!(tokens[1].span.start.line, 2);
        assert_eq!(tokens[1].span.start.column, 7);
    }

    #[test]
    fn unterminated_block_comment() {
        let tokens = tokenize("x /* never closed\n");
        let err = tokens[1].error().unwrap();
        assert_eq!(err.kind, LexErrorKind::UnterminatedComment);
        assert_eq!(err.span.to_range(), 2..4);
        assert_eq!(tokens[1].lexeme, "/* never closed\n");
        assert!(tokens[2].is_eof());
    }

    #[test]
    fn doc_only_mode_drops_other_comments() {
        let config = LexerConfig::default().with_comments(CommentMode::DocOnly);
        let tokens = tokenize_with("## doc\n// line\n/* block */ x", &config);
        let tags: Vec<_> = tokens.iter().map(|t| t.tag()).collect();
        assert_eq!(
            tags,
            vec![TokenTag::Comment, TokenTag::Identifier, TokenTag::EndOfInput]
        );
    }

    #[test]
    fn doc_only_mode_keeps_comment_errors() {
        let config = LexerConfig::default().with_comments(CommentMode::DocOnly);
        let tokens = tokenize_with("/* open", &config);
        assert!(tokens.has_errors());
    }
}
