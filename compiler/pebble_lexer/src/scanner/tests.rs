use super::*;
use crate::token::{NumberKind, NumberLiteral, TokenTag};
use crate::tokenize;
use pretty_assertions::assert_eq;

fn tags(src: &str) -> Vec<TokenTag> {
    tokenize(src).iter().map(Token::tag).collect()
}

fn lexemes(src: &str) -> Vec<String> {
    tokenize(src).iter().map(|t| t.lexeme.clone()).collect()
}

#[test]
fn empty_source_is_just_end_of_input() {
    let tokens = tokenize("");
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is_eof());
    assert_eq!(tokens[0].span, Span::point(Position::START));
}

#[test]
fn whitespace_only_source() {
    let tokens = tokenize(" \t\n  \r\n");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].span.start, Position::new(3, 1, 7));
}

#[test]
fn brackets_and_terminators() {
    assert_eq!(
        tags("( ) [ ] { } ; ,"),
        vec![
            TokenTag::Bracket,
            TokenTag::Bracket,
            TokenTag::Bracket,
            TokenTag::Bracket,
            TokenTag::Bracket,
            TokenTag::Bracket,
            TokenTag::Terminator,
            TokenTag::Terminator,
            TokenTag::EndOfInput,
        ]
    );
    let tokens = tokenize("};");
    assert_eq!(tokens[0].kind, TokenKind::Bracket(Bracket::RightBrace));
    assert_eq!(tokens[1].kind, TokenKind::Terminator(Terminator::Semicolon));
}

#[test]
fn operators_use_maximal_munch() {
    assert_eq!(
        lexemes("a...b &&= c->d ** e != f"),
        vec!["a", "...", "b", "&&=", "c", "->", "d", "**", "e", "!=", "f", ""]
    );
    assert_eq!(lexemes("x=>y"), vec!["x", "=>", "y", ""]);
    assert_eq!(lexemes("a===b"), vec!["a", "==", "=", "b", ""]);
}

#[test]
fn slash_is_operator_unless_comment() {
    let tokens = tokenize("a / b");
    assert_eq!(tokens[1].kind, TokenKind::Operator(Operator::Slash));
    let tokens = tokenize("a /= b");
    assert_eq!(tokens[1].kind, TokenKind::Operator(Operator::SlashAssign));
}

#[test]
fn unexpected_character_recovers() {
    let tokens = tokenize("a $ b");
    assert_eq!(
        tags("a $ b"),
        vec![
            TokenTag::Identifier,
            TokenTag::LexError,
            TokenTag::Identifier,
            TokenTag::EndOfInput
        ]
    );
    assert_eq!(tokens[1].lexeme, "$");
}

#[test]
fn multiple_errors_in_one_pass() {
    let tokens = tokenize("$ 0b2 @nope 'ab' `");
    assert_eq!(tokens.errors().len(), 5);
    assert!(tokens[tokens.len() - 1].is_eof());
}

#[test]
fn interior_nul_is_unexpected() {
    let tokens = tokenize("a\0b");
    assert_eq!(
        tokens[1].error().map(|e| e.kind.clone()),
        Some(crate::lex_error::LexErrorKind::UnexpectedCharacter { found: '\0' })
    );
    assert_eq!(tokens[2].lexeme, "b");
}

#[test]
fn byte_order_mark_is_skipped() {
    let tokens = tokenize("\u{FEFF}x");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].span.start.offset, 3);
}

#[test]
fn positions_track_lines_and_columns() {
    let tokens = tokenize("@let x\n  = 0x1A;");
    let starts: Vec<_> = tokens
        .iter()
        .map(|t| (t.span.start.line, t.span.start.column))
        .collect();
    assert_eq!(starts, vec![(1, 1), (1, 6), (2, 3), (2, 5), (2, 9), (2, 10)]);
    assert_eq!(
        tokens[3].kind,
        TokenKind::Number(NumberLiteral {
            kind: NumberKind::Hexadecimal,
            big: false
        })
    );
}

#[test]
fn end_of_input_repeats_after_end() {
    let mut tokenizer = Tokenizer::new("x");
    assert_eq!(tokenizer.state(), ScanState::Scanning);
    assert_eq!(tokenizer.next_token().tag(), TokenTag::Identifier);
    assert!(tokenizer.next_token().is_eof());
    assert_eq!(tokenizer.state(), ScanState::AtEnd);
    assert!(tokenizer.next_token().is_eof());
}

#[test]
fn iterator_yields_end_of_input_once() {
    let tokens: Vec<Token> = Tokenizer::new("a b").collect();
    assert_eq!(tokens.len(), 3);
    assert!(tokens[2].is_eof());

    let mut tokenizer = Tokenizer::new("");
    assert!(tokenizer.next().is_some_and(|t| t.is_eof()));
    assert!(tokenizer.next().is_none());
    assert!(tokenizer.next().is_none());
}

#[test]
fn callers_may_stop_early() {
    let mut tokenizer = Tokenizer::new("alpha beta gamma");
    let first = tokenizer.next_token();
    assert_eq!(first.lexeme, "alpha");
    assert_eq!(tokenizer.position().offset, 5);
    assert_eq!(tokenizer.state(), ScanState::Scanning);
}

#[test]
fn fatal_error_enters_errored_then_ends() {
    let config = LexerConfig::default().with_max_interpolation_depth(0);
    let mut tokenizer = Tokenizer::with_config("a \"#{b}\" c d", config);
    assert_eq!(tokenizer.next_token().lexeme, "a");
    let fatal = tokenizer.next_token();
    assert!(fatal.error().is_some_and(LexError::is_fatal));
    assert_eq!(tokenizer.state(), ScanState::Errored);

    let end = tokenizer.next_token();
    assert!(end.is_eof());
    assert_eq!(end.span.start.offset, 12);
    assert_eq!(tokenizer.state(), ScanState::AtEnd);
}

#[test]
fn rescanning_is_identical() {
    let src = "@function add(a, b) {\n  ## doc\n  return \"#{a + b}\" // sum\n}";
    assert_eq!(tokenize(src), tokenize(src));
}
