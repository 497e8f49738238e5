//! Lexer for the Pebble programming language.
//!
//! Turns source text into an ordered [`TokenList`] terminated by exactly one
//! `EndOfInput` token. Lexical errors are tokens too: scanning recovers and
//! keeps going, except when string interpolation nests deeper than
//! [`LexerConfig::max_interpolation_depth`], which ends the stream.
//!
//! # Architecture
//!
//! - [`cursor`]: character-level navigation with line/column tracking
//! - [`scanner`]: the [`Tokenizer`] state machine and its sub-scanners
//! - [`token`]: owned token values and [`TokenList`]
//! - [`lex_error`]: error kinds, context and fix suggestions
//! - [`highlight`]: editor presentation categories
//!
//! ```
//! use pebble_lexer::{tokenize, TokenTag};
//!
//! let tokens = tokenize("@let answer = 42;");
//! assert_eq!(tokens.tag(0), Some(TokenTag::Injunction));
//! assert_eq!(tokens.tags().last(), Some(&TokenTag::EndOfInput));
//! ```

pub mod config;
pub mod cursor;
pub mod escape;
pub mod highlight;
pub mod keywords;
pub mod lex_error;
pub mod operator;
pub mod scanner;
pub mod source;
pub mod span;
pub mod token;

mod confusables;
mod stack;

pub use config::{
    CommentMode, LexerConfig, DEFAULT_MAX_INTERPOLATION_DEPTH, MAX_INTERPOLATION_DEPTH_CEILING,
};
pub use keywords::{Injunction, Keyword};
pub use lex_error::{LexError, LexErrorContext, LexErrorKind, LexReplacement, LexSuggestion};
pub use operator::Operator;
pub use scanner::{ScanState, Tokenizer};
pub use source::SourceUnit;
pub use span::{Position, Span};
pub use token::{
    Bracket, CommentKind, NumberKind, NumberLiteral, StringLiteral, StringSegment, Terminator,
    Token, TokenKind, TokenList, TokenTag,
};

/// Tokenize `source` with the default configuration.
pub fn tokenize(source: &str) -> TokenList {
    tokenize_with(source, &LexerConfig::default())
}

/// Tokenize `source` to completion.
///
/// The result always ends with a single `EndOfInput` token.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize_with(source: &str, config: &LexerConfig) -> TokenList {
    let tokens: TokenList = Tokenizer::with_config(source, *config).collect();
    tracing::debug!(
        count = tokens.len(),
        errors = tokens.errors().len(),
        "tokenized"
    );
    tokens
}
