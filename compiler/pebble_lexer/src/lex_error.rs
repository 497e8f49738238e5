//! Lexical error types.
//!
//! Errors are data: the tokenizer wraps each one in a `LexError` token at the
//! point of failure and keeps going. Each error has the same shape:
//! - `span`: where the problem is (may be narrower than the token's span)
//! - `kind`: what went wrong
//! - `context`: what the scanner was inside of at the time
//! - `suggestions`: how to fix it
//!
//! Only [`LexErrorKind::InterpolationTooDeep`] is fatal.

use std::fmt;

use crate::confusables;
use crate::keywords::Injunction;
use crate::span::Span;

/// A lexical error with enough context for diagnostic rendering.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{message}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Human-readable description of this particular occurrence.
    pub message: String,
    /// Location the diagnostic should point at.
    pub span: Span,
    pub context: LexErrorContext,
    pub suggestions: Vec<LexSuggestion>,
}

/// What kind of lexical error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LexErrorKind {
    #[error("unknown injunction `@{name}`")]
    UnknownInjunction { name: String },
    #[error("malformed numeric literal")]
    MalformedNumericLiteral,
    #[error("identifier directly follows a numeric literal")]
    AdjacentIdentifier,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("string interpolation nested deeper than {limit} levels")]
    InterpolationTooDeep { limit: usize },
    #[error("invalid character literal")]
    InvalidCharacterLiteral,
    #[error("escape sequence cut off by end of input")]
    DanglingEscape,
    #[error("invalid escape sequence")]
    InvalidEscape,
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("unexpected character {found:?}")]
    UnexpectedCharacter { found: char },
}

impl LexErrorKind {
    /// Fatal errors abort the whole scan; everything else is recovered locally.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(self, LexErrorKind::InterpolationTooDeep { .. })
    }

    /// Stable diagnostic code.
    pub fn code(&self) -> &'static str {
        match self {
            LexErrorKind::UnknownInjunction { .. } => "L0001",
            LexErrorKind::MalformedNumericLiteral => "L0002",
            LexErrorKind::AdjacentIdentifier => "L0003",
            LexErrorKind::UnterminatedString => "L0004",
            LexErrorKind::InterpolationTooDeep { .. } => "L0005",
            LexErrorKind::InvalidCharacterLiteral => "L0006",
            LexErrorKind::DanglingEscape => "L0007",
            LexErrorKind::InvalidEscape => "L0008",
            LexErrorKind::UnterminatedComment => "L0009",
            LexErrorKind::UnexpectedCharacter { .. } => "L0010",
        }
    }
}

/// What the scanner was doing when the error occurred.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LexErrorContext {
    #[default]
    TopLevel,
    /// Inside a string literal opened at `start`.
    InsideString { start: Span },
    /// Inside an interpolation region at the given nesting depth.
    Interpolation { depth: usize },
    InsideChar,
    InsideComment,
    NumberLiteral,
}

impl fmt::Display for LexErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorContext::TopLevel => f.write_str("while scanning source"),
            LexErrorContext::InsideString { start } => {
                write!(f, "while scanning the string literal opened at {}", start.start)
            }
            LexErrorContext::Interpolation { depth } => {
                write!(f, "while scanning a string interpolation (depth {depth})")
            }
            LexErrorContext::InsideChar => f.write_str("while scanning a character literal"),
            LexErrorContext::InsideComment => f.write_str("while scanning a block comment"),
            LexErrorContext::NumberLiteral => f.write_str("while scanning a numeric literal"),
        }
    }
}

/// Suggestion for fixing a lexical error.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LexSuggestion {
    pub message: String,
    /// Concrete text replacement for auto-fix, if applicable.
    pub replacement: Option<LexReplacement>,
}

/// A concrete text replacement for an auto-fix.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LexReplacement {
    pub span: Span,
    pub text: String,
}

impl LexSuggestion {
    /// Create a text-only suggestion (no code replacement).
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            replacement: None,
        }
    }

    /// Create a suggestion that replaces `span` with `text`.
    pub fn replace(message: impl Into<String>, span: Span, text: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            replacement: Some(LexReplacement {
                span,
                text: text.into(),
            }),
        }
    }
}

impl LexError {
    fn new(kind: LexErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
            context: LexErrorContext::TopLevel,
            suggestions: Vec::new(),
        }
    }

    #[inline]
    pub fn is_fatal(&self) -> bool {
        self.kind.is_fatal()
    }

    #[must_use]
    pub fn with_context(mut self, context: LexErrorContext) -> Self {
        self.context = context;
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: LexSuggestion) -> Self {
        self.suggestions.push(suggestion);
        self
    }

    /// Create an unknown injunction error for `@name`.
    #[cold]
    pub fn unknown_injunction(span: Span, name: &str) -> Self {
        let mut err = Self::new(
            LexErrorKind::UnknownInjunction {
                name: name.to_owned(),
            },
            format!("`@{name}` is not a known injunction"),
            span,
        );
        if let Some(known) = Injunction::ALL
            .iter()
            .find(|inj| inj.as_str().eq_ignore_ascii_case(name))
        {
            err = err.with_suggestion(LexSuggestion::replace(
                format!("injunctions are case-sensitive; did you mean `@{}`?", known.as_str()),
                span,
                format!("@{}", known.as_str()),
            ));
        } else {
            let names: Vec<&str> = Injunction::ALL.iter().map(|inj| inj.as_str()).collect();
            err = err.with_suggestion(LexSuggestion::text(format!(
                "known injunctions are: {}",
                names.join(", ")
            )));
        }
        err
    }

    /// Create an error for a radix prefix with no digits after it (`0x`).
    #[cold]
    pub fn missing_radix_digits(span: Span, prefix: &str) -> Self {
        Self::new(
            LexErrorKind::MalformedNumericLiteral,
            format!("expected digits after `{prefix}`"),
            span,
        )
        .with_context(LexErrorContext::NumberLiteral)
    }

    /// Create an error for a digit outside the literal's base (`0b102`).
    #[cold]
    pub fn invalid_digit_for_radix(span: Span, digit: char, base: &str) -> Self {
        Self::new(
            LexErrorKind::MalformedNumericLiteral,
            format!("invalid digit `{digit}` in {base} literal"),
            span,
        )
        .with_context(LexErrorContext::NumberLiteral)
    }

    /// Create an error for a big-literal suffix on a fraction or exponent.
    #[cold]
    pub fn big_suffix_on_non_integer(span: Span) -> Self {
        Self::new(
            LexErrorKind::MalformedNumericLiteral,
            "the `n` suffix is only valid on integer literals",
            span,
        )
        .with_context(LexErrorContext::NumberLiteral)
        .with_suggestion(LexSuggestion::replace("remove the suffix", span, ""))
    }

    /// Create an adjacent identifier error (`0x1Ffoo`, `12abc`).
    #[cold]
    pub fn adjacent_identifier(span: Span) -> Self {
        Self::new(
            LexErrorKind::AdjacentIdentifier,
            "identifier characters cannot directly follow a numeric literal",
            span,
        )
        .with_context(LexErrorContext::NumberLiteral)
        .with_suggestion(LexSuggestion::text(
            "separate the literal and the identifier with whitespace or an operator",
        ))
    }

    /// Create an unterminated string error, anchored at the opening quote.
    #[cold]
    pub fn unterminated_string(span: Span) -> Self {
        Self::new(
            LexErrorKind::UnterminatedString,
            "string literal is never closed",
            span,
        )
        .with_context(LexErrorContext::InsideString { start: span })
        .with_suggestion(LexSuggestion::text("add a closing `\"`"))
    }

    /// Create the fatal nesting error for an interpolation opened at `span`.
    #[cold]
    pub fn interpolation_too_deep(span: Span, limit: usize) -> Self {
        Self::new(
            LexErrorKind::InterpolationTooDeep { limit },
            format!("string interpolation exceeds the nesting limit of {limit}"),
            span,
        )
        .with_context(LexErrorContext::Interpolation { depth: limit + 1 })
        .with_suggestion(LexSuggestion::text(
            "move the inner expression into a variable",
        ))
    }

    /// Create an empty character literal error (`''`).
    #[cold]
    pub fn empty_char(span: Span) -> Self {
        Self::new(
            LexErrorKind::InvalidCharacterLiteral,
            "empty character literal",
            span,
        )
        .with_context(LexErrorContext::InsideChar)
        .with_suggestion(LexSuggestion::text("a character literal holds exactly one character"))
    }

    /// Create a multi-character literal error (`'ab'`).
    #[cold]
    pub fn multi_char(span: Span) -> Self {
        Self::new(
            LexErrorKind::InvalidCharacterLiteral,
            "character literal may only contain one character",
            span,
        )
        .with_context(LexErrorContext::InsideChar)
        .with_suggestion(LexSuggestion::text("use a string literal (`\"...\"`) for text"))
    }

    /// Create an unterminated character literal error (`'a`).
    #[cold]
    pub fn unterminated_char(span: Span) -> Self {
        Self::new(
            LexErrorKind::InvalidCharacterLiteral,
            "character literal is missing its closing `'`",
            span,
        )
        .with_context(LexErrorContext::InsideChar)
        .with_suggestion(LexSuggestion::text("add a closing `'`"))
    }

    /// Create a dangling escape error (`\` at end of input).
    #[cold]
    pub fn dangling_escape(span: Span) -> Self {
        Self::new(
            LexErrorKind::DanglingEscape,
            "`\\` at end of input does not escape anything",
            span,
        )
        .with_context(LexErrorContext::InsideChar)
    }

    /// Create an invalid escape error.
    #[cold]
    pub fn invalid_escape(span: Span, reason: impl fmt::Display) -> Self {
        Self::new(LexErrorKind::InvalidEscape, reason.to_string(), span)
    }

    /// Create an unterminated block comment error, anchored at `/*`.
    #[cold]
    pub fn unterminated_comment(span: Span) -> Self {
        Self::new(
            LexErrorKind::UnterminatedComment,
            "block comment is never closed",
            span,
        )
        .with_context(LexErrorContext::InsideComment)
        .with_suggestion(LexSuggestion::text("add a closing `*/`"))
    }

    /// Create an unexpected character error.
    ///
    /// Characters that look like ASCII punctuation get a replacement suggestion.
    #[cold]
    pub fn unexpected_character(span: Span, found: char) -> Self {
        let err = Self::new(
            LexErrorKind::UnexpectedCharacter { found },
            format!("unexpected character {found:?}"),
            span,
        );
        if let Some((suggested, name)) = confusables::lookup_confusable(found) {
            return err.with_suggestion(LexSuggestion::replace(
                format!("{name} looks like `{suggested}`, but is a different character"),
                span,
                suggested.to_string(),
            ));
        }
        match found {
            '#' => err.with_suggestion(LexSuggestion::text(
                "use `//` for comments, or `##` at the start of a line for doc comments",
            )),
            '@' => err.with_suggestion(LexSuggestion::text(
                "`@` must be followed by an injunction name, like `@let`",
            )),
            _ => err,
        }
    }
}
