//! Operator table and maximal-munch matching.

use std::fmt;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Operator {
    /// `...`
    Ellipsis,
    /// `&&=`
    AndAndAssign,
    /// `||=`
    OrOrAssign,
    /// `**`
    Power,
    StarAssign,
    SlashAssign,
    PlusAssign,
    MinusAssign,
    PercentAssign,
    EqualEqual,
    BangEqual,
    GreaterEqual,
    LessEqual,
    /// `=>`
    FatArrow,
    /// `->`
    Arrow,
    Increment,
    Decrement,
    /// `..`
    DotDot,
    /// `::`
    ColonColon,
    OrOr,
    AndAnd,
    ShiftLeft,
    ShiftRight,
    Star,
    Slash,
    Plus,
    Minus,
    Percent,
    Ampersand,
    Pipe,
    Caret,
    Bang,
    Tilde,
    Dot,
    Question,
    Colon,
    Greater,
    Less,
    Equal,
}

/// Every operator lexeme, longest first, so the first prefix match is the
/// maximal munch.
const OPERATORS: &[(&str, Operator)] = &[
    ("...", Operator::Ellipsis),
    ("&&=", Operator::AndAndAssign),
    ("||=", Operator::OrOrAssign),
    ("**", Operator::Power),
    ("*=", Operator::StarAssign),
    ("/=", Operator::SlashAssign),
    ("+=", Operator::PlusAssign),
    ("-=", Operator::MinusAssign),
    ("%=", Operator::PercentAssign),
    ("==", Operator::EqualEqual),
    ("!=", Operator::BangEqual),
    (">=", Operator::GreaterEqual),
    ("<=", Operator::LessEqual),
    ("=>", Operator::FatArrow),
    ("->", Operator::Arrow),
    ("++", Operator::Increment),
    ("--", Operator::Decrement),
    ("..", Operator::DotDot),
    ("::", Operator::ColonColon),
    ("||", Operator::OrOr),
    ("&&", Operator::AndAnd),
    ("<<", Operator::ShiftLeft),
    (">>", Operator::ShiftRight),
    ("*", Operator::Star),
    ("/", Operator::Slash),
    ("+", Operator::Plus),
    ("-", Operator::Minus),
    ("%", Operator::Percent),
    ("&", Operator::Ampersand),
    ("|", Operator::Pipe),
    ("^", Operator::Caret),
    ("!", Operator::Bang),
    ("~", Operator::Tilde),
    (".", Operator::Dot),
    ("?", Operator::Question),
    (":", Operator::Colon),
    (">", Operator::Greater),
    ("<", Operator::Less),
    ("=", Operator::Equal),
];

impl Operator {
    /// Whether `c` can start an operator. Every such char is also a
    /// complete single-char operator, so a match always succeeds.
    #[inline]
    pub fn is_operator_char(c: char) -> bool {
        matches!(
            c,
            '!' | '%' | '&' | '*' | '+' | '-' | '.' | '/' | ':' | '<' | '=' | '>' | '?' | '^' | '|'
                | '~'
        )
    }

    /// The longest operator prefixing `text`, with its length in bytes.
    pub fn longest_prefix(text: &str) -> Option<(Operator, usize)> {
        OPERATORS
            .iter()
            .find(|(lexeme, _)| text.starts_with(lexeme))
            .map(|&(lexeme, op)| (op, lexeme.len()))
    }

    pub fn as_str(self) -> &'static str {
        OPERATORS
            .iter()
            .find(|&&(_, op)| op == self)
            .map_or("", |&(lexeme, _)| lexeme)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
