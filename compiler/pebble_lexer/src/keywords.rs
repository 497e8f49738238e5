//! Reserved words.
//!
//! Three closed, case-sensitive tables:
//! 1. **Keywords**: control-flow and expression words (`for`, `match`, ...)
//! 2. **Literal words**: reserved values (`true`, `self`, ...), tagged as
//!    keywords with [`Keyword::is_literal`]
//! 3. **Injunctions**: declaration words used with an `@` prefix (`@let`)
//!
//! Lookups bucket on length first, then match the handful of candidates of
//! that length. A bare injunction word (`function` without `@`) is still
//! reserved and resolves to [`Keyword::Reserved`].

use std::fmt;

/// A reserved word scanned without an `@` prefix.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Keyword {
    For,
    Fn,
    In,
    While,
    Break,
    Continue,
    Crash,
    Try,
    Recover,
    Println,
    If,
    Else,
    From,
    As,
    Return,
    Match,
    Case,
    Loop,
    // Literal words
    True,
    False,
    SelfValue,
    Core,
    Static,
    Readonly,
    /// An injunction word written without its `@`.
    Reserved(Injunction),
}

impl Keyword {
    /// Look up a bare word.
    ///
    /// Returns `None` for plain identifiers.
    #[inline]
    pub fn lookup(text: &str) -> Option<Keyword> {
        let len = text.len();
        // All reserved words are 2-9 ASCII chars.
        if !(2..=9).contains(&len) || !text.as_bytes()[0].is_ascii_lowercase() {
            return None;
        }

        let keyword = match len {
            2 => match text {
                "as" => Keyword::As,
                "fn" => Keyword::Fn,
                "if" => Keyword::If,
                "in" => Keyword::In,
                _ => return None,
            },
            3 => match text {
                "for" => Keyword::For,
                "try" => Keyword::Try,
                _ => return Injunction::lookup(text).map(Keyword::Reserved),
            },
            4 => match text {
                "case" => Keyword::Case,
                "core" => Keyword::Core,
                "else" => Keyword::Else,
                "from" => Keyword::From,
                "loop" => Keyword::Loop,
                "self" => Keyword::SelfValue,
                "true" => Keyword::True,
                _ => return Injunction::lookup(text).map(Keyword::Reserved),
            },
            5 => match text {
                "break" => Keyword::Break,
                "crash" => Keyword::Crash,
                "false" => Keyword::False,
                "match" => Keyword::Match,
                "while" => Keyword::While,
                _ => return Injunction::lookup(text).map(Keyword::Reserved),
            },
            6 => match text {
                "return" => Keyword::Return,
                "static" => Keyword::Static,
                _ => return Injunction::lookup(text).map(Keyword::Reserved),
            },
            7 => match text {
                "println" => Keyword::Println,
                "recover" => Keyword::Recover,
                _ => return Injunction::lookup(text).map(Keyword::Reserved),
            },
            8 => match text {
                "continue" => Keyword::Continue,
                "readonly" => Keyword::Readonly,
                _ => return Injunction::lookup(text).map(Keyword::Reserved),
            },
            _ => return Injunction::lookup(text).map(Keyword::Reserved),
        };
        Some(keyword)
    }

    /// Literal words denote values rather than control flow.
    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Keyword::True
                | Keyword::False
                | Keyword::SelfValue
                | Keyword::Core
                | Keyword::Static
                | Keyword::Readonly
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::For => "for",
            Keyword::Fn => "fn",
            Keyword::In => "in",
            Keyword::While => "while",
            Keyword::Break => "break",
            Keyword::Continue => "continue",
            Keyword::Crash => "crash",
            Keyword::Try => "try",
            Keyword::Recover => "recover",
            Keyword::Println => "println",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::From => "from",
            Keyword::As => "as",
            Keyword::Return => "return",
            Keyword::Match => "match",
            Keyword::Case => "case",
            Keyword::Loop => "loop",
            Keyword::True => "true",
            Keyword::False => "false",
            Keyword::SelfValue => "self",
            Keyword::Core => "core",
            Keyword::Static => "static",
            Keyword::Readonly => "readonly",
            Keyword::Reserved(injunction) => injunction.as_str(),
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declaration-introducing word, written with an `@` prefix.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Injunction {
    Use,
    Public,
    Prepend,
    Type,
    Let,
    Function,
    Const,
    Enum,
    Class,
    Record,
    Interface,
    Module,
    Implement,
    Tests,
}

impl Injunction {
    pub const ALL: [Injunction; 14] = [
        Injunction::Use,
        Injunction::Public,
        Injunction::Prepend,
        Injunction::Type,
        Injunction::Let,
        Injunction::Function,
        Injunction::Const,
        Injunction::Enum,
        Injunction::Class,
        Injunction::Record,
        Injunction::Interface,
        Injunction::Module,
        Injunction::Implement,
        Injunction::Tests,
    ];

    /// Look up an injunction name (without the `@`).
    #[inline]
    pub fn lookup(name: &str) -> Option<Injunction> {
        let injunction = match name.len() {
            3 => match name {
                "let" => Injunction::Let,
                "use" => Injunction::Use,
                _ => return None,
            },
            4 => match name {
                "enum" => Injunction::Enum,
                "type" => Injunction::Type,
                _ => return None,
            },
            5 => match name {
                "class" => Injunction::Class,
                "const" => Injunction::Const,
                "tests" => Injunction::Tests,
                _ => return None,
            },
            6 => match name {
                "module" => Injunction::Module,
                "public" => Injunction::Public,
                "record" => Injunction::Record,
                _ => return None,
            },
            7 => match name {
                "prepend" => Injunction::Prepend,
                _ => return None,
            },
            8 => match name {
                "function" => Injunction::Function,
                _ => return None,
            },
            9 => match name {
                "implement" => Injunction::Implement,
                "interface" => Injunction::Interface,
                _ => return None,
            },
            _ => return None,
        };
        Some(injunction)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Injunction::Use => "use",
            Injunction::Public => "public",
            Injunction::Prepend => "prepend",
            Injunction::Type => "type",
            Injunction::Let => "let",
            Injunction::Function => "function",
            Injunction::Const => "const",
            Injunction::Enum => "enum",
            Injunction::Class => "class",
            Injunction::Record => "record",
            Injunction::Interface => "interface",
            Injunction::Module => "module",
            Injunction::Implement => "implement",
            Injunction::Tests => "tests",
        }
    }
}

impl fmt::Display for Injunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.as_str())
    }
}

#[cfg(test)]
mod tests;
