//! A named source unit.

use crate::config::LexerConfig;
use crate::span::Span;
use crate::token::TokenList;

/// Source text plus the name it is reported under (usually a file path).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SourceUnit {
    name: String,
    text: String,
}

impl SourceUnit {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        SourceUnit {
            name: name.into(),
            text: text.into(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokenize(&self) -> TokenList {
        crate::tokenize(&self.text)
    }

    pub fn tokenize_with(&self, config: &LexerConfig) -> TokenList {
        crate::tokenize_with(&self.text, config)
    }

    /// Source text covered by `span`, or `None` if it is out of bounds or
    /// not on character boundaries.
    pub fn snippet(&self, span: Span) -> Option<&str> {
        self.text.get(span.to_range())
    }

    /// Full text of the 1-based line `line`, without its terminator.
    pub fn line(&self, line: u32) -> Option<&str> {
        let index = usize::try_from(line.checked_sub(1)?).ok()?;
        self.text
            .split('\n')
            .nth(index)
            .map(|text| text.strip_suffix('\r').unwrap_or(text))
    }
}
