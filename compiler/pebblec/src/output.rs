//! Plain-text and JSON renderings of token streams.

use pebble_lexer::highlight::Highlight;
use pebble_lexer::{StringSegment, Token, TokenKind, TokenList};

/// Header line for a token dump.
pub fn header(name: &str, tokens: &TokenList) -> String {
    format!("Tokens for '{name}' ({} tokens):", tokens.len())
}

/// One line per token, with interpolation contents indented beneath the
/// string that holds them.
pub fn token_lines(tokens: &[Token]) -> Vec<String> {
    let mut lines = Vec::with_capacity(tokens.len());
    push_lines(tokens, 1, &mut lines);
    lines
}

fn push_lines(tokens: &[Token], depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    for token in tokens {
        lines.push(format!("{indent}{token}"));
        if let TokenKind::String(literal) = &token.kind {
            for segment in &literal.segments {
                if let StringSegment::Interpolation { tokens, .. } = segment {
                    push_lines(tokens, depth + 1, lines);
                }
            }
        }
    }
}

/// Pretty-printed JSON array of tokens.
pub fn tokens_json(tokens: &TokenList) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tokens)
}

/// `<start>..<end> <scope>` for one highlight run.
pub fn highlight_line(run: &Highlight) -> String {
    format!("{} {}", run.span, run.category.scope())
}
