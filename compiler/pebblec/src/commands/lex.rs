//! `pebble lex`: dump the token stream.

use std::path::Path;
use std::process::ExitCode;

use pebble_lexer::LexerConfig;

use super::read_file;
use crate::error::CliError;
use crate::output;

/// Lex a file and print its tokens, as text or JSON.
pub fn lex_file(path: &Path, json: bool, config: &LexerConfig) -> Result<ExitCode, CliError> {
    let unit = read_file(path)?;
    let tokens = unit.tokenize_with(config);

    if json {
        println!("{}", output::tokens_json(&tokens)?);
    } else {
        println!("{}", output::header(unit.name(), &tokens));
        for line in output::token_lines(tokens.as_slice()) {
            println!("{line}");
        }
    }
    Ok(ExitCode::SUCCESS)
}
