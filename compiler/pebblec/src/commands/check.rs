//! `pebble check`: report lexical errors.

use std::path::Path;
use std::process::ExitCode;

use pebble_lexer::LexerConfig;

use super::read_file;
use crate::error::CliError;
use crate::report;

/// Render every lexical error in a file. Fails if there are any.
pub fn check_file(path: &Path, config: &LexerConfig) -> Result<ExitCode, CliError> {
    let unit = read_file(path)?;
    let tokens = unit.tokenize_with(config);
    let errors = tokens.errors();

    if errors.is_empty() {
        println!("no lexical errors in '{}'", unit.name());
        return Ok(ExitCode::SUCCESS);
    }

    report::eprint_errors(&unit, &errors)?;
    let plural = if errors.len() == 1 { "" } else { "s" };
    eprintln!("{} lexical error{plural} in '{}'", errors.len(), unit.name());
    Ok(ExitCode::FAILURE)
}
