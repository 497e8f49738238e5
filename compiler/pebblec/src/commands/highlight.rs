//! `pebble highlight`: print highlight scopes.

use std::path::Path;
use std::process::ExitCode;

use pebble_lexer::highlight::highlight;

use super::read_file;
use crate::error::CliError;
use crate::output;

pub fn highlight_file(path: &Path) -> Result<ExitCode, CliError> {
    let unit = read_file(path)?;
    let tokens = unit.tokenize();
    for run in highlight(tokens.as_slice()) {
        println!("{}", output::highlight_line(&run));
    }
    Ok(ExitCode::SUCCESS)
}
