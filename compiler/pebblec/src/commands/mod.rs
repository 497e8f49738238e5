//! Command handlers for the Pebble CLI.
//!
//! Each submodule implements one subcommand. Shared helpers live here.

use std::path::Path;

use pebble_lexer::SourceUnit;

use crate::error::CliError;

mod check;
mod highlight;
mod lex;
mod repl;

pub use check::check_file;
pub use highlight::highlight_file;
pub use lex::lex_file;
pub use repl::run_repl;

/// Read a source file into a named unit.
pub(super) fn read_file(path: &Path) -> Result<SourceUnit, CliError> {
    tracing::debug!(path = %path.display(), "reading source");
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(SourceUnit::new(path.display().to_string(), text)),
        Err(e) => Err(CliError::read(path, e)),
    }
}
