//! Errors surfaced by CLI commands.

use std::io;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A source file could not be read. The message is user-facing.
    #[error("{message}")]
    Read {
        message: String,
        #[source]
        source: io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("cannot serialize tokens: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    #[cold]
    pub fn read(path: &Path, source: io::Error) -> Self {
        let path = path.display();
        let message = match source.kind() {
            io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
            io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
            io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
            _ => format!("error reading '{path}': {source}"),
        };
        CliError::Read { message, source }
    }
}
