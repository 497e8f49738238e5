//! `pebble repl`: tokenize lines as they are typed.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use pebble_lexer::tokenize;

use crate::error::CliError;
use crate::output;

const PROMPT: &str = ">  ";
const QUIT: &str = ":quit";

pub fn run_repl() -> Result<ExitCode, CliError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl(stdin.lock(), stdout.lock())?;
    Ok(ExitCode::SUCCESS)
}

/// Read lines from `input` until EOF or `:quit`, printing each line's tokens.
fn repl<R: BufRead, W: Write>(mut input: R, mut out: W) -> io::Result<()> {
    writeln!(out, "Type a line to tokenize, or {QUIT} to exit.")?;
    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        let source = line.trim_end_matches(['\n', '\r']);
        if source.trim() == QUIT {
            return Ok(());
        }

        let tokens = tokenize(source);
        for text in output::token_lines(tokens.as_slice()) {
            writeln!(out, "{text}")?;
        }
        for err in tokens.errors() {
            writeln!(out, "error[{}]: {} at {}", err.kind.code(), err.message, err.span)?;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn run(input: &str) -> String {
        let mut out = Vec::new();
        repl(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_tokens_per_line() {
        let out = run("@let x\n");
        assert!(out.contains("  Injunction \"@let\" @ 1:1..1:5"), "{out}");
        assert!(out.contains("  Identifier \"x\" @ 1:6..1:7"), "{out}");
    }

    #[test]
    fn quit_stops_reading() {
        let out = run(":quit\n@let x\n");
        assert!(!out.contains("Injunction"), "{out}");
    }

    #[test]
    fn errors_are_listed() {
        let out = run("$\n");
        assert!(out.contains("error[L0010]"), "{out}");
    }
}
