//! Pebble CLI
//!
//! Front door to the lexer: token dumps, diagnostics, highlighting and an
//! interactive token REPL.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use pebble_lexer::{
    CommentMode, LexerConfig, DEFAULT_MAX_INTERPOLATION_DEPTH, MAX_INTERPOLATION_DEPTH_CEILING,
};

mod commands;
mod error;
mod output;
mod report;
mod tracing_setup;

#[derive(Parser)]
#[command(name = "pebble", about = "The Pebble language toolchain", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the token stream of a file
    Lex {
        #[arg(value_name = "FILE")]
        path: PathBuf,
        /// Print tokens as JSON
        #[arg(long)]
        json: bool,
        /// Drop line and block comments, keeping only `##` doc comments
        #[arg(long)]
        doc_comments_only: bool,
        #[command(flatten)]
        depth: DepthArgs,
    },
    /// Report lexical errors in a file
    Check {
        #[arg(value_name = "FILE")]
        path: PathBuf,
        #[command(flatten)]
        depth: DepthArgs,
    },
    /// Print highlight scopes for a file
    Highlight {
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
    /// Tokenize lines read from stdin
    Repl,
}

#[derive(Args)]
struct DepthArgs {
    /// Deepest allowed string interpolation nesting
    #[arg(
        long = "max-depth",
        value_name = "N",
        default_value_t = DEFAULT_MAX_INTERPOLATION_DEPTH,
        value_parser = parse_depth
    )]
    max_depth: usize,
}

fn parse_depth(arg: &str) -> Result<usize, String> {
    let depth: usize = arg.parse().map_err(|e: std::num::ParseIntError| e.to_string())?;
    if depth > MAX_INTERPOLATION_DEPTH_CEILING {
        return Err(format!("nesting depth must be at most {MAX_INTERPOLATION_DEPTH_CEILING}"));
    }
    Ok(depth)
}

impl DepthArgs {
    fn config(&self, doc_comments_only: bool) -> LexerConfig {
        let comments = if doc_comments_only {
            CommentMode::DocOnly
        } else {
            CommentMode::All
        };
        LexerConfig::default()
            .with_comments(comments)
            .with_max_interpolation_depth(self.max_depth)
    }
}

fn main() -> ExitCode {
    tracing_setup::init();
    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Lex {
            path,
            json,
            doc_comments_only,
            depth,
        } => commands::lex_file(path, *json, &depth.config(*doc_comments_only)),
        Command::Check { path, depth } => commands::check_file(path, &depth.config(false)),
        Command::Highlight { path } => commands::highlight_file(path),
        Command::Repl => commands::run_repl(),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
