//! Terminal rendering of lexical errors.

use std::io;
use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use pebble_lexer::{LexError, SourceUnit};

/// Byte offsets to char indices; ariadne labels count chars.
fn char_range(text: &str, range: Range<usize>) -> Range<usize> {
    let to_chars = |offset: usize| text.get(..offset).map_or(0, |prefix| prefix.chars().count());
    to_chars(range.start)..to_chars(range.end)
}

/// Write one error report for `err` in `unit` to `out`.
pub fn write_error<W: io::Write>(
    unit: &SourceUnit,
    err: &LexError,
    color: bool,
    out: W,
) -> io::Result<()> {
    let name = unit.name();
    let range = char_range(unit.text(), err.span.to_range());

    let mut label = Label::new((name, range.clone())).with_message(err.kind.to_string());
    if color {
        label = label.with_color(Color::Red);
    }

    let mut report = Report::build(ReportKind::Error, name, range.start)
        .with_config(Config::default().with_color(color))
        .with_code(err.kind.code())
        .with_message(&err.message)
        .with_label(label)
        .with_note(err.context.to_string());
    if !err.suggestions.is_empty() {
        let help: Vec<&str> = err.suggestions.iter().map(|s| s.message.as_str()).collect();
        report = report.with_help(help.join("; "));
    }

    report.finish().write((name, Source::from(unit.text().to_string())), out)
}

/// Render every error to stderr.
pub fn eprint_errors(unit: &SourceUnit, errors: &[&LexError]) -> io::Result<()> {
    for err in errors {
        write_error(unit, err, true, io::stderr())?;
    }
    Ok(())
}
