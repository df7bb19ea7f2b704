//! Usage listing.
//!
//! Two columns: every flag with its value placeholder, then its description.
//! Descriptions that would run past the terminal edge are cut and end in
//! `...`.

use std::{
    borrow::Cow,
    io::{self, Write},
};

use strum::IntoEnumIterator;

use crate::{
    args::{ArgsError, Flag},
    constants::BINARY_NAME,
};

/// Gap between the longest flag label and the description column.
pub const PADDING: usize = 4;

/// Width assumed when the terminal size cannot be read.
pub const FALLBACK_WIDTH: usize = 80;

const ELLIPSIS: &str = "...";

/// Current terminal width in columns, or [`FALLBACK_WIDTH`].
pub fn terminal_width() -> usize {
    match crossterm::terminal::size() {
        Ok((columns, _)) if columns > 0 => usize::from(columns),
        _ => FALLBACK_WIDTH,
    }
}

/// Print a parse failure followed by the usage listing to stdout.
///
/// A failure while writing is reported on stderr and otherwise ignored.
pub fn print_parse_error(err: &ArgsError) {
    let width = terminal_width();
    let mut out = io::stdout().lock();

    if let Err(io_err) = report_parse_error(&mut out, err, width).and_then(|()| out.flush()) {
        eprintln!("An error occurred while displaying usage information: {io_err}");
    }
}

/// Write a parse failure and then the usage listing for a terminal `width`
/// columns wide.
pub fn report_parse_error<W: Write>(
    out: &mut W,
    err: &ArgsError,
    width: usize,
) -> io::Result<()> {
    writeln!(out, "Error parsing arguments: {err}")?;
    render_usage(out, width)
}

/// Write the usage listing for a terminal `width` columns wide.
pub fn render_usage<W: Write>(out: &mut W, width: usize) -> io::Result<()> {
    let rows: Vec<(String, &str)> =
        Flag::iter().map(|flag| (flag.label(), flag.description())).collect();

    let label_width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
    let column = label_width + PADDING;

    writeln!(out, "Usage: {BINARY_NAME} [options]")?;
    writeln!(out, "Options:")?;

    for (label, description) in &rows {
        let description = fit_description(description, column, width);
        writeln!(out, "{label:<column$}{description}")?;
    }

    Ok(())
}

/// Cut `description` so a row starting it at `column` fits in `width`.
///
/// When not even one character fits before the ellipsis, only the ellipsis
/// is returned.
pub fn fit_description(description: &str, column: usize, width: usize) -> Cow<'_, str> {
    if column + description.chars().count() <= width {
        return Cow::Borrowed(description);
    }

    match width.checked_sub(column + ELLIPSIS.len()) {
        Some(allowed) if allowed > 0 => {
            let mut cut: String = description.chars().take(allowed).collect();
            cut.push_str(ELLIPSIS);
            Cow::Owned(cut)
        }
        _ => Cow::Borrowed(ELLIPSIS),
    }
}
