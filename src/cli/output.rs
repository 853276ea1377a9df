//! Handles all user-facing output for the CLI.
//!
//! Plain text with colors, JSON, or full `miette` diagnostics. Writers are
//! generic over `WriteColor` so the formatting can be captured in tests.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, WriteColor};
use unicode_width::UnicodeWidthStr;

use crate::lint::{LintReport, Warning};

/// Picks a color mode from the user's flag and whether stdout is a terminal.
pub fn color_choice(no_color: bool) -> ColorChoice {
    if no_color || !atty::is(atty::Stream::Stdout) {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    }
}

/// Prints every warning of every report, followed by a summary line.
pub fn print_reports(writer: &mut impl WriteColor, reports: &[LintReport]) -> io::Result<()> {
    let mut total = 0;
    for report in reports {
        for warning in &report.warnings {
            print_warning(writer, warning)?;
            total += 1;
        }
    }
    print_summary(writer, total, reports.len())
}

/// Prints reports as one pretty JSON array of warnings.
pub fn print_json(writer: &mut impl Write, reports: &[LintReport]) -> io::Result<()> {
    let warnings: Vec<&Warning> = reports.iter().flat_map(|r| &r.warnings).collect();
    serde_json::to_writer_pretty(&mut *writer, &warnings)?;
    writeln!(writer)
}

/// Renders each warning through `miette`'s graphical handler.
pub fn print_diagnostics(writer: &mut impl Write, reports: &[LintReport]) -> io::Result<()> {
    for report in reports {
        for diagnostic in report.diagnostics() {
            writeln!(writer, "{:?}", miette::Report::new(diagnostic))?;
        }
    }
    Ok(())
}

pub fn print_warning(writer: &mut impl WriteColor, warning: &Warning) -> io::Result<()> {
    writer.set_color(ColorSpec::new().set_bold(true))?;
    write!(writer, "{}:{}:{}", warning.file, warning.line, warning.column)?;
    writer.reset()?;

    writer.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
    write!(writer, " warning")?;
    writer.reset()?;
    writeln!(writer, " [{}] {}", warning.rule, warning.message)?;

    writeln!(writer, "  {}", warning.source_line)?;
    let lead = &warning.source_line[..warning.column.saturating_sub(1)];
    let token = &warning.source_line[warning.column.saturating_sub(1)..][..warning.len];
    writer.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
    writeln!(
        writer,
        "  {}{}",
        " ".repeat(lead.width()),
        "^".repeat(token.width().max(1))
    )?;
    writer.reset()?;

    writeln!(writer, "  expected order: {}", warning.expected_order.join(", "))
}

fn print_summary(writer: &mut impl WriteColor, warnings: usize, files: usize) -> io::Result<()> {
    if warnings == 0 {
        writer.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        writeln!(writer, "✓ {} file(s) checked, no warnings", files)?;
    } else {
        writer.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
        writeln!(writer, "{} warning(s) in {} file(s) checked", warnings, files)?;
    }
    writer.reset()
}
