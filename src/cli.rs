//! The Stylint command-line interface.
//!
//! Resolves configuration, lints every requested path and hands the reports to
//! [`output`]. Exit codes: 0 clean, 1 warnings found, 2 fatal error.

pub mod args;
pub mod output;

use std::path::Path;
use std::process;

use clap::Parser;
use termcolor::StandardStream;
use tracing::{debug, Level};

use crate::cli::args::StylintArgs;
use crate::config::LintConfig;
use crate::errors::Result;
use crate::lint::{LintReport, Linter};

pub const EXIT_CLEAN: i32 = 0;
pub const EXIT_WARNINGS: i32 = 1;
pub const EXIT_FATAL: i32 = 2;

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

/// The main entry point for the CLI.
pub fn run() {
    let args = StylintArgs::parse();
    init_tracing(args.verbose);

    let reports = match lint(&args) {
        Ok(reports) => reports,
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            process::exit(EXIT_FATAL);
        }
    };

    if let Err(e) = print(&args, &reports) {
        eprintln!("failed to write output: {}", e);
        process::exit(EXIT_FATAL);
    }

    let code = if reports.iter().all(LintReport::is_clean) {
        EXIT_CLEAN
    } else {
        EXIT_WARNINGS
    };
    process::exit(code);
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolves configuration: an explicit `--config`, else `./.stylintrc`, else
/// defaults, with `--indent` applied last.
pub fn resolve_config(args: &StylintArgs) -> Result<LintConfig> {
    let mut config = match &args.config {
        Some(path) => LintConfig::load(path)?,
        None => LintConfig::discover(Path::new("."))?.unwrap_or_default(),
    };

    if let Some(indent) = args.indent {
        config.indent_spaces = indent;
    }
    config.validate()?;
    Ok(config)
}

fn lint(args: &StylintArgs) -> Result<Vec<LintReport>> {
    let config = resolve_config(args)?;
    debug!(?config, "resolved configuration");
    Linter::from_config(config)?.lint_paths(&args.paths)
}

fn print(args: &StylintArgs, reports: &[LintReport]) -> std::io::Result<()> {
    if args.json {
        return output::print_json(&mut std::io::stdout().lock(), reports);
    }
    if args.diagnostics {
        return output::print_diagnostics(&mut std::io::stderr().lock(), reports);
    }
    let mut stdout = StandardStream::stdout(output::color_choice(args.no_color));
    output::print_reports(&mut stdout, reports)
}
