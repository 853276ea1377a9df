//! Defines the command-line arguments for the Stylint CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::Parser;
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "stylint",
    version,
    about = "Lint Stylus stylesheets for alphabetical property order."
)]
pub struct StylintArgs {
    /// Files or directories to lint.
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Configuration file (JSON `.stylintrc` or YAML). Defaults to `./.stylintrc` if present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the configured number of spaces per indentation level.
    #[arg(short, long)]
    pub indent: Option<usize>,

    /// Emit warnings as a JSON array.
    #[arg(long, conflicts_with = "diagnostics")]
    pub json: bool,

    /// Render each warning as a full source diagnostic.
    #[arg(long)]
    pub diagnostics: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Log progress to stderr (repeat for more detail).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
