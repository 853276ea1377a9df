//! Stylint error handling.
//!
//! Fatal problems (unreadable files, broken configuration) are `LintError`s.
//! Style findings are not errors: they travel as `Warning`s in a `LintReport`
//! and only become a `miette` diagnostic (`OrderDiagnostic`) at presentation time.

use std::path::PathBuf;
use std::sync::Arc;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LintError>;

// ============================================================================
// FATAL ERRORS
// ============================================================================

#[derive(Error, Diagnostic, Debug)]
pub enum LintError {
    #[error("could not read '{}'", path.display())]
    #[diagnostic(code(stylint::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in '{}': {message}", path.display())]
    #[diagnostic(
        code(stylint::config::parse),
        help("configuration files are JSON (.stylintrc) or YAML (.yml, .yaml)")
    )]
    ConfigParse { path: PathBuf, message: String },

    #[error("indentSpaces must be at least 1, got {value}")]
    #[diagnostic(
        code(stylint::config::indent),
        help("set indentSpaces to the number of spaces per nesting level")
    )]
    InvalidIndent { value: usize },

    #[error("failed to walk '{}': {message}", path.display())]
    #[diagnostic(code(stylint::discovery))]
    Walk { path: PathBuf, message: String },
}

impl LintError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LintError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        LintError::ConfigParse {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

// ============================================================================
// WARNING DIAGNOSTICS
// ============================================================================

/// A sort-order finding rendered through `miette`, pointing at the offending token.
#[derive(Error, Diagnostic, Debug)]
#[error("{message}")]
#[diagnostic(code(stylint::sort_order), severity(Warning))]
pub struct OrderDiagnostic {
    pub message: String,
    #[source_code]
    pub src: Arc<NamedSource<String>>,
    #[label("out of order")]
    pub span: SourceSpan,
    #[help]
    pub help: Option<String>,
}
