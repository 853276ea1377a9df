pub use crate::errors::{LintError, Result};
pub use crate::knowledge::Knowledgebase;
pub use crate::lint::{LintReport, Linter, Warning};
pub use crate::order::{CheckerState, Verdict};

pub mod cli;
pub mod config;
pub mod discovery;
pub mod errors;
pub mod knowledge;
pub mod lint;
pub mod order;
