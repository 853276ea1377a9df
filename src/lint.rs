//! The line driver.
//!
//! Feeds each physical line of a file, in order, to a fresh `CheckerState`
//! and turns `Unsorted` verdicts into `Warning`s.

pub mod hash;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use miette::{NamedSource, SourceSpan};
use serde::Serialize;
use tracing::{debug, trace};

use crate::config::LintConfig;
use crate::discovery::discover_files;
use crate::errors::{LintError, OrderDiagnostic, Result};
use crate::knowledge::Knowledgebase;
use crate::order::{compute_context, CheckerState};

/// Rule name reported for sort-order warnings, matching the config key.
pub const SORT_ORDER_RULE: &str = "sortOrder";

// ============================================================================
// REPORT TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub file: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column of the offending token.
    pub column: usize,
    pub rule: String,
    pub message: String,
    pub source_line: String,
    /// The block's properties in the order they should appear.
    pub expected_order: Vec<String>,
    #[serde(skip)]
    pub offset: usize,
    #[serde(skip)]
    pub len: usize,
}

impl Warning {
    /// Builds a `miette` diagnostic for this warning against the file's source.
    pub fn to_diagnostic(&self, source: &str) -> OrderDiagnostic {
        OrderDiagnostic {
            message: self.message.clone(),
            src: Arc::new(NamedSource::new(self.file.clone(), source.to_string())),
            span: SourceSpan::new(self.offset.into(), self.len),
            help: Some(format!("expected order: {}", self.expected_order.join(", "))),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LintReport {
    pub file: String,
    pub warnings: Vec<Warning>,
    #[serde(skip)]
    pub source: String,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = OrderDiagnostic> + '_ {
        self.warnings.iter().map(|w| w.to_diagnostic(&self.source))
    }
}

// ============================================================================
// LINTER
// ============================================================================

#[derive(Debug, Clone)]
pub struct Linter {
    config: LintConfig,
    kb: Knowledgebase,
}

impl Linter {
    pub fn new(config: LintConfig, kb: Knowledgebase) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, kb })
    }

    /// A linter over the built-in knowledgebase plus the config's extras.
    pub fn from_config(config: LintConfig) -> Result<Self> {
        let kb = config.knowledgebase();
        Self::new(config, kb)
    }

    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    pub fn lint_file<P: AsRef<Path>>(&self, path: P) -> Result<LintReport> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| LintError::io(path, e))?;
        Ok(self.lint_source(path.display().to_string(), source))
    }

    /// Lints every matching file under each of `paths`, in discovery order.
    pub fn lint_paths<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<LintReport>> {
        let mut reports = Vec::new();
        for root in paths {
            for file in discover_files(root, &self.config.extensions)? {
                reports.push(self.lint_file(&file)?);
            }
        }
        Ok(reports)
    }

    pub fn lint_source(&self, name: impl Into<String>, source: impl Into<String>) -> LintReport {
        let name = name.into();
        let source = source.into();
        debug!(file = %name, "linting");

        let mut warnings = Vec::new();
        if self.config.rules.sort_order {
            self.check_sort_order(&name, &source, &mut warnings);
        }

        debug!(file = %name, warnings = warnings.len(), "done");
        LintReport {
            file: name,
            warnings,
            source,
        }
    }

    fn check_sort_order(&self, name: &str, source: &str, warnings: &mut Vec<Warning>) {
        let indent = self.config.indent_spaces;
        let mut state = CheckerState::new();
        let mut inside_hash = false;
        let mut offset = 0;

        for (index, raw) in source.split_inclusive('\n').enumerate() {
            let line = raw.trim_end_matches(['\n', '\r']);

            if hash::starts_hash(line) {
                inside_hash = true;
            }

            let verdict = state.check_line(line, &self.kb, inside_hash, indent);
            trace!(line = index + 1, ?verdict);

            if verdict.is_violation() {
                warnings.push(self.sort_warning(name, index, offset, line, &state));
            }

            if hash::ends_hash(line, inside_hash) {
                inside_hash = false;
            }
            offset += raw.len();
        }
    }

    fn sort_warning(
        &self,
        name: &str,
        index: usize,
        line_offset: usize,
        line: &str,
        state: &CheckerState,
    ) -> Warning {
        let token = compute_context(line, self.config.indent_spaces).first_token;
        let column = line.find(token).unwrap_or(0);

        let mut expected_order = state.cache().to_vec();
        expected_order.sort();

        Warning {
            file: name.to_string(),
            line: index + 1,
            column: column + 1,
            rule: SORT_ORDER_RULE.to_string(),
            message: format!("'{}' is not in alphabetical order", token),
            source_line: line.to_string(),
            expected_order,
            offset: line_offset + column,
            len: token.len(),
        }
    }
}
