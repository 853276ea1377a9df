//! Linter configuration.
//!
//! Loaded from a `.stylintrc` (JSON) or a YAML file. Every key is optional and
//! falls back to the defaults below.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{LintError, Result};
use crate::knowledge::Knowledgebase;

/// File name looked up by [`LintConfig::discover`].
pub const CONFIG_FILE_NAME: &str = ".stylintrc";

const DEFAULT_INDENT_SPACES: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LintConfig {
    /// Spaces per nesting level.
    pub indent_spaces: usize,
    pub rules: RuleToggles,
    /// Extra names merged into the built-in knowledgebase.
    pub valid: Option<Knowledgebase>,
    /// File extensions picked up when a directory is linted.
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RuleToggles {
    pub sort_order: bool,
}

impl Default for RuleToggles {
    fn default() -> Self {
        Self { sort_order: true }
    }
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            indent_spaces: DEFAULT_INDENT_SPACES,
            rules: RuleToggles::default(),
            valid: None,
            extensions: vec!["styl".to_string()],
        }
    }
}

impl LintConfig {
    /// Loads and validates a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LintError::io(path, e))?;
        let config = Self::parse(path, &content)?;
        config.validate()?;
        debug!(path = %path.display(), indent = config.indent_spaces, "loaded configuration");
        Ok(config)
    }

    /// Parses `content` as YAML or JSON depending on the extension of `path`.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let is_yaml = path
            .extension()
            .map(|ext| ext == "yml" || ext == "yaml")
            .unwrap_or(false);

        if is_yaml {
            serde_yaml::from_str(content).map_err(|e| LintError::config(path, e))
        } else {
            serde_json::from_str(content).map_err(|e| LintError::config(path, e))
        }
    }

    /// Looks for a `.stylintrc` in `dir` and loads it if present.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Option<Self>> {
        let candidate: PathBuf = dir.as_ref().join(CONFIG_FILE_NAME);
        if !candidate.is_file() {
            return Ok(None);
        }
        Self::load(candidate).map(Some)
    }

    pub fn validate(&self) -> Result<()> {
        if self.indent_spaces == 0 {
            return Err(LintError::InvalidIndent {
                value: self.indent_spaces,
            });
        }
        Ok(())
    }

    /// The built-in knowledgebase with any configured extras merged in.
    pub fn knowledgebase(&self) -> Knowledgebase {
        let mut kb = Knowledgebase::builtin().clone();
        if let Some(extra) = &self.valid {
            kb.extend(extra);
        }
        kb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_missing_keys() {
        let config = LintConfig::parse(Path::new(".stylintrc"), "{}").unwrap();
        assert_eq!(config, LintConfig::default());
        assert_eq!(config.indent_spaces, 4);
        assert!(config.rules.sort_order);
    }

    #[test]
    fn json_config_is_parsed() {
        let json = r#"{ "indentSpaces": 2, "rules": { "sortOrder": false } }"#;
        let config = LintConfig::parse(Path::new(".stylintrc"), json).unwrap();
        assert_eq!(config.indent_spaces, 2);
        assert!(!config.rules.sort_order);
    }

    #[test]
    fn yaml_config_is_parsed() {
        let yaml = "indentSpaces: 2\nvalid:\n  properties: [gap]\n";
        let config = LintConfig::parse(Path::new("stylint.yml"), yaml).unwrap();
        assert_eq!(config.indent_spaces, 2);
        assert!(config.knowledgebase().is_property("gap"));
        assert!(config.knowledgebase().is_property("margin"));
    }

    #[test]
    fn malformed_config_is_reported() {
        let err = LintConfig::parse(Path::new(".stylintrc"), "{ nope").unwrap_err();
        assert!(matches!(err, LintError::ConfigParse { .. }));
    }

    #[test]
    fn zero_indent_is_rejected() {
        let config = LintConfig {
            indent_spaces: 0,
            ..LintConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LintError::InvalidIndent { value: 0 })
        ));
    }
}
