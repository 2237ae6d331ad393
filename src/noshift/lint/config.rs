//! Linter configuration, read from `nsjslinter.json`.
//!
//! The file carries a `rules` map from rule name to severity; rules not
//! listed fall back to their built-in defaults. A missing file yields the
//! defaults unchanged.

use crate::noshift::config::ConfigError;
use crate::noshift::diagnostics::Severity;
use crate::noshift::lint::rules;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Name of the linter configuration file.
pub const LINT_CONFIG_FILE_NAME: &str = "nsjslinter.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintConfig {
    /// Per-rule severity overrides; unlisted rules use built-in defaults.
    #[serde(default)]
    pub rules: BTreeMap<String, Severity>,
    /// Mirror of the compiler's capitalize-in-strings policy; gates the
    /// uppercase-in-strings check.
    #[serde(
        default = "default_capitalize",
        rename = "capitalizeInStrings",
        skip_serializing_if = "is_default_capitalize"
    )]
    pub capitalize_in_strings: bool,
}

fn default_capitalize() -> bool {
    true
}

fn is_default_capitalize(value: &bool) -> bool {
    *value
}

impl Default for LintConfig {
    fn default() -> Self {
        LintConfig {
            rules: BTreeMap::new(),
            capitalize_in_strings: true,
        }
    }
}

impl LintConfig {
    /// Effective severity for a rule: explicit override, otherwise the
    /// built-in default.
    pub fn severity(&self, rule: &str) -> Severity {
        self.rules
            .get(rule)
            .copied()
            .unwrap_or_else(|| rules::default_severity(rule))
    }

    /// Config listing every rule at its default severity; the shape
    /// written by `nsc lint --init`.
    pub fn with_defaults() -> Self {
        LintConfig {
            rules: rules::DEFAULT_RULES
                .iter()
                .map(|&(name, severity)| (name.to_string(), severity))
                .collect(),
            capitalize_in_strings: true,
        }
    }

    /// Load `nsjslinter.json`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<LintConfig, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(LintConfig::default()),
            Err(e) => return Err(ConfigError::Io(e)),
        };
        serde_json::from_str(&raw).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
