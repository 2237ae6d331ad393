//! Diagnostic data types returned by the structural pass and the linter.
//!
//! Positions are 1-based. Structural diagnostics carry only a position and
//! a message; lint findings additionally carry the rule that produced them
//! and a configurable severity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A structural finding: position of the offending character (or of the
/// opening delimiter, for unclosed constructs) plus a human-readable
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

/// Lint severities. `Off` only appears in configuration; reported messages
/// carry `Error` or `Warning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Off,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Off => write!(f, "off"),
        }
    }
}

/// A lint finding: a diagnostic plus severity and the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintMessage {
    pub line: usize,
    pub column: usize,
    pub message: String,
    pub severity: Severity,
    pub rule: &'static str,
}

/// Stable position sort: among findings at the same position, insertion
/// order is preserved (the unclosed-construct pass appends in stack-unwind
/// order).
pub(crate) fn sort_by_position<T, F>(items: &mut [T], position: F)
where
    F: Fn(&T) -> (usize, usize),
{
    items.sort_by_key(|item| position(item));
}
