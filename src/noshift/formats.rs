//! Report rendering for diagnostics and lint results.
//!
//! The CLI selects a format by name (`text`, `json`, `yaml`); text output
//! is the human-readable one-line-per-finding form, the serialized forms
//! carry the file name alongside the findings.

use crate::noshift::diagnostics::{Diagnostic, LintMessage};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
    Yaml,
}

impl ReportFormat {
    pub fn parse(name: &str) -> Result<ReportFormat, FormatError> {
        match name {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "yaml" => Ok(ReportFormat::Yaml),
            other => Err(FormatError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    UnknownFormat(String),
    Serialization(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownFormat(name) => {
                write!(f, "Unknown format '{}' (expected text, json or yaml)", name)
            }
            FormatError::Serialization(message) => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for FormatError {}

#[derive(Serialize)]
struct FileReport<'a, T: Serialize> {
    file: &'a str,
    findings: &'a [T],
}

/// Render a structural diagnostics report for one file.
pub fn render_diagnostics(
    file: &str,
    diagnostics: &[Diagnostic],
    format: ReportFormat,
) -> Result<String, FormatError> {
    match format {
        ReportFormat::Text => Ok(diagnostics
            .iter()
            .map(|d| format!("{}:{}:{} - {}", file, d.line, d.column, d.message))
            .collect::<Vec<_>>()
            .join("\n")),
        ReportFormat::Json => to_json(&FileReport {
            file,
            findings: diagnostics,
        }),
        ReportFormat::Yaml => to_yaml(&FileReport {
            file,
            findings: diagnostics,
        }),
    }
}

/// Render a lint report for one file.
pub fn render_lint(
    file: &str,
    messages: &[LintMessage],
    format: ReportFormat,
) -> Result<String, FormatError> {
    match format {
        ReportFormat::Text => Ok(messages
            .iter()
            .map(|m| {
                format!(
                    "{}:{}:{} [{}] {} ({})",
                    file, m.line, m.column, m.severity, m.message, m.rule
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
        ReportFormat::Json => to_json(&FileReport {
            file,
            findings: messages,
        }),
        ReportFormat::Yaml => to_yaml(&FileReport {
            file,
            findings: messages,
        }),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, FormatError> {
    serde_json::to_string_pretty(value).map_err(|e| FormatError::Serialization(e.to_string()))
}

fn to_yaml<T: Serialize>(value: &T) -> Result<String, FormatError> {
    serde_yaml::to_string(value).map_err(|e| FormatError::Serialization(e.to_string()))
}
