//! Style linter: flags characters and patterns that defeat the shift-free
//! notation, plus the structural problems the diagnostics pass detects.
//!
//! Three scans feed one report:
//!
//! - the structural scan, shared with `diagnose`, mapped through rule
//!   names and severities;
//! - a lightweight style scan that only tracks "inside a string or comment
//!   or not" and flags raw uppercase letters, shifted symbols with a
//!   dedicated escape sequence, underscores and hashes;
//! - a line scan for the cosmetic rules.
//!
//! Rules set to `off` never appear in the output. Findings merge and come
//! back sorted by position.

pub mod config;
pub mod rules;

use crate::noshift::diagnose::{scan_structure, StructuralFinding};
use crate::noshift::diagnostics::{sort_by_position, LintMessage, Severity};
use crate::noshift::escape;
use crate::noshift::state::ContextKind;
use once_cell::sync::Lazy;
use regex::Regex;

pub use config::LintConfig;

/// Lint escape-notation source under the given configuration.
pub fn lint(source: &str, config: &LintConfig) -> Vec<LintMessage> {
    let mut messages: Vec<LintMessage> = Vec::new();

    let mut report = |rule: &'static str, line: usize, column: usize, message: String| {
        match config.severity(rule) {
            Severity::Off => {}
            severity => messages.push(LintMessage {
                line,
                column,
                message,
                severity,
                rule,
            }),
        }
    };

    for finding in scan_structure(source) {
        match finding {
            StructuralFinding::UnknownSequence { line, column, key } => report(
                rules::UNKNOWN_CARET_SEQUENCE,
                line,
                column,
                format!("Unknown sequence '^{}'.", key),
            ),
            StructuralFinding::LoneCaret { line, column } => report(
                rules::LONE_CARET,
                line,
                column,
                "Lone '^' at end of file.".to_string(),
            ),
            StructuralFinding::CapitalizeAtEof { line, column } => report(
                rules::CAPITALIZE_EOF,
                line,
                column,
                "^3 at end of file with no following character to capitalize.".to_string(),
            ),
            StructuralFinding::Unclosed(marker) => {
                let rule = match marker.kind {
                    ContextKind::DoubleQuoteString
                    | ContextKind::SingleQuoteString
                    | ContextKind::TemplateLiteral => rules::UNCLOSED_STRING,
                    ContextKind::BlockComment => rules::UNCLOSED_COMMENT,
                    ContextKind::TemplateExpression => rules::UNCLOSED_TEMPLATE_EXPR,
                };
                report(
                    rule,
                    marker.line,
                    marker.column,
                    format!("Unclosed {}.", marker.kind.label()),
                );
            }
        }
    }

    for finding in scan_style(source, config.capitalize_in_strings) {
        report(finding.rule, finding.line, finding.column, finding.message);
    }

    scan_lines(source, &mut report);

    sort_by_position(&mut messages, |m| (m.line, m.column));
    messages
}

struct StyleFinding {
    rule: &'static str,
    line: usize,
    column: usize,
    message: String,
}

/// The lightweight style scan. Tracks string and comment containment with
/// simple toggles rather than the full stack automaton; that is all the
/// stylistic rules need.
fn scan_style(source: &str, capitalize_in_strings: bool) -> Vec<StyleFinding> {
    let mut findings = Vec::new();
    let lines: Vec<Vec<char>> = source.split('\n').map(|l| l.chars().collect()).collect();

    let mut in_dq = false;
    let mut in_sq = false;
    let mut in_bt = false;
    let mut in_block_comment = false;

    for (line_idx, line) in lines.iter().enumerate() {
        let mut col = 0;
        while col < line.len() {
            let ch = line[col];
            let next = line.get(col + 1).copied();
            let lineno = line_idx + 1;
            let colno = col + 1;

            // `\^X` stays literal content.
            if ch == '\\' && next == Some('^') {
                col += 3;
                continue;
            }

            if in_block_comment {
                if ch == '^' && next == Some(':') && line.get(col + 2) == Some(&'/') {
                    in_block_comment = false;
                    col += 3;
                } else {
                    col += 1;
                }
                continue;
            }

            let in_string = in_dq || in_sq || in_bt;

            if !in_string && ch == '/' && next == Some('/') {
                // Rest of the line is comment.
                break;
            }
            if !in_string && ch == '/' && next == Some('^') && line.get(col + 2) == Some(&':') {
                in_block_comment = true;
                col += 3;
                continue;
            }

            // `^3` marks an intentional capital; skip the modifier and its
            // target.
            if ch == '^' && next == Some('3') {
                col += 3;
                continue;
            }

            // String delimiters toggle containment.
            if ch == '^' && next == Some('2') {
                in_dq = !in_dq;
                col += 2;
                continue;
            }
            if ch == '^' && next == Some('7') {
                in_sq = !in_sq;
                col += 2;
                continue;
            }
            if ch == '^' && next == Some('@') {
                in_bt = !in_bt;
                col += 2;
                continue;
            }

            if in_string {
                if capitalize_in_strings && ch.is_ascii_uppercase() {
                    findings.push(StyleFinding {
                        rule: rules::UPPERCASE_IN_CODE,
                        line: lineno,
                        column: colno,
                        message: format!(
                            "Uppercase letter '{}' found in string. Use ^3{} instead.",
                            ch,
                            ch.to_ascii_lowercase()
                        ),
                    });
                }
                col += 1;
                continue;
            }

            // Any other recognized escape sequence is already shift-free.
            if ch == '^' && matches!(next, Some(key) if escape::is_valid_escape_key(key)) {
                col += 2;
                continue;
            }

            if ch.is_ascii_uppercase() {
                findings.push(StyleFinding {
                    rule: rules::UPPERCASE_IN_CODE,
                    line: lineno,
                    column: colno,
                    message: format!(
                        "Uppercase letter '{}' found. Use ^3{} instead.",
                        ch,
                        ch.to_ascii_lowercase()
                    ),
                });
            } else if let Some(sequence) = escape::symbol_escape(ch) {
                findings.push(StyleFinding {
                    rule: rules::SHIFT_SYMBOL_IN_CODE,
                    line: lineno,
                    column: colno,
                    message: format!("Symbol '{}' found. Use {} instead.", ch, sequence),
                });
            } else if ch == '_' {
                findings.push(StyleFinding {
                    rule: rules::UNDERSCORE_IN_CODE,
                    line: lineno,
                    column: colno,
                    message: "Underscore '_' found in code.".to_string(),
                });
            } else if ch == '#' {
                findings.push(StyleFinding {
                    rule: rules::HASH_IN_CODE,
                    line: lineno,
                    column: colno,
                    message: "Hash '#' found in code.".to_string(),
                });
            }
            col += 1;
        }
    }

    findings
}

static TRAILING_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+$").expect("static pattern"));

/// Cosmetic, line-oriented rules.
fn scan_lines<F>(source: &str, report: &mut F)
where
    F: FnMut(&'static str, usize, usize, String),
{
    let lines: Vec<&str> = source.split('\n').collect();
    for (line_idx, line) in lines.iter().enumerate() {
        let lineno = line_idx + 1;

        if !line.is_empty() {
            if let Some(m) = TRAILING_WS.find(line) {
                let column = line[..m.start()].chars().count() + 1;
                report(
                    rules::TRAILING_WHITESPACE,
                    lineno,
                    column,
                    "Trailing whitespace.".to_string(),
                );
            }
        }

        if line_idx > 0 && line.trim().is_empty() && lines[line_idx - 1].trim().is_empty() {
            report(
                rules::NO_CONSECUTIVE_BLANK_LINES,
                lineno,
                1,
                "Consecutive blank lines.".to_string(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_code_produces_nothing() {
        assert_eq!(lint("const x ^- 1;", &LintConfig::default()), vec![]);
    }

    #[test]
    fn intentional_capitals_are_not_flagged() {
        let messages = lint("^3x", &LintConfig::default());
        assert!(messages.is_empty());
    }

    #[test]
    fn literal_caret_suggests_its_escape() {
        // `^x` is both an unknown sequence and a raw `^` symbol.
        let messages = lint("^x", &LintConfig::default());
        assert!(messages
            .iter()
            .any(|m| m.rule == rules::UNKNOWN_CARET_SEQUENCE));
        assert!(messages
            .iter()
            .any(|m| m.rule == rules::SHIFT_SYMBOL_IN_CODE && m.message.contains("^0")));
    }

    #[test]
    fn cosmetic_rules_need_opting_in() {
        let source = "const x ^- 1; \n\n\n";
        assert_eq!(lint(source, &LintConfig::default()), vec![]);

        let mut config = LintConfig::default();
        config
            .rules
            .insert(rules::TRAILING_WHITESPACE.to_string(), Severity::Warning);
        config.rules.insert(
            rules::NO_CONSECUTIVE_BLANK_LINES.to_string(),
            Severity::Warning,
        );
        let messages = lint(source, &config);
        assert!(messages.iter().any(|m| m.rule == rules::TRAILING_WHITESPACE));
        assert!(messages
            .iter()
            .any(|m| m.rule == rules::NO_CONSECUTIVE_BLANK_LINES));
    }
}
