//! Structural diagnostics: detects malformed escape notation without
//! producing output text.
//!
//! The scanner runs the same context transitions as the forward converter
//! but only tracks entry/exit of contexts and their opening positions.
//! Detected conditions:
//!
//! - unknown `^` sequences (second character outside the valid set)
//! - a lone `^` at end of input
//! - `^3` at end of input with nothing left to capitalize
//! - unclosed strings, template literals, block comments and
//!   interpolations, reported for every open marker in
//!   most-recently-opened-first order
//!
//! The scanner is also the structural half of the linter, so both passes
//! always agree on structural findings.

use crate::noshift::diagnostics::{sort_by_position, Diagnostic};
use crate::noshift::escape;
use crate::noshift::state::{ContextKind, LexState, OpenMarker};

/// A raw structural finding, before either consumer turns it into a
/// diagnostic or a lint message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StructuralFinding {
    UnknownSequence { line: usize, column: usize, key: char },
    LoneCaret { line: usize, column: usize },
    CapitalizeAtEof { line: usize, column: usize },
    Unclosed(OpenMarker),
}

/// Run structural diagnostics over escape-notation source. Pure; returns
/// findings sorted by (line, column), stable so unclosed constructs at the
/// same position keep stack-unwind order.
pub fn diagnose(source: &str) -> Vec<Diagnostic> {
    let mut diagnostics: Vec<Diagnostic> = scan_structure(source)
        .into_iter()
        .map(|finding| match finding {
            StructuralFinding::UnknownSequence { line, column, key } => Diagnostic {
                line,
                column,
                message: format!("Unknown sequence '^{}'.", key),
            },
            StructuralFinding::LoneCaret { line, column } => Diagnostic {
                line,
                column,
                message: "Lone '^' at end of file.".to_string(),
            },
            StructuralFinding::CapitalizeAtEof { line, column } => Diagnostic {
                line,
                column,
                message: "^3 at end of file with no following character to capitalize."
                    .to_string(),
            },
            StructuralFinding::Unclosed(marker) => Diagnostic {
                line: marker.line,
                column: marker.column,
                message: format!("Unclosed {} opened here.", marker.kind.label()),
            },
        })
        .collect();
    sort_by_position(&mut diagnostics, |d| (d.line, d.column));
    diagnostics
}

/// The shared structural scanner. Escaped sequences (`\^X`, `\\`) never
/// open or close anything; line comments end at the newline; everything
/// else follows the converter's transitions.
pub(crate) fn scan_structure(source: &str) -> Vec<StructuralFinding> {
    let mut findings = Vec::new();
    let lines: Vec<Vec<char>> = source.split('\n').map(|l| l.chars().collect()).collect();
    let last_line = lines.len() - 1;

    let mut state = LexState::Normal;
    let mut stack: Vec<LexState> = Vec::new();
    let mut open_markers: Vec<OpenMarker> = Vec::new();

    for (line_idx, line) in lines.iter().enumerate() {
        // Line comments end at the newline.
        if state == LexState::LineComment {
            state = stack.pop().unwrap_or(LexState::Normal);
        }

        let mut col = 0;
        while col < line.len() {
            let ch = line[col];
            let next = line.get(col + 1).copied();
            let next2 = line.get(col + 2).copied();
            let lineno = line_idx + 1;
            let colno = col + 1;

            // Escaped sequences stay literal content.
            if ch == '\\' && next == Some('^') {
                col += 3;
                continue;
            }
            if ch == '\\' && next == Some('\\') {
                col += 2;
                continue;
            }

            match state {
                LexState::BlockComment => {
                    if ch == '^' && next == Some(':') && next2 == Some('/') {
                        state = stack.pop().unwrap_or(LexState::Normal);
                        open_markers.pop();
                        col += 3;
                    } else {
                        col += 1;
                    }
                    continue;
                }
                LexState::DoubleQuoteString => {
                    if ch == '^' && next == Some('2') {
                        state = stack.pop().unwrap_or(LexState::Normal);
                        open_markers.pop();
                        col += 2;
                    } else {
                        col += 1;
                    }
                    continue;
                }
                LexState::SingleQuoteString => {
                    if ch == '^' && next == Some('7') {
                        state = stack.pop().unwrap_or(LexState::Normal);
                        open_markers.pop();
                        col += 2;
                    } else {
                        col += 1;
                    }
                    continue;
                }
                LexState::TemplateLiteral => {
                    if ch == '^' && next == Some('4') && matches!(next2, Some('^') | Some('[')) {
                        if next2 == Some('^') && line.get(col + 3) == Some(&'[') {
                            stack.push(state);
                            open_markers.push(OpenMarker {
                                line: lineno,
                                column: colno,
                                kind: ContextKind::TemplateExpression,
                            });
                            state = LexState::TemplateExpression;
                            col += 4;
                        } else if next2 == Some('[') {
                            stack.push(state);
                            open_markers.push(OpenMarker {
                                line: lineno,
                                column: colno,
                                kind: ContextKind::TemplateExpression,
                            });
                            state = LexState::TemplateExpression;
                            col += 3;
                        } else {
                            col += 1;
                        }
                        continue;
                    }
                    if ch == '^' && next == Some('@') {
                        state = stack.pop().unwrap_or(LexState::Normal);
                        open_markers.pop();
                        col += 2;
                    } else {
                        col += 1;
                    }
                    continue;
                }
                LexState::TemplateExpression => {
                    if ch == '^' && next == Some(']') {
                        state = stack.pop().unwrap_or(LexState::Normal);
                        open_markers.pop();
                        col += 2;
                        continue;
                    }
                    // Otherwise the interpolation interior scans like code.
                }
                _ => {}
            }

            // Normal code and interpolation interiors.
            if ch == '/' && next == Some('/') {
                stack.push(state);
                state = LexState::LineComment;
                break;
            }
            if ch == '/' && next == Some('^') && next2 == Some(':') {
                stack.push(state);
                open_markers.push(OpenMarker {
                    line: lineno,
                    column: colno,
                    kind: ContextKind::BlockComment,
                });
                state = LexState::BlockComment;
                col += 3;
                continue;
            }
            if ch == '^' && next == Some('2') {
                stack.push(state);
                open_markers.push(OpenMarker {
                    line: lineno,
                    column: colno,
                    kind: ContextKind::DoubleQuoteString,
                });
                state = LexState::DoubleQuoteString;
                col += 2;
                continue;
            }
            if ch == '^' && next == Some('7') {
                stack.push(state);
                open_markers.push(OpenMarker {
                    line: lineno,
                    column: colno,
                    kind: ContextKind::SingleQuoteString,
                });
                state = LexState::SingleQuoteString;
                col += 2;
                continue;
            }
            if ch == '^' && next == Some('@') {
                stack.push(state);
                open_markers.push(OpenMarker {
                    line: lineno,
                    column: colno,
                    kind: ContextKind::TemplateLiteral,
                });
                state = LexState::TemplateLiteral;
                col += 2;
                continue;
            }
            if ch == '^' && next == Some('3') {
                if col + 2 >= line.len() && line_idx == last_line {
                    findings.push(StructuralFinding::CapitalizeAtEof {
                        line: lineno,
                        column: colno,
                    });
                }
                // `^3` plus the character it capitalizes.
                col += 3;
                continue;
            }
            if ch == '^' {
                match next {
                    Some(key) => {
                        if !escape::is_valid_escape_key(key) {
                            findings.push(StructuralFinding::UnknownSequence {
                                line: lineno,
                                column: colno,
                                key,
                            });
                        }
                        col += 2;
                        continue;
                    }
                    None => {
                        if line_idx == last_line {
                            findings.push(StructuralFinding::LoneCaret {
                                line: lineno,
                                column: colno,
                            });
                        }
                        col += 1;
                        continue;
                    }
                }
            }

            col += 1;
        }
    }

    // Everything still open unwinds most-recently-opened first.
    while let Some(marker) = open_markers.pop() {
        findings.push(StructuralFinding::Unclosed(marker));
    }

    findings
}
