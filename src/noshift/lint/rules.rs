//! Built-in lint rules and their default severities.
//!
//! Rule names are a compatibility surface: existing `nsjslinter.json`
//! files reference them by name. Structural rules default to `error`,
//! stylistic rules to `warning`, cosmetic rules to `off`.

use crate::noshift::diagnostics::Severity;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const UNCLOSED_STRING: &str = "unclosed-string";
pub const UNCLOSED_COMMENT: &str = "unclosed-comment";
pub const UNCLOSED_TEMPLATE_EXPR: &str = "unclosed-template-expr";
pub const UNKNOWN_CARET_SEQUENCE: &str = "unknown-caret-sequence";
pub const LONE_CARET: &str = "lone-caret";
pub const CAPITALIZE_EOF: &str = "capitalize-eof";
pub const UPPERCASE_IN_CODE: &str = "uppercase-in-code";
pub const SHIFT_SYMBOL_IN_CODE: &str = "shift-symbol-in-code";
pub const UNDERSCORE_IN_CODE: &str = "underscore-in-code";
pub const HASH_IN_CODE: &str = "hash-in-code";
pub const TRAILING_WHITESPACE: &str = "trailing-whitespace";
pub const NO_CONSECUTIVE_BLANK_LINES: &str = "no-consecutive-blank-lines";

/// Every rule with its default severity.
pub const DEFAULT_RULES: &[(&str, Severity)] = &[
    (UNCLOSED_STRING, Severity::Error),
    (UNCLOSED_COMMENT, Severity::Error),
    (UNCLOSED_TEMPLATE_EXPR, Severity::Error),
    (UNKNOWN_CARET_SEQUENCE, Severity::Error),
    (LONE_CARET, Severity::Error),
    (CAPITALIZE_EOF, Severity::Error),
    (UPPERCASE_IN_CODE, Severity::Warning),
    (SHIFT_SYMBOL_IN_CODE, Severity::Warning),
    (UNDERSCORE_IN_CODE, Severity::Warning),
    (HASH_IN_CODE, Severity::Warning),
    (TRAILING_WHITESPACE, Severity::Off),
    (NO_CONSECUTIVE_BLANK_LINES, Severity::Off),
];

static DEFAULTS: Lazy<HashMap<&'static str, Severity>> =
    Lazy::new(|| DEFAULT_RULES.iter().copied().collect());

/// All rule names, in the documented order.
pub fn rule_names() -> Vec<&'static str> {
    DEFAULT_RULES.iter().map(|&(name, _)| name).collect()
}

/// Default severity for a rule; unknown rules are off.
pub fn default_severity(rule: &str) -> Severity {
    DEFAULTS.get(rule).copied().unwrap_or(Severity::Off)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_rules_default_to_error() {
        for rule in [
            UNCLOSED_STRING,
            UNCLOSED_COMMENT,
            UNCLOSED_TEMPLATE_EXPR,
            UNKNOWN_CARET_SEQUENCE,
            LONE_CARET,
            CAPITALIZE_EOF,
        ] {
            assert_eq!(default_severity(rule), Severity::Error, "{}", rule);
        }
    }

    #[test]
    fn cosmetic_rules_default_to_off() {
        assert_eq!(default_severity(TRAILING_WHITESPACE), Severity::Off);
        assert_eq!(default_severity(NO_CONSECUTIVE_BLANK_LINES), Severity::Off);
        assert_eq!(default_severity("not-a-rule"), Severity::Off);
    }
}
