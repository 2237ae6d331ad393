//! Forward converter: NoShift escape notation to JavaScript.
//!
//! A single left-to-right scan over the source drives a pushdown automaton
//! of lexical contexts. At each cursor position the steps are tried in
//! priority order:
//!
//! 1. Escaped content specific to the current string state (`\^3`, the
//!    escaped delimiter, doubled backslashes); the raw sub-states inside an
//!    interpolation are handled here entirely, delimiter included.
//! 2. The `^3` capitalize modifier.
//! 3. Comment open/close; comment content is copied through unchanged and
//!    never reinterpreted.
//! 4. Context open/close and interpolation, then general table
//!    substitution, longest sequence first.
//! 5. Copy one character.
//!
//! The converter is total: malformed input degrades to "consume to end of
//! input as if still inside the open context" and surfaces a best-effort
//! warning. The structural diagnostics pass stays the authoritative
//! validator.

use crate::noshift::diagnostics::Diagnostic;
use crate::noshift::escape;
use crate::noshift::state::LexState;

/// Options accepted by the forward and reverse converters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Apply the `^3` capitalize modifier inside string literals. When
    /// disabled, `^3` in a string stays literal text.
    pub capitalize_in_strings: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            capitalize_in_strings: true,
        }
    }
}

/// Converted text plus best-effort warnings about contexts left open at
/// end of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub output: String,
    pub warnings: Vec<Diagnostic>,
}

/// Convert NoShift escape notation to JavaScript. Total over any input.
pub fn convert(source: &str, options: &ConvertOptions) -> String {
    convert_with_warnings(source, options).output
}

/// Like [`convert`], but also returns warnings for contexts left open at
/// end of input.
pub fn convert_with_warnings(source: &str, options: &ConvertOptions) -> Conversion {
    Converter::new(source, options).run()
}

/// 1-based position just past the last character of the input.
pub(crate) fn end_position(chars: &[char]) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    for &c in chars {
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}

/// Warning for contexts still open when the input ran out.
pub(crate) fn unterminated_warning(
    chars: &[char],
    state: LexState,
    stack: &[LexState],
) -> Option<Diagnostic> {
    if stack.is_empty() {
        return None;
    }
    let (line, column) = end_position(chars);
    Some(Diagnostic {
        line,
        column,
        message: format!(
            "Input ended inside {}; {} enclosing context(s) closed implicitly.",
            state.label(),
            stack.len()
        ),
    })
}

struct Converter {
    chars: Vec<char>,
    pos: usize,
    out: String,
    state: LexState,
    stack: Vec<LexState>,
    capitalize_in_strings: bool,
}

impl Converter {
    fn new(source: &str, options: &ConvertOptions) -> Converter {
        Converter {
            chars: source.chars().collect(),
            pos: 0,
            out: String::with_capacity(source.len()),
            state: LexState::Normal,
            stack: Vec::new(),
            capitalize_in_strings: options.capitalize_in_strings,
        }
    }

    fn run(mut self) -> Conversion {
        while self.pos < self.chars.len() {
            if self.step_string_escape() {
                continue;
            }
            if self.step_capitalize() {
                continue;
            }
            if self.step_comment() {
                continue;
            }
            if self.step_sequence() {
                continue;
            }
            self.copy_char();
        }
        let warnings = unterminated_warning(&self.chars, self.state, &self.stack)
            .into_iter()
            .collect();
        Conversion {
            output: self.out,
            warnings,
        }
    }

    fn starts_with(&self, pattern: &str) -> bool {
        let mut pos = self.pos;
        for expected in pattern.chars() {
            match self.chars.get(pos) {
                Some(&c) if c == expected => pos += 1,
                _ => return false,
            }
        }
        true
    }

    fn copy_char(&mut self) {
        if let Some(&c) = self.chars.get(self.pos) {
            self.out.push(c);
            self.pos += 1;
        }
    }

    fn emit(&mut self, text: &str, consumed: usize) {
        self.out.push_str(text);
        self.pos += consumed;
    }

    fn push_state(&mut self, next: LexState) {
        self.stack.push(self.state);
        self.state = next;
    }

    fn pop_state(&mut self) {
        self.state = self.stack.pop().unwrap_or(LexState::Normal);
    }

    /// Escaped content inside string states. `\^3` and the escaped own
    /// delimiter become literal sequence text in the output; `\\` is
    /// doubled so the target language's own escaping survives. The raw
    /// sub-states never fall through: everything in them is verbatim
    /// except their closing delimiter.
    fn step_string_escape(&mut self) -> bool {
        match self.state {
            LexState::DoubleQuoteString => {
                if self.starts_with("\\^3") {
                    self.emit("^3", 3);
                } else if self.starts_with("\\^2") {
                    self.emit("^2", 3);
                } else if self.starts_with("\\\\") {
                    self.emit("\\\\\\\\", 2);
                } else {
                    return false;
                }
                true
            }
            LexState::SingleQuoteString => {
                if self.starts_with("\\^3") {
                    self.emit("^3", 3);
                } else if self.starts_with("\\^7") {
                    self.emit("^7", 3);
                } else if self.starts_with("\\\\") {
                    self.emit("\\\\\\\\", 2);
                } else {
                    return false;
                }
                true
            }
            LexState::TemplateLiteral => {
                if self.starts_with("\\^3") {
                    self.emit("^3", 3);
                } else if self.starts_with("\\^@") {
                    self.emit("^@", 3);
                } else if self.starts_with("\\\\") {
                    self.emit("\\\\\\\\", 2);
                } else {
                    return false;
                }
                true
            }
            LexState::RawDoubleQuoteInExpression => {
                if self.starts_with("\\^3") {
                    self.emit("^3", 3);
                } else if self.starts_with("\\^2") {
                    self.emit("^2", 3);
                } else if self.starts_with("\\\\") {
                    self.emit("\\\\\\\\", 2);
                } else if self.starts_with("^2") {
                    self.emit("\"", 2);
                    self.pop_state();
                } else {
                    self.copy_char();
                }
                true
            }
            LexState::RawSingleQuoteInExpression => {
                if self.starts_with("\\^3") {
                    self.emit("^3", 3);
                } else if self.starts_with("\\^7") {
                    self.emit("^7", 3);
                } else if self.starts_with("\\\\") {
                    self.emit("\\\\\\\\", 2);
                } else if self.starts_with("^7") {
                    self.emit("'", 2);
                    self.pop_state();
                } else {
                    self.copy_char();
                }
                true
            }
            _ => false,
        }
    }

    /// `^3` upper-cases the next character. Active in code always, in
    /// strings only under the capitalize-in-strings policy, never in raw or
    /// comment states. At end of input the modifier consumes and emits
    /// nothing; the diagnostics pass reports that case.
    fn step_capitalize(&mut self) -> bool {
        if self.state.is_raw() || self.state.is_comment() {
            return false;
        }
        if !self.starts_with(escape::CAPITALIZE_MODIFIER) {
            return false;
        }
        if self.state.is_string() && !self.capitalize_in_strings {
            return false;
        }
        self.pos += 2;
        if let Some(&c) = self.chars.get(self.pos) {
            self.out.extend(c.to_uppercase());
            self.pos += 1;
        }
        true
    }

    fn step_comment(&mut self) -> bool {
        match self.state {
            LexState::Normal if self.starts_with("//") => {
                self.emit("//", 2);
                self.push_state(LexState::LineComment);
                true
            }
            LexState::LineComment => {
                if self.starts_with("\n") {
                    self.out.push('\n');
                    self.pos += 1;
                    self.pop_state();
                } else {
                    self.copy_char();
                }
                true
            }
            LexState::Normal if self.starts_with("/^:") => {
                self.emit("/*", 3);
                self.push_state(LexState::BlockComment);
                true
            }
            LexState::BlockComment if self.starts_with("^:/") => {
                self.emit("*/", 3);
                self.pop_state();
                true
            }
            LexState::BlockComment => {
                self.copy_char();
                true
            }
            _ => false,
        }
    }

    /// Context open/close, interpolation, and general table substitution,
    /// longest sequence first.
    fn step_sequence(&mut self) -> bool {
        let allow_general = matches!(
            self.state,
            LexState::Normal | LexState::TemplateExpression
        );

        for &(seq, symbol) in escape::sequences_longest_first() {
            if !self.starts_with(seq) {
                continue;
            }

            // Interpolation open inside a template literal. The short form
            // `^4[` rides on the `^4` table entry.
            if (seq == escape::INTERPOLATION_OPEN
                || self.starts_with(escape::INTERPOLATION_OPEN_SHORT))
                && self.state == LexState::TemplateLiteral
            {
                let consumed = if seq == escape::INTERPOLATION_OPEN { 4 } else { 3 };
                self.emit("${", consumed);
                self.push_state(LexState::TemplateExpression);
                return true;
            }

            // Interpolation close.
            if seq == escape::INTERPOLATION_CLOSE && self.state == LexState::TemplateExpression {
                self.emit("}", 2);
                self.pop_state();
                return true;
            }

            // String delimiters toggle their state, symmetric open/close.
            if seq == "^2" && self.state == LexState::Normal {
                self.emit("\"", 2);
                self.push_state(LexState::DoubleQuoteString);
                return true;
            }
            if seq == "^2" && self.state == LexState::DoubleQuoteString {
                self.emit("\"", 2);
                self.pop_state();
                return true;
            }
            if seq == "^7" && self.state == LexState::Normal {
                self.emit("'", 2);
                self.push_state(LexState::SingleQuoteString);
                return true;
            }
            if seq == "^7" && self.state == LexState::SingleQuoteString {
                self.emit("'", 2);
                self.pop_state();
                return true;
            }

            // Template literal delimiter.
            if seq == "^@"
                && matches!(self.state, LexState::Normal | LexState::TemplateExpression)
            {
                self.emit("`", 2);
                self.push_state(LexState::TemplateLiteral);
                return true;
            }
            if seq == "^@" && self.state == LexState::TemplateLiteral {
                self.emit("`", 2);
                self.pop_state();
                return true;
            }

            // String delimiters inside an interpolation open raw sub-states:
            // the nested string is ordinary target-language code.
            if seq == "^2" && self.state == LexState::TemplateExpression {
                self.emit("\"", 2);
                self.push_state(LexState::RawDoubleQuoteInExpression);
                return true;
            }
            if seq == "^7" && self.state == LexState::TemplateExpression {
                self.emit("'", 2);
                self.push_state(LexState::RawSingleQuoteInExpression);
                return true;
            }

            if allow_general {
                self.emit(symbol, seq.len());
                return true;
            }
        }

        false
    }
}
