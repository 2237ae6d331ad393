//! The escape table: the canonical mapping between `^`-prefixed sequences
//! and the shifted symbols they stand for.
//!
//! The table is a fixed wire format shared by every tool in the chain.
//! Entries are matched longest sequence first so the compound interpolation
//! opener `^4^[` is never shadowed by the plain `^4` entry. A small subset
//! of entries (single-character symbols) has a trivial inverse used by the
//! reverse converter and the style linter.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// The capitalize modifier. Not a substitution: it upper-cases exactly the
/// one character that follows it.
pub const CAPITALIZE_MODIFIER: &str = "^3";

/// Compound trigger opening a template interpolation.
pub const INTERPOLATION_OPEN: &str = "^4^[";

/// Short form of the interpolation opener, accepted on input and
/// normalized to [`INTERPOLATION_OPEN`] by a round-trip.
pub const INTERPOLATION_OPEN_SHORT: &str = "^4[";

/// Trigger closing a template interpolation.
pub const INTERPOLATION_CLOSE: &str = "^]";

/// The full escape table as `(sequence, symbol)` pairs.
pub const ESCAPE_TABLE: &[(&str, &str)] = &[
    (INTERPOLATION_OPEN, "${"),
    ("^0", "^"),
    ("^1", "!"),
    ("^2", "\""),
    ("^4", "$"),
    ("^5", "%"),
    ("^6", "&"),
    ("^7", "'"),
    ("^8", "("),
    ("^9", ")"),
    ("^-", "="),
    ("^^", "~"),
    ("^\\", "|"),
    ("^@", "`"),
    ("^[", "{"),
    ("^]", "}"),
    ("^;", "+"),
    ("^:", "*"),
    ("^,", "<"),
    ("^.", ">"),
    ("^/", "?"),
];

static SEQUENCES_LONGEST_FIRST: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    let mut entries = ESCAPE_TABLE.to_vec();
    // Stable sort: entries of equal length keep their table order.
    entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    entries
});

/// Table entries ordered longest sequence first, the order the converters
/// must try them in.
pub fn sequences_longest_first() -> &'static [(&'static str, &'static str)] {
    &SEQUENCES_LONGEST_FIRST
}

static SYMBOL_TO_SEQUENCE: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    ESCAPE_TABLE
        .iter()
        .filter_map(|&(seq, symbol)| {
            let mut chars = symbol.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if seq.len() == 2 => Some((c, seq)),
                _ => None,
            }
        })
        .collect()
});

/// The escape sequence for a single shifted symbol, if it has one.
pub fn symbol_escape(symbol: char) -> Option<&'static str> {
    SYMBOL_TO_SEQUENCE.get(&symbol).copied()
}

static VALID_ESCAPE_KEYS: Lazy<HashSet<char>> = Lazy::new(|| {
    let mut keys: HashSet<char> = ESCAPE_TABLE
        .iter()
        .filter_map(|&(seq, _)| seq.chars().nth(1))
        .collect();
    // The capitalize modifier is valid but not a table entry.
    keys.insert('3');
    keys
});

/// Whether `key` is valid as the second character of an escape sequence.
pub fn is_valid_escape_key(key: char) -> bool {
    VALID_ESCAPE_KEYS.contains(&key)
}
