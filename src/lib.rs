//! # noshift
//!
//! Transcoder and linter for the NoShift escape notation, where every
//! symbol that needs a modifier key is written as a `^`-prefixed sequence.
//!
//! Four pure functions form the boundary: [`convert`] (escape notation to
//! JavaScript), [`diagnose`] (structural errors), [`lint`] (style and
//! structure under configurable severities) and [`reverse_convert`]
//! (JavaScript back to escape notation). None of them share mutable state
//! or perform I/O; the escape table is the only shared, read-only
//! resource.

pub mod noshift;

pub use noshift::convert::{convert, convert_with_warnings, Conversion, ConvertOptions};
pub use noshift::diagnose::diagnose;
pub use noshift::diagnostics::{Diagnostic, LintMessage, Severity};
pub use noshift::lint::{lint, LintConfig};
pub use noshift::reverse::{reverse_convert, reverse_convert_with_warnings};
