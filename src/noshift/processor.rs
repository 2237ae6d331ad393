//! File-level compilation pipeline used by the CLI.
//!
//! Per file the pipeline is: read, run structural diagnostics (any finding
//! is a hard stop, the file is not written), collect style warnings when
//! enabled, convert, prepend the generated header, write the `.js` output
//! mirroring the source path under the output directory.

use crate::noshift::config::CompilerOptions;
use crate::noshift::convert::{convert, ConvertOptions};
use crate::noshift::diagnose::diagnose;
use crate::noshift::diagnostics::{Diagnostic, LintMessage, Severity};
use crate::noshift::lint::{lint, LintConfig};
use ignore::WalkBuilder;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of NoShift source files.
pub const SOURCE_EXTENSION: &str = "nsjs";

/// Extension of compiled output files.
pub const OUTPUT_EXTENSION: &str = "js";

/// Header prepended to generated files unless suppressed.
pub const GENERATED_HEADER: &str = "// Generated by nsc. Edit the .nsjs source instead.\n";

#[derive(Debug)]
pub enum ProcessingError {
    RootDirNotFound(String),
    Io { path: String, message: String },
    Syntax { path: String, errors: Vec<Diagnostic> },
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::RootDirNotFound(dir) => write!(f, "rootdir '{}' not found.", dir),
            ProcessingError::Io { path, message } => write!(f, "{}: {}", path, message),
            ProcessingError::Syntax { path, errors } => {
                write!(f, "{}: {} syntax error(s)", path, errors.len())
            }
        }
    }
}

impl std::error::Error for ProcessingError {}

/// Discover `.nsjs` sources under `root`. Files whose basename starts with
/// `_` are partials and skipped. Results are sorted for deterministic
/// build order.
pub fn find_source_files(root: &Path) -> Result<Vec<PathBuf>, ProcessingError> {
    if !root.is_dir() {
        return Err(ProcessingError::RootDirNotFound(
            root.display().to_string(),
        ));
    }
    let mut files = Vec::new();
    for entry in WalkBuilder::new(root).build().flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(SOURCE_EXTENSION) {
            continue;
        }
        let hidden_partial = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with('_'))
            .unwrap_or(false);
        if hidden_partial {
            continue;
        }
        files.push(path.to_path_buf());
    }
    files.sort();
    Ok(files)
}

/// Result of compiling one file.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledFile {
    pub source: PathBuf,
    pub output: PathBuf,
    pub style_warnings: Vec<LintMessage>,
}

/// Compile one source file into `out_dir`, mirroring its path under
/// `root`.
pub fn compile_file(
    file: &Path,
    root: &Path,
    out_dir: &Path,
    options: &CompilerOptions,
    no_header: bool,
) -> Result<CompiledFile, ProcessingError> {
    let code = fs::read_to_string(file).map_err(|e| ProcessingError::Io {
        path: file.display().to_string(),
        message: e.to_string(),
    })?;

    let errors = diagnose(&code);
    if !errors.is_empty() {
        return Err(ProcessingError::Syntax {
            path: file.display().to_string(),
            errors,
        });
    }

    let style_warnings = if options.warnuppercase {
        let lint_config = LintConfig {
            capitalize_in_strings: options.capitalizeinstrings,
            ..LintConfig::default()
        };
        lint(&code, &lint_config)
            .into_iter()
            .filter(|m| m.severity == Severity::Warning)
            .collect()
    } else {
        Vec::new()
    };

    let convert_options = ConvertOptions {
        capitalize_in_strings: options.capitalizeinstrings,
    };
    let mut js = convert(&code, &convert_options);
    if !(no_header || options.noheader) {
        js = format!("{}{}", GENERATED_HEADER, js);
    }

    let relative = file.strip_prefix(root).unwrap_or(file);
    let dest = out_dir.join(relative).with_extension(OUTPUT_EXTENSION);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| ProcessingError::Io {
            path: parent.display().to_string(),
            message: e.to_string(),
        })?;
    }
    fs::write(&dest, js).map_err(|e| ProcessingError::Io {
        path: dest.display().to_string(),
        message: e.to_string(),
    })?;

    Ok(CompiledFile {
        source: file.to_path_buf(),
        output: dest,
        style_warnings,
    })
}
