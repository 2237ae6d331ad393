//! Subcommand implementations. Each returns a process exit code; all
//! transcoding goes through the library's four entry points.

use crate::logger;
use noshift::noshift::config::{NsjsConfig, CONFIG_FILE_NAME};
use noshift::noshift::convert::ConvertOptions;
use noshift::noshift::diagnose::diagnose;
use noshift::noshift::diagnostics::Severity;
use noshift::noshift::formats::{render_diagnostics, render_lint, ReportFormat};
use noshift::noshift::lint::config::LINT_CONFIG_FILE_NAME;
use noshift::noshift::lint::{lint, LintConfig};
use noshift::noshift::processor::{self, ProcessingError};
use noshift::noshift::reverse::reverse_convert_with_warnings;
use std::fs;
use std::path::{Path, PathBuf};

fn working_dir() -> Result<PathBuf, i32> {
    std::env::current_dir().map_err(|e| {
        logger::error(&format!("Cannot determine working directory: {}", e));
        1
    })
}

fn load_config(cwd: &Path) -> Result<NsjsConfig, i32> {
    NsjsConfig::load(cwd).map_err(|e| {
        logger::error_code("NS0", &e.to_string());
        1
    })
}

fn relative_display(path: &Path, base: &Path) -> String {
    path.strip_prefix(base).unwrap_or(path).display().to_string()
}

/// Compile every source under the configured rootdir. Returns
/// `(compiled, failed)` counts; configuration-level failures short-circuit
/// with an exit code.
pub fn compile_all(cwd: &Path, config: &NsjsConfig, no_header: bool) -> Result<(usize, usize), i32> {
    let root = cwd.join(&config.compileroptions.rootdir);
    let out = cwd.join(&config.compileroptions.outdir);
    let files = match processor::find_source_files(&root) {
        Ok(files) => files,
        Err(ProcessingError::RootDirNotFound(_)) => {
            logger::error_code(
                "NS0",
                &format!("rootdir '{}' not found.", config.compileroptions.rootdir),
            );
            return Err(1);
        }
        Err(e) => {
            logger::error_code("NS0", &e.to_string());
            return Err(1);
        }
    };
    if files.is_empty() {
        logger::info("No .nsjs files found.");
        return Ok((0, 0));
    }

    let mut compiled = 0;
    let mut failed = 0;
    for file in &files {
        if compile_one(file, &root, &out, config, no_header, cwd) {
            compiled += 1;
        } else {
            failed += 1;
        }
    }
    Ok((compiled, failed))
}

/// Compile one file, logging warnings and errors. Returns success.
pub fn compile_one(
    file: &Path,
    root: &Path,
    out: &Path,
    config: &NsjsConfig,
    no_header: bool,
    cwd: &Path,
) -> bool {
    let rel = relative_display(file, root);
    match processor::compile_file(file, root, out, &config.compileroptions, no_header) {
        Ok(result) => {
            for w in &result.style_warnings {
                logger::warn(&format!("{}:{}:{} - {}", rel, w.line, w.column, w.message));
            }
            logger::dim(&format!(
                "{} \u{2192} {}",
                rel,
                relative_display(&result.output, cwd)
            ));
            true
        }
        Err(ProcessingError::Syntax { errors, .. }) => {
            for d in &errors {
                logger::error_code("NS1", &format!("{}:{}:{} - {}", rel, d.line, d.column, d.message));
            }
            false
        }
        Err(e) => {
            logger::error_code("NS1", &format!("{}: {}", rel, e));
            false
        }
    }
}

pub fn build(no_header: bool) -> i32 {
    let cwd = match working_dir() {
        Ok(d) => d,
        Err(code) => return code,
    };
    let config = match load_config(&cwd) {
        Ok(c) => c,
        Err(code) => return code,
    };
    match compile_all(&cwd, &config, no_header) {
        Ok((compiled, 0)) => {
            logger::success(&format!("Compiled {} file(s).", compiled));
            0
        }
        Ok((compiled, failed)) => {
            logger::error(&format!("Compiled {} file(s), {} failed.", compiled, failed));
            1
        }
        Err(code) => code,
    }
}

pub fn check(files: &[String], format_name: &str) -> i32 {
    let format = match ReportFormat::parse(format_name) {
        Ok(f) => f,
        Err(e) => {
            logger::error(&e.to_string());
            return 2;
        }
    };

    let mut total = 0;
    let mut unreadable = 0;
    for file in files {
        let source = match fs::read_to_string(file) {
            Ok(s) => s,
            Err(e) => {
                logger::error(&format!("{}: {}", file, e));
                unreadable += 1;
                continue;
            }
        };
        let diagnostics = diagnose(&source);
        total += diagnostics.len();
        if diagnostics.is_empty() && format == ReportFormat::Text {
            continue;
        }
        match render_diagnostics(file, &diagnostics, format) {
            Ok(rendered) => println!("{}", rendered),
            Err(e) => {
                logger::error(&e.to_string());
                return 2;
            }
        }
    }
    if total > 0 || unreadable > 0 {
        1
    } else {
        0
    }
}

pub fn lint_run(file_args: &[String], format_name: &str) -> i32 {
    let format = match ReportFormat::parse(format_name) {
        Ok(f) => f,
        Err(e) => {
            logger::error(&e.to_string());
            return 2;
        }
    };
    let cwd = match working_dir() {
        Ok(d) => d,
        Err(code) => return code,
    };
    let lint_config = match LintConfig::load(&cwd.join(LINT_CONFIG_FILE_NAME)) {
        Ok(c) => c,
        Err(e) => {
            logger::error_code("NS0", &e.to_string());
            return 1;
        }
    };

    let files: Vec<PathBuf> = if file_args.is_empty() {
        let config = match load_config(&cwd) {
            Ok(c) => c,
            Err(code) => return code,
        };
        let root = cwd.join(&config.compileroptions.rootdir);
        match processor::find_source_files(&root) {
            Ok(files) => files,
            Err(e) => {
                logger::error_code("NS0", &e.to_string());
                return 1;
            }
        }
    } else {
        file_args.iter().map(|f| cwd.join(f)).collect()
    };
    if files.is_empty() {
        logger::info("No .nsjs files found.");
        return 0;
    }

    let mut error_count = 0;
    let mut warning_count = 0;
    for file in &files {
        let source = match fs::read_to_string(file) {
            Ok(s) => s,
            Err(e) => {
                logger::error(&format!("{}: {}", file.display(), e));
                error_count += 1;
                continue;
            }
        };
        let messages = lint(&source, &lint_config);
        for m in &messages {
            match m.severity {
                Severity::Error => error_count += 1,
                _ => warning_count += 1,
            }
        }
        if messages.is_empty() && format == ReportFormat::Text {
            continue;
        }
        let rel = relative_display(file, &cwd);
        match render_lint(&rel, &messages, format) {
            Ok(rendered) => println!("{}", rendered),
            Err(e) => {
                logger::error(&e.to_string());
                return 2;
            }
        }
    }

    if error_count + warning_count > 0 {
        logger::info(&format!(
            "{} problem(s) ({} error(s), {} warning(s))",
            error_count + warning_count,
            error_count,
            warning_count
        ));
    }
    if error_count > 0 {
        1
    } else {
        0
    }
}

pub fn lint_init() -> i32 {
    let cwd = match working_dir() {
        Ok(d) => d,
        Err(code) => return code,
    };
    let path = cwd.join(LINT_CONFIG_FILE_NAME);
    if path.exists() {
        logger::info(&format!("{} already exists.", LINT_CONFIG_FILE_NAME));
        return 0;
    }
    let config = LintConfig::with_defaults();
    let json = match serde_json::to_string_pretty(&config) {
        Ok(j) => j,
        Err(e) => {
            logger::error(&format!("Failed to serialize default config: {}", e));
            return 1;
        }
    };
    match fs::write(&path, format!("{}\n", json)) {
        Ok(()) => {
            logger::success(&format!("Created {}", LINT_CONFIG_FILE_NAME));
            0
        }
        Err(e) => {
            logger::error(&format!("Failed to write {}: {}", path.display(), e));
            1
        }
    }
}

pub fn reverse(file: &str, output: Option<&String>) -> i32 {
    let cwd = match working_dir() {
        Ok(d) => d,
        Err(code) => return code,
    };
    let config = match load_config(&cwd) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let source = match fs::read_to_string(file) {
        Ok(s) => s,
        Err(e) => {
            logger::error(&format!("{}: {}", file, e));
            return 1;
        }
    };
    let options = ConvertOptions {
        capitalize_in_strings: config.compileroptions.capitalizeinstrings,
    };
    let result = reverse_convert_with_warnings(&source, &options);
    for w in &result.warnings {
        logger::warn(&format!("{}:{}:{} - {}", file, w.line, w.column, w.message));
    }
    match output {
        Some(path) => match fs::write(path, &result.output) {
            Ok(()) => {
                logger::success(&format!("Wrote {}", path));
                0
            }
            Err(e) => {
                logger::error(&format!("{}: {}", path, e));
                1
            }
        },
        None => {
            print!("{}", result.output);
            0
        }
    }
}

pub fn init() -> i32 {
    let cwd = match working_dir() {
        Ok(d) => d,
        Err(code) => return code,
    };
    let path = cwd.join(CONFIG_FILE_NAME);
    if path.exists() {
        logger::warn(&format!(
            "{} already exists in the current directory.",
            CONFIG_FILE_NAME
        ));
        return 0;
    }
    let config = NsjsConfig::default();
    let json = match serde_json::to_string_pretty(&config) {
        Ok(j) => j,
        Err(e) => {
            logger::error(&format!("Failed to serialize default config: {}", e));
            return 1;
        }
    };
    match fs::write(&path, format!("{}\n", json)) {
        Ok(()) => {
            logger::success(&format!("Created {}", CONFIG_FILE_NAME));
            logger::dim(&format!(
                "  compileroptions.rootdir : {}",
                config.compileroptions.rootdir
            ));
            logger::dim(&format!(
                "  compileroptions.outdir  : {}",
                config.compileroptions.outdir
            ));
            0
        }
        Err(e) => {
            logger::error(&format!("Failed to write {}: {}", path.display(), e));
            1
        }
    }
}

pub fn clean() -> i32 {
    let cwd = match working_dir() {
        Ok(d) => d,
        Err(code) => return code,
    };
    let config = match load_config(&cwd) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let out = cwd.join(&config.compileroptions.outdir);
    if !out.exists() {
        logger::info(&format!(
            "Nothing to clean ({} does not exist).",
            logger::highlight(&config.compileroptions.outdir)
        ));
        return 0;
    }
    match fs::remove_dir_all(&out) {
        Ok(()) => {
            logger::success(&format!(
                "Deleted {}",
                logger::highlight(&config.compileroptions.outdir)
            ));
            0
        }
        Err(e) => {
            logger::error(&format!("Failed to delete {}: {}", out.display(), e));
            1
        }
    }
}
