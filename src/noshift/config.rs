//! Compiler configuration, read from `nsjsconfig.json`.
//!
//! The file layers over built-in defaults: any missing key keeps its
//! default, and a missing file yields the defaults unchanged. Key names
//! are a compatibility surface with existing project configs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Name of the compiler configuration file.
pub const CONFIG_FILE_NAME: &str = "nsjsconfig.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NsjsConfig {
    pub compileroptions: CompilerOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerOptions {
    /// Directory scanned for `.nsjs` sources.
    pub rootdir: String,
    /// Directory compiled `.js` files are written to.
    pub outdir: String,
    /// Emit style warnings during compilation.
    pub warnuppercase: bool,
    /// Apply the capitalize modifier inside string literals.
    pub capitalizeinstrings: bool,
    /// Suppress the generated header comment in output files.
    pub noheader: bool,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        CompilerOptions {
            rootdir: "src".to_string(),
            outdir: "dist".to_string(),
            warnuppercase: true,
            capitalizeinstrings: true,
            noheader: false,
        }
    }
}

/// Errors from loading configuration files.
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse { path: String, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read configuration: {}", e),
            ConfigError::Parse { path, message } => {
                write!(f, "Failed to parse {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl NsjsConfig {
    /// Load `nsjsconfig.json` from `dir`. A missing file yields the
    /// defaults; a malformed file is an error.
    pub fn load(dir: &Path) -> Result<NsjsConfig, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(NsjsConfig::default()),
            Err(e) => return Err(ConfigError::Io(e)),
        };
        serde_json::from_str(&raw).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
