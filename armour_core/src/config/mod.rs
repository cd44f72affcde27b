//! Configuration loading - Armour, character and app files, plus TOML settings
//!
//! The text formats are line oriented. A malformed line never aborts a parse:
//! it is skipped and reported as a [`LineDiagnostic`] while the rest of the
//! file still loads.

mod app;
mod armour;
mod character;

pub use app::{format_app_config, parse_app_config, AppConfig, ConfigEntry};
pub use armour::{ensure_default_catalog, format_catalog, parse_catalog, DEFAULT_CATALOG_TEMPLATE};
pub use character::{format_character, parse_character, CharacterSheet};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// A rejected input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiagnostic {
    /// 1-based line number
    pub line: usize,
    pub message: String,
}

impl fmt::Display for LineDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// A parsed value together with every line that was rejected on the way
#[derive(Debug, Clone)]
pub struct Parsed<T> {
    pub value: T,
    pub diagnostics: Vec<LineDiagnostic>,
}

impl<T> Parsed<T> {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Record and log a rejected line
pub(crate) fn reject(diagnostics: &mut Vec<LineDiagnostic>, line: usize, message: String) {
    warn!(line, "{}", message);
    diagnostics.push(LineDiagnostic { line, message });
}

/// Blank lines and `#` comments carry no data
pub(crate) fn is_ignorable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

pub(crate) fn is_indented(line: &str) -> bool {
    line.starts_with(|c: char| c == '\t' || c == ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        path: String,
        #[serde(default)]
        verbose: bool,
    }

    #[test]
    fn test_parse_toml() {
        let sample: Sample = parse_toml("path = \"armour.hba\"").unwrap();
        assert_eq!(sample.path, "armour.hba");
        assert!(!sample.verbose);
    }

    #[test]
    fn test_parse_toml_error() {
        let result: Result<Sample, _> = parse_toml("path = ");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_toml_missing_file() {
        let result: Result<Sample, _> = load_toml(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_line_classification() {
        assert!(is_ignorable(""));
        assert!(is_ignorable("   "));
        assert!(is_ignorable("# comment"));
        assert!(is_ignorable("\t# indented comment"));
        assert!(!is_ignorable("Leather"));

        assert!(is_indented("\tpiercing: 1"));
        assert!(is_indented("    piercing: 1"));
        assert!(!is_indented("Leather"));
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = LineDiagnostic {
            line: 7,
            message: "bad".to_string(),
        };
        assert_eq!(diag.to_string(), "line 7: bad");
    }
}
