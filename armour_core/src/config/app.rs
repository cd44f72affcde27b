//! App configuration file (`.hacfg`)
//!
//! ```text
//! armour=./armour.hba
//! character=./bob.char
//! character=./alice.char
//! ```

use super::{is_ignorable, reject, Parsed};
use std::path::{Path, PathBuf};

/// One instruction of an app configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigEntry {
    /// Load armour definitions from this file
    Armour(PathBuf),
    /// Add a character and load it from this file
    Character(PathBuf),
}

impl ConfigEntry {
    pub fn path(&self) -> &Path {
        match self {
            ConfigEntry::Armour(path) | ConfigEntry::Character(path) => path,
        }
    }
}

/// Entries of an app configuration, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub entries: Vec<ConfigEntry>,
}

impl AppConfig {
    /// Resolve relative paths against `base` (usually the config file's directory)
    pub fn resolve_paths(&mut self, base: &Path) {
        for entry in &mut self.entries {
            let path = match entry {
                ConfigEntry::Armour(path) | ConfigEntry::Character(path) => path,
            };
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

/// Parse an app configuration file
pub fn parse_app_config(content: &str) -> Parsed<AppConfig> {
    let mut config = AppConfig::default();
    let mut diagnostics = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        if is_ignorable(line) {
            continue;
        }

        let trimmed = line.trim();
        let entry = trimmed
            .split_once('=')
            .map(|(key, value)| (key.trim(), value.trim()))
            .filter(|(_, value)| !value.is_empty())
            .and_then(|(key, value)| match key {
                "armour" | "armor" => Some(ConfigEntry::Armour(PathBuf::from(value))),
                "character" => Some(ConfigEntry::Character(PathBuf::from(value))),
                _ => None,
            });

        match entry {
            Some(entry) => config.entries.push(entry),
            None => reject(
                &mut diagnostics,
                line_no,
                format!("{} has an invalid syntax and will not be processed.", trimmed),
            ),
        }
    }

    Parsed {
        value: config,
        diagnostics,
    }
}

/// Render an app configuration
pub fn format_app_config(armour: Option<&Path>, characters: &[PathBuf]) -> String {
    let mut out = String::new();
    if let Some(armour) = armour {
        out.push_str(&format!("armour={}\n", armour.display()));
    }
    for character in characters {
        out.push_str(&format!("character={}\n", character.display()));
    }
    out
}
