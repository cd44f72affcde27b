//! Reports returned by multi-step session loads

use crate::config::LineDiagnostic;
use crate::types::BodySlot;
use std::fmt;
use std::path::{Path, PathBuf};

/// A rejected line in a specific file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiagnostic {
    pub path: PathBuf,
    pub diagnostic: LineDiagnostic,
}

impl fmt::Display for FileDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.path.display(), self.diagnostic.line, self.diagnostic.message)
    }
}

/// Outcome of loading an app configuration
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Whether an armour definitions file was loaded
    pub catalog_loaded: bool,
    /// Names of the characters that were added, in config order
    pub characters_loaded: Vec<String>,
    /// Rejected lines across every file touched
    pub diagnostics: Vec<FileDiagnostic>,
    /// Entries that could not be applied at all
    pub failures: Vec<String>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty() && self.failures.is_empty()
    }

    pub(crate) fn add_diagnostics(&mut self, path: &Path, diagnostics: Vec<LineDiagnostic>) {
        self.diagnostics
            .extend(diagnostics.into_iter().map(|diagnostic| FileDiagnostic {
                path: path.to_path_buf(),
                diagnostic,
            }));
    }
}

/// Result of loading a single character file
#[derive(Debug, Clone)]
pub struct CharacterLoad {
    /// The character's name after the load (the file may rename it)
    pub name: String,
    pub diagnostics: Vec<LineDiagnostic>,
}

/// An armour reference the catalog cannot resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedArmour {
    pub character: String,
    pub slot: BodySlot,
    pub armour: String,
}

impl fmt::Display for UnresolvedArmour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is wearing undefined armour on their {}: {}",
            self.character, self.slot, self.armour
        )
    }
}
