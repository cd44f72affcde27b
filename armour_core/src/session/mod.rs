//! Session - Owns the armour catalog and character roster
//!
//! Every user-level operation goes through a `Session`: loading files,
//! managing characters and evaluating hits. Failed operations leave the
//! session exactly as it was.

mod error;
mod report;

pub use error::SessionError;
pub use report::{CharacterLoad, FileDiagnostic, LoadReport, UnresolvedArmour};

use crate::catalog::ArmourCatalog;
use crate::combat::{evaluate_damage, DamageReport};
use crate::config::{
    format_app_config, format_catalog, format_character, parse_app_config, parse_catalog,
    parse_character, ConfigEntry, LineDiagnostic, Parsed,
};
use crate::roster::{Character, Roster, RosterError};
use crate::types::{BodySlot, DamageType};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File stem used when saving a catalog that was never read from disk
const SAVED_CATALOG_STEM: &str = "armour";

/// Armour tracking state for one table
#[derive(Debug, Clone, Default)]
pub struct Session {
    catalog: ArmourCatalog,
    roster: Roster,
    /// Where the current catalog was loaded from, if anywhere
    catalog_path: Option<PathBuf>,
}

impl Session {
    /// Create a session with an empty catalog and roster
    pub fn new() -> Self {
        Session::default()
    }

    pub fn catalog(&self) -> &ArmourCatalog {
        &self.catalog
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn catalog_path(&self) -> Option<&Path> {
        self.catalog_path.as_deref()
    }

    pub fn character(&self, name: &str) -> Option<&Character> {
        self.roster.get(name)
    }

    // === Catalog ===

    /// Replace the catalog with the definitions in `path`
    ///
    /// On a read error the current catalog is kept.
    pub fn load_catalog(&mut self, path: &Path) -> Result<Vec<LineDiagnostic>, SessionError> {
        let content = fs::read_to_string(path).map_err(|e| SessionError::io(path, e))?;
        let diagnostics = self.load_catalog_str(&content);
        self.catalog_path = Some(path.to_path_buf());
        info!("Armour definitions loaded from {:?} ({} types)", path, self.catalog.len());
        Ok(diagnostics)
    }

    /// Replace the catalog with definitions parsed from memory
    pub fn load_catalog_str(&mut self, content: &str) -> Vec<LineDiagnostic> {
        let Parsed { value, diagnostics } = parse_catalog(content);
        self.set_catalog(value);
        diagnostics
    }

    pub fn set_catalog(&mut self, catalog: ArmourCatalog) {
        self.catalog = catalog;
        self.catalog_path = None;
    }

    // === Roster ===

    /// Add a character with nothing equipped, returning its name
    ///
    /// Without a name one is generated ("character N").
    pub fn add_character(&mut self, name: Option<&str>) -> Result<String, SessionError> {
        let name = match name {
            Some(name) => name.trim().to_string(),
            None => self.roster.next_default_name(),
        };
        self.roster.add(Character::new(name.clone()))?;
        info!("Added {}", name);
        Ok(name)
    }

    pub fn remove_character(&mut self, name: &str) -> Result<Character, SessionError> {
        let character = self.roster.remove(name)?;
        info!("Removed {}", name);
        Ok(character)
    }

    pub fn rename_character(&mut self, old: &str, new: &str) -> Result<(), SessionError> {
        self.roster.rename(old, new.trim())?;
        Ok(())
    }

    /// Load a character file into an existing character
    ///
    /// Every slot is replaced. If the file names the character, it is renamed.
    pub fn load_character(&mut self, name: &str, path: &Path) -> Result<CharacterLoad, SessionError> {
        if !self.roster.contains(name) {
            return Err(RosterError::UnknownCharacter(name.to_string()).into());
        }
        let content = fs::read_to_string(path).map_err(|e| SessionError::io(path, e))?;
        self.load_character_str(name, &content)
    }

    /// Load character file contents from memory into an existing character
    pub fn load_character_str(&mut self, name: &str, content: &str) -> Result<CharacterLoad, SessionError> {
        if !self.roster.contains(name) {
            return Err(RosterError::UnknownCharacter(name.to_string()).into());
        }

        let Parsed { value: sheet, diagnostics } = parse_character(content);

        let final_name = match sheet.name {
            Some(new_name) if new_name != name => {
                self.roster.rename(name, &new_name)?;
                new_name
            }
            _ => name.to_string(),
        };

        let character = self
            .roster
            .get_mut(&final_name)
            .ok_or_else(|| RosterError::UnknownCharacter(final_name.clone()))?;
        character.replace_slots(sheet.slots);

        info!("{} loaded.", final_name);
        Ok(CharacterLoad {
            name: final_name,
            diagnostics,
        })
    }

    /// Append an armour layer to a character's slot
    ///
    /// Names a character file could not hold (empty, starting with `#`, or
    /// spanning lines) are rejected.
    pub fn equip(&mut self, name: &str, slot: BodySlot, armour: &str) -> Result<(), SessionError> {
        let armour = armour.trim();
        let unwritable = armour.is_empty()
            || armour.starts_with('#')
            || armour.contains(|c: char| c == '\n' || c == '\r');
        if unwritable {
            return Err(SessionError::InvalidArmourName(armour.to_string()));
        }
        let known = self.catalog.contains(armour);
        let character = self.character_mut(name)?;
        if !known {
            warn!("{} equips undefined armour: {}", name, armour);
        }
        character.equip(slot, armour);
        Ok(())
    }

    /// Remove the layer at `index` from a character's slot
    pub fn unequip(&mut self, name: &str, slot: BodySlot, index: usize) -> Result<String, SessionError> {
        self.character_mut(name)?
            .unequip(slot, index)
            .ok_or(SessionError::UnknownLayer { slot, index })
    }

    fn character_mut(&mut self, name: &str) -> Result<&mut Character, SessionError> {
        self.roster
            .get_mut(name)
            .ok_or_else(|| RosterError::UnknownCharacter(name.to_string()).into())
    }

    // === App configuration ===

    /// Apply an app configuration file
    ///
    /// Entries are processed in order. An entry that fails is reported in the
    /// returned `LoadReport` and the remaining entries still run. Relative
    /// paths are taken relative to the configuration file.
    pub fn load_configuration(&mut self, path: &Path) -> Result<LoadReport, SessionError> {
        let content = fs::read_to_string(path).map_err(|e| SessionError::io(path, e))?;
        let Parsed {
            value: mut config,
            diagnostics,
        } = parse_app_config(&content);

        let mut report = LoadReport::default();
        report.add_diagnostics(path, diagnostics);

        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }

        for entry in config.entries {
            match entry {
                ConfigEntry::Armour(armour_path) => match self.load_catalog(&armour_path) {
                    Ok(diagnostics) => {
                        report.catalog_loaded = true;
                        report.add_diagnostics(&armour_path, diagnostics);
                    }
                    Err(e) => {
                        warn!("{}", e);
                        report.failures.push(e.to_string());
                    }
                },
                ConfigEntry::Character(character_path) => {
                    let name = self.add_character(None)?;
                    match self.load_character(&name, &character_path) {
                        Ok(load) => {
                            report.add_diagnostics(&character_path, load.diagnostics);
                            report.characters_loaded.push(load.name);
                        }
                        Err(e) => {
                            // Don't leave an empty placeholder behind
                            let _ = self.roster.remove(&name);
                            warn!("{}", e);
                            report.failures.push(e.to_string());
                        }
                    }
                }
            }
        }

        info!(
            "Configuration {:?} applied: {} characters, {} problems",
            path,
            report.characters_loaded.len(),
            report.diagnostics.len() + report.failures.len()
        );
        Ok(report)
    }

    /// Save every character next to `path` and write an app configuration there
    ///
    /// A catalog that was not loaded from a file is written out as well.
    /// Returns the files written, the configuration last.
    pub fn save_configuration(&mut self, path: &Path) -> Result<Vec<PathBuf>, SessionError> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();
        let mut written = Vec::new();

        let armour_path = if let Some(existing) = self.catalog_path.clone() {
            Some(fs::canonicalize(&existing).unwrap_or(existing))
        } else if !self.catalog.is_empty() {
            let file_name = unused_file_name(&dir, SAVED_CATALOG_STEM, "hba");
            let target = dir.join(&file_name);
            fs::write(&target, format_catalog(&self.catalog))
                .map_err(|e| SessionError::io(&target, e))?;
            written.push(target.clone());
            self.catalog_path = Some(target);
            Some(PathBuf::from(file_name))
        } else {
            None
        };

        let mut taken = HashSet::new();
        let mut character_files = Vec::new();
        for character in self.roster.iter() {
            let file_name = unique_file_name(&character.name, &mut taken);
            let target = dir.join(&file_name);
            fs::write(&target, format_character(character)).map_err(|e| SessionError::io(&target, e))?;
            written.push(target);
            character_files.push(PathBuf::from(file_name));
        }

        let config = format_app_config(armour_path.as_deref(), &character_files);
        fs::write(path, config).map_err(|e| SessionError::io(path, e))?;
        written.push(path.to_path_buf());

        info!("Saved {} characters to {:?}", character_files.len(), path);
        Ok(written)
    }

    // === Evaluation ===

    /// Reduce a hit on the named character
    pub fn evaluate(
        &self,
        name: &str,
        roll: u32,
        raw_damage: u32,
        damage_type: DamageType,
    ) -> Result<DamageReport, SessionError> {
        let character = self
            .roster
            .get(name)
            .ok_or_else(|| RosterError::UnknownCharacter(name.to_string()))?;
        let report = evaluate_damage(character, &self.catalog, roll, raw_damage, damage_type);
        info!("{}", report.summary());
        Ok(report)
    }

    /// Every worn armour name the catalog does not define
    pub fn unresolved_armour(&self) -> Vec<UnresolvedArmour> {
        let mut unresolved = Vec::new();
        for character in self.roster.iter() {
            for (slot, layers) in character.slots() {
                for armour in layers.iter().filter(|armour| !self.catalog.contains(armour)) {
                    unresolved.push(UnresolvedArmour {
                        character: character.name.clone(),
                        slot,
                        armour: armour.clone(),
                    });
                }
            }
        }
        unresolved
    }
}

/// Character file name derived from the character's name
fn unique_file_name(name: &str, taken: &mut HashSet<String>) -> String {
    let mut stem: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    if stem.is_empty() {
        stem = "character".to_string();
    }

    let mut candidate = stem.clone();
    let mut n = 2;
    while !taken.insert(candidate.to_lowercase()) {
        candidate = format!("{}_{}", stem, n);
        n += 1;
    }
    format!("{}.char", candidate)
}

/// `<stem>.<extension>` in `dir`, suffixed `_2`, `_3`.. while that file exists
fn unused_file_name(dir: &Path, stem: &str, extension: &str) -> String {
    let mut candidate = format!("{}.{}", stem, extension);
    let mut n = 2;
    while dir.join(&candidate).exists() {
        candidate = format!("{}_{}.{}", stem, n, extension);
        n += 1;
    }
    candidate
}
