//! Armour definitions file (`.hba`)
//!
//! ```text
//! # Comment
//! Leather
//! 	piercing: 1
//! 	slashing: 2
//! 	bludgeoning: 1
//! 	toHitSpells: 2
//! ```

use super::{is_ignorable, is_indented, reject, Parsed};
use crate::catalog::{ArmourCatalog, ArmourDefinition};
use crate::types::DamageType;
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

/// Header written when the default definitions file does not exist yet
pub const DEFAULT_CATALOG_TEMPLATE: &str = include_str!("../../config/default.hba");

/// Parse an armour definitions file
///
/// A non-indented line names a new armour type, indented `key: value` lines
/// set its reductions. Missing keys stay at zero. A name that was already
/// defined is rejected along with its stat lines, so the first definition wins.
pub fn parse_catalog(content: &str) -> Parsed<ArmourCatalog> {
    let mut catalog = ArmourCatalog::new();
    let mut diagnostics = Vec::new();
    let mut current: Option<ArmourDefinition> = None;
    let mut skipping_duplicate = false;

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        if is_ignorable(line) {
            continue;
        }

        if !is_indented(line) {
            finish(&mut catalog, current.take());

            let name = line.trim();
            if catalog.contains(name) {
                reject(
                    &mut diagnostics,
                    line_no,
                    format!("Armour type \"{}\" is defined more than once; keeping the first definition.", name),
                );
                skipping_duplicate = true;
            } else {
                current = Some(ArmourDefinition::new(name));
                skipping_duplicate = false;
            }
            continue;
        }

        let stat = line.trim();
        let Some((damage_type, value)) = split_stat(stat) else {
            reject(
                &mut diagnostics,
                line_no,
                format!("{} has an invalid syntax and will not be processed.", stat),
            );
            continue;
        };

        if skipping_duplicate {
            continue;
        }

        let Some(definition) = current.as_mut() else {
            reject(
                &mut diagnostics,
                line_no,
                "You must give an armour type a name before defining its stats.".to_string(),
            );
            continue;
        };

        match value.parse::<u32>() {
            Ok(reduction) => definition.set_reduction(damage_type, reduction),
            Err(_) => reject(
                &mut diagnostics,
                line_no,
                format!("Value for {} must be a non-negative integer.", damage_type.key()),
            ),
        }
    }

    finish(&mut catalog, current);

    Parsed {
        value: catalog,
        diagnostics,
    }
}

fn finish(catalog: &mut ArmourCatalog, definition: Option<ArmourDefinition>) {
    if let Some(definition) = definition {
        // Duplicates were filtered when the name line was read
        let _ = catalog.insert(definition);
    }
}

/// Split `key: value` where key names a damage type
fn split_stat(stat: &str) -> Option<(DamageType, &str)> {
    let (key, value) = stat.split_once(':')?;
    let damage_type = key.trim().parse::<DamageType>().ok()?;
    Some((damage_type, value.trim()))
}

/// Render a catalog in the definitions file format
pub fn format_catalog(catalog: &ArmourCatalog) -> String {
    let mut out = String::from(DEFAULT_CATALOG_TEMPLATE);
    for definition in catalog.iter() {
        out.push('\n');
        out.push_str(&definition.name);
        out.push('\n');
        for damage_type in DamageType::all() {
            out.push_str(&format!(
                "\t{}: {}\n",
                damage_type.key(),
                definition.reduction(*damage_type)
            ));
        }
    }
    out
}

/// Write the definitions template to `path` if nothing exists there
///
/// Returns whether a file was created.
pub fn ensure_default_catalog(path: &Path) -> io::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    info!("Default armour definitions don't exist, creating {:?}", path);
    fs::write(path, DEFAULT_CATALOG_TEMPLATE)?;
    Ok(true)
}
