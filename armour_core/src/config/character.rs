//! Character file (`.char`)
//!
//! ```text
//! name=Bob
//! torso
//! 	Leather
//! 	Chainmail
//! head
//! 	Leather
//! ```

use super::{is_ignorable, is_indented, reject, Parsed};
use crate::roster::Character;
use crate::types::BodySlot;

/// Contents of a character file
///
/// The name is optional: a file without `name=` keeps whatever the character
/// was already called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterSheet {
    pub name: Option<String>,
    /// Armour per slot, indexed by `BodySlot::index()`
    pub slots: [Vec<String>; 6],
}

impl CharacterSheet {
    pub fn armour(&self, slot: BodySlot) -> &[String] {
        &self.slots[slot.index()]
    }
}

/// Parse a character file
pub fn parse_character(content: &str) -> Parsed<CharacterSheet> {
    let mut sheet = CharacterSheet::default();
    let mut diagnostics = Vec::new();
    let mut current_slot: Option<BodySlot> = None;

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        if is_ignorable(line) {
            continue;
        }

        if is_indented(line) {
            let armour = line.trim();
            match current_slot {
                Some(slot) => sheet.slots[slot.index()].push(armour.to_string()),
                None => reject(
                    &mut diagnostics,
                    line_no,
                    "You must specify an armour slot before listing equipped items.".to_string(),
                ),
            }
            continue;
        }

        let trimmed = line.trim();
        if let Some(name) = trimmed.strip_prefix("name=") {
            let name = name.trim();
            if name.is_empty() {
                reject(&mut diagnostics, line_no, "Character name must not be empty.".to_string());
            } else {
                sheet.name = Some(name.to_string());
            }
        } else if let Ok(slot) = trimmed.trim_end_matches(':').parse::<BodySlot>() {
            current_slot = Some(slot);
        } else {
            reject(
                &mut diagnostics,
                line_no,
                format!("{} has an invalid syntax and will not be processed.", trimmed),
            );
        }
    }

    Parsed {
        value: sheet,
        diagnostics,
    }
}

/// Render a character in the character file format
pub fn format_character(character: &Character) -> String {
    let mut out = format!("name={}\n", character.name);
    for (slot, layers) in character.slots() {
        out.push_str(slot.key());
        out.push('\n');
        for armour in layers {
            out.push('\t');
            out.push_str(armour);
            out.push('\n');
        }
    }
    out
}
