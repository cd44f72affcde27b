//! Core types shared by the catalog, roster and evaluator

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a textual key does not name a slot or damage type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct ParseKeyError {
    pub kind: &'static str,
    pub value: String,
}

/// Body location an armour layer can be worn on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodySlot {
    Feet,
    Legs,
    Torso,
    Arms,
    Hands,
    Head,
}

impl BodySlot {
    /// Get all body slots, in character-file order
    pub fn all() -> &'static [BodySlot] {
        &[
            BodySlot::Feet,
            BodySlot::Legs,
            BodySlot::Torso,
            BodySlot::Arms,
            BodySlot::Hands,
            BodySlot::Head,
        ]
    }

    /// Key used in character files
    pub fn key(&self) -> &'static str {
        match self {
            BodySlot::Feet => "feet",
            BodySlot::Legs => "legs",
            BodySlot::Torso => "torso",
            BodySlot::Arms => "arms",
            BodySlot::Hands => "hands",
            BodySlot::Head => "head",
        }
    }

    /// Position in `BodySlot::all()`
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for BodySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BodySlot {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        BodySlot::all()
            .iter()
            .copied()
            .find(|slot| slot.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| ParseKeyError {
                kind: "body slot",
                value: key.to_string(),
            })
    }
}

/// Kind of incoming damage an armour layer can reduce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DamageType {
    Piercing,
    Slashing,
    Bludgeoning,
    /// Spells that require an attack roll (e.g. Firebolt)
    ToHitSpells,
}

impl DamageType {
    pub fn all() -> &'static [DamageType] {
        &[
            DamageType::Piercing,
            DamageType::Slashing,
            DamageType::Bludgeoning,
            DamageType::ToHitSpells,
        ]
    }

    /// Key used in armour definition files
    pub fn key(&self) -> &'static str {
        match self {
            DamageType::Piercing => "piercing",
            DamageType::Slashing => "slashing",
            DamageType::Bludgeoning => "bludgeoning",
            DamageType::ToHitSpells => "toHitSpells",
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DamageType {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        match key.to_ascii_lowercase().as_str() {
            "piercing" => Ok(DamageType::Piercing),
            "slashing" => Ok(DamageType::Slashing),
            "bludgeoning" => Ok(DamageType::Bludgeoning),
            "tohitspells" | "to_hit_spells" | "spell" => Ok(DamageType::ToHitSpells),
            _ => Err(ParseKeyError {
                kind: "damage type",
                value: key.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_keys_round_trip() {
        for slot in BodySlot::all() {
            assert_eq!(slot.key().parse::<BodySlot>().unwrap(), *slot);
        }
        assert_eq!("HEAD".parse::<BodySlot>().unwrap(), BodySlot::Head);
        assert!("tail".parse::<BodySlot>().is_err());
    }

    #[test]
    fn test_slot_index_matches_order() {
        for (i, slot) in BodySlot::all().iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn test_damage_type_aliases() {
        assert_eq!("toHitSpells".parse::<DamageType>().unwrap(), DamageType::ToHitSpells);
        assert_eq!("to_hit_spells".parse::<DamageType>().unwrap(), DamageType::ToHitSpells);
        assert_eq!("Spell".parse::<DamageType>().unwrap(), DamageType::ToHitSpells);
        assert_eq!(" slashing ".parse::<DamageType>().unwrap(), DamageType::Slashing);

        let err = "fire".parse::<DamageType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown damage type: fire");
    }
}
