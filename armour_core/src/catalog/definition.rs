//! ArmourDefinition - Reduction values of a single armour type

use crate::types::DamageType;
use serde::{Deserialize, Serialize};

/// A named armour type and how much it reduces each damage type per layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmourDefinition {
    /// Unique name of the armour type
    pub name: String,
    pub piercing: u32,
    pub slashing: u32,
    pub bludgeoning: u32,
    /// Reduction against spells that require an attack roll
    #[serde(rename = "toHitSpells")]
    pub to_hit_spells: u32,
}

impl ArmourDefinition {
    /// Create a definition with all reductions at zero
    pub fn new(name: impl Into<String>) -> Self {
        ArmourDefinition {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder-style setter for a single reduction value
    pub fn with(mut self, damage_type: DamageType, value: u32) -> Self {
        self.set_reduction(damage_type, value);
        self
    }

    /// Reduction applied against the given damage type
    pub fn reduction(&self, damage_type: DamageType) -> u32 {
        match damage_type {
            DamageType::Piercing => self.piercing,
            DamageType::Slashing => self.slashing,
            DamageType::Bludgeoning => self.bludgeoning,
            DamageType::ToHitSpells => self.to_hit_spells,
        }
    }

    pub fn set_reduction(&mut self, damage_type: DamageType, value: u32) {
        match damage_type {
            DamageType::Piercing => self.piercing = value,
            DamageType::Slashing => self.slashing = value,
            DamageType::Bludgeoning => self.bludgeoning = value,
            DamageType::ToHitSpells => self.to_hit_spells = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let def = ArmourDefinition::new("Cloth");
        for dt in DamageType::all() {
            assert_eq!(def.reduction(*dt), 0);
        }
    }

    #[test]
    fn test_reduction_per_type() {
        let leather = ArmourDefinition::new("Leather")
            .with(DamageType::Piercing, 1)
            .with(DamageType::Slashing, 2)
            .with(DamageType::Bludgeoning, 1)
            .with(DamageType::ToHitSpells, 2);

        assert_eq!(leather.reduction(DamageType::Piercing), 1);
        assert_eq!(leather.reduction(DamageType::Slashing), 2);
        assert_eq!(leather.reduction(DamageType::Bludgeoning), 1);
        assert_eq!(leather.reduction(DamageType::ToHitSpells), 2);
    }
}
