//! DamageReport - Outcome of reducing one hit

use crate::types::{BodySlot, DamageType};
use serde::{Deserialize, Serialize};

/// Reduction contributed by one armour layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerReduction {
    pub armour: String,
    pub reduction: u32,
}

/// Result of evaluating a hit against a character's armour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageReport {
    // === Input ===
    pub character: String,
    pub roll: u32,
    pub damage_type: DamageType,
    pub raw_damage: u32,

    // === Resolution ===
    /// Slot the roll landed on
    pub slot: BodySlot,
    /// Layers found in the catalog, in the order worn
    pub layers: Vec<LayerReduction>,
    /// Layers worn on the slot that the catalog does not define
    pub unknown_armour: Vec<String>,
    /// Sum of all layer reductions
    pub total_reduction: u64,

    // === Output ===
    /// Damage actually applied, never negative
    pub final_damage: u32,
}

impl DamageReport {
    /// Damage the armour actually absorbed (not more than the raw damage)
    pub fn damage_prevented(&self) -> u32 {
        self.raw_damage - self.final_damage
    }

    /// Whether every layer on the hit slot resolved
    pub fn is_fully_resolved(&self) -> bool {
        self.unknown_armour.is_empty()
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = vec![format!(
            "{} is hit on their {} ({} {}): {} damage",
            self.character, self.slot, self.raw_damage, self.damage_type, self.final_damage
        )];

        if self.total_reduction > 0 {
            parts.push(format!("{} reduced", self.total_reduction));
        }

        if !self.unknown_armour.is_empty() {
            parts.push(format!("undefined armour: {}", self.unknown_armour.join(", ")));
        }

        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(raw: u32, reduction: u64, unknown: Vec<String>) -> DamageReport {
        DamageReport {
            character: "Bob".to_string(),
            roll: 4,
            damage_type: DamageType::Slashing,
            raw_damage: raw,
            slot: BodySlot::Torso,
            layers: vec![],
            unknown_armour: unknown,
            total_reduction: reduction,
            final_damage: (raw as u64).saturating_sub(reduction) as u32,
        }
    }

    #[test]
    fn test_prevented_capped_by_raw() {
        assert_eq!(report(5, 2, vec![]).damage_prevented(), 2);
        assert_eq!(report(3, 10, vec![]).damage_prevented(), 3);
    }

    #[test]
    fn test_summary() {
        let summary = report(5, 2, vec!["Plate".to_string()]).summary();
        assert_eq!(
            summary,
            "Bob is hit on their torso (5 slashing): 3 damage, 2 reduced, undefined armour: Plate"
        );
    }

    #[test]
    fn test_summary_without_armour() {
        let r = report(5, 0, vec![]);
        assert!(r.is_fully_resolved());
        assert_eq!(r.summary(), "Bob is hit on their torso (5 slashing): 5 damage");
    }
}
