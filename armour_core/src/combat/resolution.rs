//! Damage evaluation - Apply a character's armour to an incoming hit

use super::hit::resolve_hit_location;
use super::result::{DamageReport, LayerReduction};
use crate::catalog::ArmourCatalog;
use crate::roster::Character;
use crate::types::DamageType;
use tracing::{debug, warn};

/// Evaluate a hit against the armour a character wears
///
/// 1. Resolves the hit slot from the last digit of `roll`
/// 2. Sums the reduction of every layer on that slot for `damage_type`
/// 3. Subtracts the sum from `raw_damage`, never going below zero
///
/// Layers the catalog does not define contribute nothing and are listed in
/// `DamageReport::unknown_armour`.
pub fn evaluate_damage(
    character: &Character,
    catalog: &ArmourCatalog,
    roll: u32,
    raw_damage: u32,
    damage_type: DamageType,
) -> DamageReport {
    let slot = resolve_hit_location(roll);
    debug!(character = %character.name, roll, %slot, "{} is hit on their {}", character.name, slot);

    let mut layers = Vec::new();
    let mut unknown_armour = Vec::new();
    let mut total_reduction: u64 = 0;

    for armour in character.armour(slot) {
        match catalog.get(armour) {
            Some(definition) => {
                let reduction = definition.reduction(damage_type);
                debug!("{} reduces {} damage by {}", armour, damage_type, reduction);
                total_reduction += u64::from(reduction);
                layers.push(LayerReduction {
                    armour: armour.clone(),
                    reduction,
                });
            }
            None => {
                warn!(
                    character = %character.name,
                    %slot,
                    "{} is wearing undefined armour: {}",
                    character.name,
                    armour
                );
                unknown_armour.push(armour.clone());
            }
        }
    }

    // Damage can't be negative
    let final_damage = u64::from(raw_damage).saturating_sub(total_reduction) as u32;

    DamageReport {
        character: character.name.clone(),
        roll,
        damage_type,
        raw_damage,
        slot,
        layers,
        unknown_armour,
        total_reduction,
        final_damage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ArmourDefinition;
    use crate::types::BodySlot;
    use proptest::prelude::*;

    fn leather() -> ArmourDefinition {
        ArmourDefinition::new("Leather")
            .with(DamageType::Piercing, 1)
            .with(DamageType::Slashing, 2)
            .with(DamageType::Bludgeoning, 1)
            .with(DamageType::ToHitSpells, 2)
    }

    fn chainmail() -> ArmourDefinition {
        ArmourDefinition::new("Chainmail")
            .with(DamageType::Piercing, 2)
            .with(DamageType::Slashing, 5)
            .with(DamageType::Bludgeoning, 2)
            .with(DamageType::ToHitSpells, 3)
    }

    fn catalog() -> ArmourCatalog {
        [leather(), chainmail()].into_iter().collect()
    }

    #[test]
    fn test_leather_on_torso() {
        let bob = Character::new("Bob").wearing(BodySlot::Torso, "Leather");

        let report = evaluate_damage(&bob, &catalog(), 4, 5, DamageType::Slashing);

        assert_eq!(report.slot, BodySlot::Torso);
        assert_eq!(report.total_reduction, 2);
        assert_eq!(report.final_damage, 3);
        assert_eq!(
            report.layers,
            vec![LayerReduction {
                armour: "Leather".to_string(),
                reduction: 2
            }]
        );
    }

    #[test]
    fn test_unarmoured_feet() {
        let bob = Character::new("Bob").wearing(BodySlot::Torso, "Leather");

        let report = evaluate_damage(&bob, &catalog(), 10, 2, DamageType::Piercing);

        assert_eq!(report.slot, BodySlot::Feet);
        assert!(report.layers.is_empty());
        assert_eq!(report.final_damage, 2);
    }

    #[test]
    fn test_unknown_armour_reduces_nothing() {
        let bob = Character::new("Bob").wearing(BodySlot::Head, "Plate");

        let report = evaluate_damage(&bob, &catalog(), 8, 3, DamageType::Bludgeoning);

        assert_eq!(report.slot, BodySlot::Head);
        assert_eq!(report.final_damage, 3);
        assert_eq!(report.unknown_armour, vec!["Plate".to_string()]);
        assert!(!report.is_fully_resolved());
    }

    #[test]
    fn test_layers_stack() {
        let bob = Character::new("Bob")
            .wearing(BodySlot::Torso, "Leather")
            .wearing(BodySlot::Torso, "Chainmail")
            .wearing(BodySlot::Torso, "Plate");

        let report = evaluate_damage(&bob, &catalog(), 13, 10, DamageType::Slashing);

        // 10 - 2 - 5 = 3, Plate is unknown
        assert_eq!(report.final_damage, 3);
        assert_eq!(report.layers.len(), 2);
        assert_eq!(report.unknown_armour.len(), 1);
    }

    #[test]
    fn test_clamped_at_zero() {
        let bob = Character::new("Bob")
            .wearing(BodySlot::Arms, "Chainmail")
            .wearing(BodySlot::Arms, "Chainmail");

        let report = evaluate_damage(&bob, &catalog(), 6, 4, DamageType::Slashing);

        assert_eq!(report.total_reduction, 10);
        assert_eq!(report.final_damage, 0);
        assert_eq!(report.damage_prevented(), 4);
    }

    #[test]
    fn test_huge_reductions_do_not_overflow() {
        let fortress = ArmourDefinition::new("Fortress").with(DamageType::Piercing, u32::MAX);
        let catalog: ArmourCatalog = [fortress].into_iter().collect();
        let bob = Character::new("Bob")
            .wearing(BodySlot::Legs, "Fortress")
            .wearing(BodySlot::Legs, "Fortress");

        let report = evaluate_damage(&bob, &catalog, 1, u32::MAX, DamageType::Piercing);

        assert_eq!(report.total_reduction, 2 * u64::from(u32::MAX));
        assert_eq!(report.final_damage, 0);
    }

    fn armour_name() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("Leather".to_string()),
            Just("Chainmail".to_string()),
            Just("Plate".to_string()),
        ]
    }

    fn damage_type() -> impl Strategy<Value = DamageType> {
        prop_oneof![
            Just(DamageType::Piercing),
            Just(DamageType::Slashing),
            Just(DamageType::Bludgeoning),
            Just(DamageType::ToHitSpells),
        ]
    }

    proptest! {
        #[test]
        fn prop_no_armour_is_identity(roll in any::<u32>(), raw in any::<u32>(), dt in damage_type()) {
            let naked = Character::new("Bob");
            let report = evaluate_damage(&naked, &catalog(), roll, raw, dt);
            prop_assert_eq!(report.final_damage, raw);
        }

        #[test]
        fn prop_never_exceeds_raw(
            layers in proptest::collection::vec(armour_name(), 0..8),
            roll in 0u32..100,
            raw in 0u32..50,
            dt in damage_type(),
        ) {
            let mut bob = Character::new("Bob");
            for layer in &layers {
                bob.equip(resolve_hit_location(roll), layer.clone());
            }
            let report = evaluate_damage(&bob, &catalog(), roll, raw, dt);
            prop_assert!(report.final_damage <= raw);
            prop_assert_eq!(report.layers.len() + report.unknown_armour.len(), layers.len());
        }

        #[test]
        fn prop_layer_order_irrelevant(
            layers in proptest::collection::vec(armour_name(), 0..8),
            roll in 0u32..100,
            raw in 0u32..50,
            dt in damage_type(),
        ) {
            let slot = resolve_hit_location(roll);
            let mut forward = Character::new("Bob");
            let mut reversed = Character::new("Bob");
            for layer in &layers {
                forward.equip(slot, layer.clone());
            }
            for layer in layers.iter().rev() {
                reversed.equip(slot, layer.clone());
            }
            let a = evaluate_damage(&forward, &catalog(), roll, raw, dt);
            let b = evaluate_damage(&reversed, &catalog(), roll, raw, dt);
            prop_assert_eq!(a.final_damage, b.final_damage);
            prop_assert_eq!(a.total_reduction, b.total_reduction);
        }
    }
}
