//! Hit location - Which body slot an attack lands on

use crate::types::BodySlot;

/// Resolve the body slot hit by an attack roll
///
/// Only the last digit of the roll matters:
///
/// | digit | slot  |
/// |-------|-------|
/// | 0     | feet  |
/// | 1-2   | legs  |
/// | 3-5   | torso |
/// | 6     | arms  |
/// | 7     | hands |
/// | 8-9   | head  |
///
/// The uneven bucket sizes are intentional.
pub fn resolve_hit_location(roll: u32) -> BodySlot {
    match roll % 10 {
        0 => BodySlot::Feet,
        1..=2 => BodySlot::Legs,
        3..=5 => BodySlot::Torso,
        6 => BodySlot::Arms,
        7 => BodySlot::Hands,
        _ => BodySlot::Head,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_table() {
        let expected = [
            BodySlot::Feet,
            BodySlot::Legs,
            BodySlot::Legs,
            BodySlot::Torso,
            BodySlot::Torso,
            BodySlot::Torso,
            BodySlot::Arms,
            BodySlot::Hands,
            BodySlot::Head,
            BodySlot::Head,
        ];
        for (digit, slot) in expected.iter().enumerate() {
            assert_eq!(resolve_hit_location(digit as u32), *slot, "digit {}", digit);
        }
    }

    #[test]
    fn test_ten_hits_feet() {
        assert_eq!(resolve_hit_location(10), BodySlot::Feet);
        assert_eq!(resolve_hit_location(20), BodySlot::Feet);
    }

    #[test]
    fn test_buckets_partition_digits() {
        let mut counts = [0usize; 6];
        for digit in 0..10 {
            counts[resolve_hit_location(digit).index()] += 1;
        }
        // feet, legs, torso, arms, hands, head
        assert_eq!(counts, [1, 2, 3, 1, 1, 2]);
        assert_eq!(counts.iter().sum::<usize>(), 10);
    }

    proptest! {
        #[test]
        fn prop_only_last_digit_matters(roll in any::<u32>()) {
            prop_assert_eq!(resolve_hit_location(roll), resolve_hit_location(roll % 10));
        }
    }
}
