//! Character - A named wearer of armour layers

use crate::types::BodySlot;
use serde::{Deserialize, Serialize};

/// A character and the armour layers worn on each body slot
///
/// Armour names are references into an `ArmourCatalog`. They may repeat and
/// may name armour the catalog does not know; unknown layers reduce nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    /// One ordered list per slot, indexed by `BodySlot::index()`
    slots: [Vec<String>; 6],
}

impl Character {
    /// Create a character with nothing equipped
    pub fn new(name: impl Into<String>) -> Self {
        Character {
            name: name.into(),
            slots: Default::default(),
        }
    }

    /// Builder-style: equip a layer
    pub fn wearing(mut self, slot: BodySlot, armour: impl Into<String>) -> Self {
        self.equip(slot, armour);
        self
    }

    /// Armour names worn on a slot, outermost last
    pub fn armour(&self, slot: BodySlot) -> &[String] {
        &self.slots[slot.index()]
    }

    /// Append a layer to a slot
    pub fn equip(&mut self, slot: BodySlot, armour: impl Into<String>) {
        self.slots[slot.index()].push(armour.into());
    }

    /// Remove the layer at `index` from a slot
    pub fn unequip(&mut self, slot: BodySlot, index: usize) -> Option<String> {
        let layers = &mut self.slots[slot.index()];
        if index < layers.len() {
            Some(layers.remove(index))
        } else {
            None
        }
    }

    /// Replace every slot with the given layers
    pub fn replace_slots(&mut self, slots: [Vec<String>; 6]) {
        self.slots = slots;
    }

    pub fn clear(&mut self) {
        self.slots = Default::default();
    }

    /// Iterate (slot, layers) pairs in slot order
    pub fn slots(&self) -> impl Iterator<Item = (BodySlot, &[String])> {
        BodySlot::all()
            .iter()
            .map(move |slot| (*slot, self.armour(*slot)))
    }

    /// Total number of layers worn across all slots
    pub fn layer_count(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }
}
