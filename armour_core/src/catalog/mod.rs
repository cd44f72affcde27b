//! Armour catalog - Every armour type the campaign knows about

mod definition;

pub use definition::ArmourDefinition;

use std::collections::HashMap;

/// Armour definitions keyed by name
///
/// Names are unique. The order definitions were inserted in is kept so the
/// catalog can be displayed and written back the way it was read.
#[derive(Debug, Clone, Default)]
pub struct ArmourCatalog {
    definitions: HashMap<String, ArmourDefinition>,
    order: Vec<String>,
}

impl ArmourCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        ArmourCatalog {
            definitions: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Insert a definition, returning it back if the name is already taken
    pub fn insert(&mut self, definition: ArmourDefinition) -> Result<(), ArmourDefinition> {
        if self.definitions.contains_key(&definition.name) {
            return Err(definition);
        }
        self.order.push(definition.name.clone());
        self.definitions.insert(definition.name.clone(), definition);
        Ok(())
    }

    /// Look up an armour type by name
    pub fn get(&self, name: &str) -> Option<&ArmourDefinition> {
        self.definitions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterate definitions in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &ArmourDefinition> {
        self.order.iter().filter_map(|name| self.definitions.get(name))
    }

    /// Names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

impl FromIterator<ArmourDefinition> for ArmourCatalog {
    /// Later duplicates are dropped
    fn from_iter<I: IntoIterator<Item = ArmourDefinition>>(iter: I) -> Self {
        let mut catalog = ArmourCatalog::new();
        for definition in iter {
            let _ = catalog.insert(definition);
        }
        catalog
    }
}
