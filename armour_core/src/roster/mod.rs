//! Character roster - Characters keyed by name

mod character;

pub use character::Character;

use std::collections::BTreeMap;
use thiserror::Error;

/// Roster operation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("No character named \"{0}\"")]
    UnknownCharacter(String),
    #[error("A character named \"{0}\" already exists")]
    DuplicateCharacter(String),
    #[error("Character names must not be empty")]
    EmptyName,
}

/// Every character being tracked, keyed by their unique name
#[derive(Debug, Clone, Default)]
pub struct Roster {
    characters: BTreeMap<String, Character>,
}

impl Roster {
    pub fn new() -> Self {
        Roster {
            characters: BTreeMap::new(),
        }
    }

    /// Add a character; names must be unique and non-empty
    pub fn add(&mut self, character: Character) -> Result<(), RosterError> {
        if character.name.trim().is_empty() {
            return Err(RosterError::EmptyName);
        }
        if self.characters.contains_key(&character.name) {
            return Err(RosterError::DuplicateCharacter(character.name));
        }
        self.characters.insert(character.name.clone(), character);
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<Character, RosterError> {
        self.characters
            .remove(name)
            .ok_or_else(|| RosterError::UnknownCharacter(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&Character> {
        self.characters.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Character> {
        self.characters.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.characters.contains_key(name)
    }

    /// Re-key a character under a new name
    pub fn rename(&mut self, old: &str, new: &str) -> Result<(), RosterError> {
        if old == new {
            return if self.contains(old) {
                Ok(())
            } else {
                Err(RosterError::UnknownCharacter(old.to_string()))
            };
        }
        if new.trim().is_empty() {
            return Err(RosterError::EmptyName);
        }
        if self.contains(new) {
            return Err(RosterError::DuplicateCharacter(new.to_string()));
        }
        let mut character = self.remove(old)?;
        character.name = new.to_string();
        self.characters.insert(new.to_string(), character);
        Ok(())
    }

    /// Generated name for a character added without one ("character N")
    pub fn next_default_name(&self) -> String {
        let mut n = self.characters.len() + 1;
        loop {
            let candidate = format!("character {}", n);
            if !self.contains(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Iterate characters in name order
    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.characters.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BodySlot;

    #[test]
    fn test_add_and_get() {
        let mut roster = Roster::new();
        roster.add(Character::new("Bob")).unwrap();

        assert_eq!(roster.len(), 1);
        assert!(roster.get("Bob").is_some());
        assert!(roster.get("Alice").is_none());
    }

    #[test]
    fn test_duplicate_and_empty_names() {
        let mut roster = Roster::new();
        roster.add(Character::new("Bob")).unwrap();

        assert_eq!(
            roster.add(Character::new("Bob")),
            Err(RosterError::DuplicateCharacter("Bob".to_string()))
        );
        assert_eq!(roster.add(Character::new("  ")), Err(RosterError::EmptyName));
    }

    #[test]
    fn test_remove_unknown() {
        let mut roster = Roster::new();
        assert_eq!(
            roster.remove("Ghost"),
            Err(RosterError::UnknownCharacter("Ghost".to_string()))
        );
    }

    #[test]
    fn test_rename_keeps_equipment() {
        let mut roster = Roster::new();
        roster
            .add(Character::new("character 1").wearing(BodySlot::Head, "Helm"))
            .unwrap();

        roster.rename("character 1", "Bob").unwrap();

        assert!(!roster.contains("character 1"));
        let bob = roster.get("Bob").unwrap();
        assert_eq!(bob.name, "Bob");
        assert_eq!(bob.armour(BodySlot::Head), ["Helm"]);
    }

    #[test]
    fn test_rename_collision_keeps_both() {
        let mut roster = Roster::new();
        roster.add(Character::new("Bob")).unwrap();
        roster.add(Character::new("Alice")).unwrap();

        assert_eq!(
            roster.rename("Alice", "Bob"),
            Err(RosterError::DuplicateCharacter("Bob".to_string()))
        );
        assert!(roster.contains("Alice"));
        assert!(roster.contains("Bob"));
    }

    #[test]
    fn test_rename_to_self() {
        let mut roster = Roster::new();
        roster.add(Character::new("Bob")).unwrap();
        assert!(roster.rename("Bob", "Bob").is_ok());
        assert!(roster.rename("Ghost", "Ghost").is_err());
    }

    #[test]
    fn test_default_names_skip_taken() {
        let mut roster = Roster::new();
        assert_eq!(roster.next_default_name(), "character 1");

        roster.add(Character::new("character 2")).unwrap();
        // len is 1, so "character 2" is tried first and is taken
        assert_eq!(roster.next_default_name(), "character 3");
    }

    #[test]
    fn test_iteration_is_sorted() {
        let mut roster = Roster::new();
        for name in ["Zed", "Alice", "Bob"] {
            roster.add(Character::new(name)).unwrap();
        }
        let names: Vec<&str> = roster.names().collect();
        assert_eq!(names, vec!["Alice", "Bob", "Zed"]);
    }
}
