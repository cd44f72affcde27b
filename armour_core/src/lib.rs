//! armour_core - Homebrew armour tracking and damage reduction
//!
//! This library provides:
//! - ArmourCatalog: Named armour types and their per-damage-type reductions
//! - Roster: Characters and the armour layers worn on each body slot
//! - Hit resolution: Body slot from the last digit of an attack roll
//! - Damage evaluation: Raw damage minus every layer worn on the hit slot
//! - Loaders and writers for the `.hba`, `.char` and `.hacfg` text formats
//! - Session: Owns catalog and roster and exposes every user operation

pub mod catalog;
pub mod combat;
pub mod config;
pub mod prelude;
pub mod roster;
pub mod session;
pub mod types;

// Re-export core types for convenience
pub use catalog::{ArmourCatalog, ArmourDefinition};
pub use combat::{evaluate_damage, resolve_hit_location, DamageReport, LayerReduction};
pub use config::{ConfigError, LineDiagnostic, Parsed};
pub use roster::{Character, Roster, RosterError};
pub use session::{LoadReport, Session, SessionError};
pub use types::{BodySlot, DamageType, ParseKeyError};
