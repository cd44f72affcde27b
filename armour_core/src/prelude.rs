//! Prelude module for convenient imports
//!
//! ```rust
//! use armour_core::prelude::*;
//! ```

// Core types
pub use crate::types::{BodySlot, DamageType};

// Data model
pub use crate::catalog::{ArmourCatalog, ArmourDefinition};
pub use crate::roster::{Character, Roster};

// Combat
pub use crate::combat::{evaluate_damage, resolve_hit_location, DamageReport};

// Session
pub use crate::session::{LoadReport, Session, SessionError};
