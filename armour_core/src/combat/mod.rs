//! Combat resolution - Hit location and armour damage reduction

mod hit;
mod resolution;
mod result;

pub use hit::resolve_hit_location;
pub use resolution::evaluate_damage;
pub use result::{DamageReport, LayerReduction};
