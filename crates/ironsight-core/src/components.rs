//! ECS components.
//!
//! Components are plain data structs with no methods. Game logic lives in
//! the simulation systems.

use serde::{Deserialize, Serialize};

use crate::enums::TargetKind;

/// A round in flight. Despawns on its first impact or when its lifetime
/// runs out, whichever comes first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub damage: i32,
    pub lifetime_secs: f64,
}

/// Sphere collision volume centered on the entity's position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    pub radius: f64,
}

/// Remaining hit points. Entities without this component shrug off impacts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
}

/// Identity of a range target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetInfo {
    pub id: u32,
    pub kind: TargetKind,
}
