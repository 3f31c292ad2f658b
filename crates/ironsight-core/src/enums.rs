//! Shared enumerations.

use serde::{Deserialize, Serialize};

/// Weapon models available on the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeaponModel {
    #[default]
    Pistol1911,
    Mp5,
    M16,
}

/// How the trigger drives the firing cycle.
///
/// `Single` fires one round per trigger press, `Burst` fires a fixed group of
/// rounds per press, `Automatic` keeps firing at the cooldown cadence while
/// the trigger is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FireMode {
    #[default]
    Single,
    Burst,
    Automatic,
}

/// Ammunition families. Weapons chambered for the same family draw from the
/// same shared reserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AmmoFamily {
    #[default]
    Acp45,
    Para9,
    Nato556,
}

/// Lifecycle of a range session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    Idle,
    Active,
    Paused,
}

/// What a projectile struck, for effect selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactKind {
    Flesh,
    Surface,
}

/// Kinds of range targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TargetKind {
    #[default]
    Dummy,
    Plate,
}
