//! Player commands.
//!
//! Commands are queued from outside the engine and drained at the start of
//! each tick, before any system runs.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::AmmoFamily;
use crate::types::Position;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session control ---
    /// Set up the range and start the session clock.
    StartSession,
    Pause,
    Resume,
    /// Adjust the simulation speed multiplier. Clamped to a sane range.
    SetTimeScale { scale: f64 },

    // --- Weapon input ---
    /// Trigger went down this tick. Raises the press edge and latches the
    /// held state until `TriggerReleased`.
    TriggerPressed,
    TriggerReleased,
    /// Reload key went down this tick.
    ReloadPressed,
    AimPressed,
    AimReleased,
    /// Switch the active weapon slot. Out-of-range slots are ignored.
    SelectWeapon { slot: usize },

    // --- View and inventory ---
    /// Update the shooter's eye position and view direction.
    UpdateView { eye: Position, forward: DVec3 },
    /// Add rounds to a shared reserve (ammo pickups).
    AddReserve { family: AmmoFamily, amount: u32 },
}
