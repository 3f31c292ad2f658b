//! Snapshot types sent to frontends after every tick.

use serde::{Deserialize, Serialize};

use crate::enums::{FireMode, SessionPhase, TargetKind, WeaponModel};
use crate::events::{AnimationEvent, AudioEvent, EffectEvent};
use crate::types::{Position, SimTime, Velocity};

/// Complete per-tick state of the session, plus the events raised during
/// the tick that produced it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub time: SimTime,
    pub phase: SessionPhase,
    pub hud: HudView,
    pub weapons: Vec<WeaponView>,
    pub targets: Vec<TargetView>,
    pub projectiles: Vec<ProjectileView>,
    pub audio_events: Vec<AudioEvent>,
    pub animation_events: Vec<AnimationEvent>,
    pub effect_events: Vec<EffectEvent>,
}

/// What the heads-up display shows for the active weapon.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub weapon_name: String,
    /// Ammo counter string. Both numbers are shown in trigger pulls rather
    /// than rounds: magazine and capacity are divided by the burst size, so
    /// a 30-round three-round-burst gun reads "10/10".
    pub ammo_text: String,
    pub magazine: u32,
    pub capacity: u32,
    pub reserve: u32,
    pub reloading: bool,
    pub aiming: bool,
}

/// Per-slot weapon state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponView {
    pub slot: usize,
    pub model: WeaponModel,
    pub display_name: String,
    pub fire_mode: FireMode,
    pub magazine: u32,
    pub capacity: u32,
    pub reserve: u32,
    pub ready_to_fire: bool,
    pub reloading: bool,
    pub aiming: bool,
    pub burst_remaining: u32,
}

/// A target still standing on the range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetView {
    pub id: u32,
    pub kind: TargetKind,
    pub position: Position,
    /// `None` for targets that do not track damage.
    pub health: Option<i32>,
}

/// A round currently in flight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub velocity: Velocity,
}
