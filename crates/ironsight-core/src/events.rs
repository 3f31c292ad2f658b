//! Events emitted by the simulation for frontends to render.
//!
//! Each tick's events are collected into the snapshot for that tick and
//! cleared afterwards; a frontend that drops a snapshot drops its events.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::{ImpactKind, WeaponModel};
use crate::types::Position;

/// Sounds the frontend should play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A round left the barrel. `cue` names the per-model sample, which
    /// differs between hip fire and aimed fire.
    WeaponFired {
        model: WeaponModel,
        cue: String,
        aiming: bool,
    },
    /// A reload began. Completion is silent.
    ReloadStarted { model: WeaponModel, cue: String },
    /// Dry-fire click. Emitted on every tick with an active fire input and
    /// an empty magazine.
    MagazineEmpty,
}

/// Animation triggers for the frontend's weapon rig.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AnimationEvent {
    Recoil { model: WeaponModel, aiming: bool },
    ReloadStarted { model: WeaponModel },
    AdsEntered,
    AdsExited,
}

/// Visual effects to spawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EffectEvent {
    MuzzleFlash { model: WeaponModel },
    /// A projectile struck something. `normal` points out of the surface.
    Impact {
        position: Position,
        normal: DVec3,
        kind: ImpactKind,
    },
    /// A practice dummy ran out of hit points and left the range.
    TargetDown { id: u32, position: Position },
}
