//! Snapshot construction.
//!
//! Read-only view over the world and engine state, built once at the end
//! of every tick. Lists are sorted so identical sessions serialize to
//! identical snapshots.

use hecs::World;

use ironsight_core::components::{Health, Projectile, TargetInfo};
use ironsight_core::enums::SessionPhase;
use ironsight_core::events::{AnimationEvent, AudioEvent, EffectEvent};
use ironsight_core::state::{HudView, ProjectileView, SessionSnapshot, TargetView, WeaponView};
use ironsight_core::types::{Position, SimTime, Velocity};

use crate::ammo::AmmoPool;
use crate::arsenal::{Arsenal, WeaponState};

#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: SessionPhase,
    arsenal: &Arsenal,
    ammo: &AmmoPool,
    audio_events: Vec<AudioEvent>,
    animation_events: Vec<AnimationEvent>,
    effect_events: Vec<EffectEvent>,
) -> SessionSnapshot {
    SessionSnapshot {
        time: *time,
        phase,
        hud: build_hud(arsenal, ammo),
        weapons: build_weapons(arsenal, ammo),
        targets: build_targets(world),
        projectiles: build_projectiles(world),
        audio_events,
        animation_events,
        effect_events,
    }
}

fn build_hud(arsenal: &Arsenal, ammo: &AmmoPool) -> HudView {
    let weapon = arsenal.active_weapon();
    HudView {
        weapon_name: weapon.spec.display_name.to_string(),
        ammo_text: ammo_text(weapon),
        magazine: weapon.magazine_current,
        capacity: weapon.spec.magazine_capacity,
        reserve: ammo.reserve(weapon.spec.ammo),
        reloading: weapon.reloading,
        aiming: weapon.aiming,
    }
}

/// Ammo counter string. Both numbers are divided by the burst size, so a
/// burst gun reads in trigger pulls; burst size 1 reads as plain rounds.
/// Integer division, so a partial burst's remainder is not shown.
fn ammo_text(weapon: &WeaponState) -> String {
    format!(
        "{}/{}",
        weapon.magazine_current / weapon.spec.burst_size,
        weapon.spec.magazine_capacity / weapon.spec.burst_size
    )
}

fn build_weapons(arsenal: &Arsenal, ammo: &AmmoPool) -> Vec<WeaponView> {
    arsenal
        .slots
        .iter()
        .enumerate()
        .map(|(slot, weapon)| WeaponView {
            slot,
            model: weapon.spec.model,
            display_name: weapon.spec.display_name.to_string(),
            fire_mode: weapon.spec.fire_mode,
            magazine: weapon.magazine_current,
            capacity: weapon.spec.magazine_capacity,
            reserve: ammo.reserve(weapon.spec.ammo),
            ready_to_fire: weapon.ready_to_fire,
            reloading: weapon.reloading,
            aiming: weapon.aiming,
            burst_remaining: weapon.burst_remaining,
        })
        .collect()
}

fn build_targets(world: &World) -> Vec<TargetView> {
    let mut targets: Vec<TargetView> = world
        .query::<(&TargetInfo, &Position, Option<&Health>)>()
        .iter()
        .map(|(_entity, (info, pos, health))| TargetView {
            id: info.id,
            kind: info.kind,
            position: *pos,
            health: health.map(|health| health.current),
        })
        .collect();
    targets.sort_by_key(|target| target.id);
    targets
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut rounds: Vec<(u64, ProjectileView)> = world
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .map(|(entity, (_, pos, vel))| {
            (
                entity.to_bits().get(),
                ProjectileView {
                    position: *pos,
                    velocity: *vel,
                },
            )
        })
        .collect();
    rounds.sort_by_key(|(id, _)| *id);
    rounds.into_iter().map(|(_, view)| view).collect()
}
