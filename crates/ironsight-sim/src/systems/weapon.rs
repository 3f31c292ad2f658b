//! Weapon handling: trigger evaluation, firing, bursts, and reloads.
//!
//! The per-tick decision comes from [`ironsight_weapon::fsm::evaluate`];
//! this system owns the follow-through. Timed steps (cooldown re-arm,
//! burst continuation, reload completion) go through the task scheduler
//! instead of running inline.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use ironsight_core::components::Projectile;
use ironsight_core::constants::MUZZLE_OFFSET_M;
use ironsight_core::enums::FireMode;
use ironsight_core::events::{AnimationEvent, AudioEvent, EffectEvent};
use ironsight_core::types::{secs_to_ticks, Position, Velocity};
use ironsight_weapon::fsm::{self, WeaponContext};

use crate::ammo::AmmoPool;
use crate::arsenal::{Arsenal, WeaponState};
use crate::engine::{InputState, PlayerView};
use crate::raycast;
use crate::scheduler::{TaskKind, TaskScheduler};
use crate::spread;

/// Run every deferred task due this tick, in scheduling order.
#[allow(clippy::too_many_arguments)]
pub fn run_scheduled(
    world: &mut World,
    scheduler: &mut TaskScheduler,
    arsenal: &mut Arsenal,
    ammo: &mut AmmoPool,
    rng: &mut ChaCha8Rng,
    view: &PlayerView,
    current_tick: u64,
    audio_events: &mut Vec<AudioEvent>,
    animation_events: &mut Vec<AnimationEvent>,
    effect_events: &mut Vec<EffectEvent>,
) {
    for task in scheduler.drain_due(current_tick) {
        match task.kind {
            TaskKind::RearmFire => {
                if let Some(weapon) = arsenal.slots.get_mut(task.slot) {
                    weapon.ready_to_fire = true;
                }
            }
            TaskKind::ContinueBurst => {
                let Some(weapon) = arsenal.slots.get_mut(task.slot) else {
                    continue;
                };
                // A reload or a run-dry magazine breaks the chain silently.
                if weapon.reloading || weapon.magazine_current == 0 {
                    continue;
                }
                fire_once(
                    world,
                    scheduler,
                    weapon,
                    task.slot,
                    rng,
                    view,
                    current_tick,
                    audio_events,
                    animation_events,
                    effect_events,
                );
            }
            TaskKind::CompleteReload => {
                complete_reload(arsenal, ammo, task.slot);
            }
        }
    }
}

/// Evaluate the active weapon's per-tick decision and carry it out.
#[allow(clippy::too_many_arguments)]
pub fn run_update(
    world: &mut World,
    scheduler: &mut TaskScheduler,
    arsenal: &mut Arsenal,
    ammo: &AmmoPool,
    rng: &mut ChaCha8Rng,
    view: &PlayerView,
    input: &InputState,
    current_tick: u64,
    audio_events: &mut Vec<AudioEvent>,
    animation_events: &mut Vec<AnimationEvent>,
    effect_events: &mut Vec<EffectEvent>,
) {
    let slot = arsenal.active;
    let weapon = arsenal.active_weapon_mut();

    let decision = fsm::evaluate(&WeaponContext {
        fire_mode: weapon.spec.fire_mode,
        magazine_current: weapon.magazine_current,
        magazine_capacity: weapon.spec.magazine_capacity,
        ready_to_fire: weapon.ready_to_fire,
        reloading: weapon.reloading,
        reserve: ammo.reserve(weapon.spec.ammo),
        trigger_held: input.trigger_held,
        trigger_edge: input.trigger_edge,
        reload_pressed: input.reload_edge,
    });

    if decision.empty_cue {
        audio_events.push(AudioEvent::MagazineEmpty);
    }

    if decision.start_reload {
        start_reload(
            scheduler,
            weapon,
            slot,
            current_tick,
            audio_events,
            animation_events,
        );
    }

    if decision.fire {
        // A fresh trigger pull restarts the burst chain from the top.
        weapon.burst_remaining = weapon.spec.burst_size;
        fire_once(
            world,
            scheduler,
            weapon,
            slot,
            rng,
            view,
            current_tick,
            audio_events,
            animation_events,
            effect_events,
        );
    }
}

/// Fire one round: expend it, emit the cues, spawn the projectile, start
/// the cooldown, and chain the next burst shot if one is owed.
///
/// Callers guarantee the magazine is not empty.
#[allow(clippy::too_many_arguments)]
fn fire_once(
    world: &mut World,
    scheduler: &mut TaskScheduler,
    weapon: &mut WeaponState,
    slot: usize,
    rng: &mut ChaCha8Rng,
    view: &PlayerView,
    current_tick: u64,
    audio_events: &mut Vec<AudioEvent>,
    animation_events: &mut Vec<AnimationEvent>,
    effect_events: &mut Vec<EffectEvent>,
) {
    weapon.magazine_current = weapon.magazine_current.saturating_sub(1);

    let model = weapon.spec.model;
    let cue = if weapon.aiming {
        weapon.spec.cues.fire_aimed
    } else {
        weapon.spec.cues.fire
    };
    effect_events.push(EffectEvent::MuzzleFlash { model });
    animation_events.push(AnimationEvent::Recoil {
        model,
        aiming: weapon.aiming,
    });
    audio_events.push(AudioEvent::WeaponFired {
        model,
        cue: cue.to_string(),
        aiming: weapon.aiming,
    });

    // Aim resolution casts from the eye; the round leaves from the muzzle
    // toward the resolved point, with spread applied in the view plane.
    let eye = view.eye.to_dvec3();
    let muzzle = eye + view.forward * MUZZLE_OFFSET_M;
    let target_point = raycast::resolve_aim_point(world, eye, view.forward);
    let spread_max = if weapon.aiming {
        weapon.spec.spread_aimed
    } else {
        weapon.spec.spread_hip
    };
    let direction = spread::jitter_direction(target_point - muzzle, view.forward, spread_max, rng);

    world.spawn((
        Position::from_dvec3(muzzle),
        Velocity::from_dvec3(direction * weapon.spec.muzzle_speed_mps),
        Projectile {
            damage: weapon.spec.damage_per_hit,
            lifetime_secs: weapon.spec.projectile_lifetime_secs,
        },
    ));

    // Every shot schedules its own re-arm, so the cadence holds across
    // single shots, bursts, and automatic fire alike.
    weapon.ready_to_fire = false;
    let cooldown_ticks = secs_to_ticks(weapon.spec.fire_cooldown_secs);
    scheduler.schedule(current_tick + cooldown_ticks, slot, TaskKind::RearmFire);

    if weapon.spec.fire_mode == FireMode::Burst && weapon.burst_remaining > 1 {
        weapon.burst_remaining -= 1;
        scheduler.schedule(current_tick + cooldown_ticks, slot, TaskKind::ContinueBurst);
    }
}

/// Latch the reload, emit its cues, and schedule the completion.
fn start_reload(
    scheduler: &mut TaskScheduler,
    weapon: &mut WeaponState,
    slot: usize,
    current_tick: u64,
    audio_events: &mut Vec<AudioEvent>,
    animation_events: &mut Vec<AnimationEvent>,
) {
    weapon.reloading = true;
    audio_events.push(AudioEvent::ReloadStarted {
        model: weapon.spec.model,
        cue: weapon.spec.cues.reload.to_string(),
    });
    animation_events.push(AnimationEvent::ReloadStarted {
        model: weapon.spec.model,
    });
    scheduler.schedule(
        current_tick + secs_to_ticks(weapon.spec.reload_secs),
        slot,
        TaskKind::CompleteReload,
    );
}

/// Move rounds from the shared reserve into the magazine, capped by both
/// the space in the magazine and the rounds actually available. With an
/// empty reserve this completes having loaded nothing.
fn complete_reload(arsenal: &mut Arsenal, ammo: &mut AmmoPool, slot: usize) {
    let Some(weapon) = arsenal.slots.get_mut(slot) else {
        return;
    };
    let needed = weapon.spec.magazine_capacity - weapon.magazine_current;
    let available = ammo.reserve(weapon.spec.ammo);
    let to_load = needed.min(available);
    weapon.magazine_current += to_load;
    ammo.decrement(weapon.spec.ammo, to_load);
    weapon.reloading = false;
}
