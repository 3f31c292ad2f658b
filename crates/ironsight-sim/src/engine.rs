//! The simulation engine.
//!
//! Owns the ECS world, the weapon slots, the shared ammo reserves, and the
//! task scheduler. Each call to [`SimulationEngine::tick`] drains queued
//! commands, runs the systems in a fixed order, and returns a snapshot of
//! the resulting state together with the events raised during the tick.

use std::collections::VecDeque;

use glam::DVec3;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use ironsight_core::commands::PlayerCommand;
use ironsight_core::constants::{DEFAULT_EYE_HEIGHT_M, MAX_TIME_SCALE};
use ironsight_core::enums::{AmmoFamily, SessionPhase};
use ironsight_core::events::{AnimationEvent, AudioEvent, EffectEvent};
use ironsight_core::state::SessionSnapshot;
use ironsight_core::types::{Position, SimTime};
use ironsight_weapon::profiles::{self, LoadoutError, WeaponSpec};

use crate::ammo::AmmoPool;
use crate::arsenal::Arsenal;
use crate::scheduler::TaskScheduler;
use crate::systems;
use crate::world_setup;

/// Engine construction parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimConfig {
    /// Seed for the spread RNG. Identical seeds and identical command
    /// sequences produce identical sessions.
    pub seed: u64,
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
        }
    }
}

/// Trigger and reload key state, updated by input commands.
///
/// Edges are live for exactly one tick and cleared at the end of every
/// tick, paused or not; the held flag persists until release.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub trigger_held: bool,
    pub trigger_edge: bool,
    pub reload_edge: bool,
}

/// The shooter's eye position and view direction.
#[derive(Debug, Clone, Copy)]
pub struct PlayerView {
    pub eye: Position,
    /// Unit view direction.
    pub forward: DVec3,
}

impl Default for PlayerView {
    fn default() -> Self {
        Self {
            eye: Position::new(0.0, DEFAULT_EYE_HEIGHT_M, 0.0),
            forward: DVec3::Z,
        }
    }
}

pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: SessionPhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    view: PlayerView,
    input: InputState,
    arsenal: Arsenal,
    ammo: AmmoPool,
    scheduler: TaskScheduler,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,
    animation_events: Vec<AnimationEvent>,
    effect_events: Vec<EffectEvent>,
}

impl SimulationEngine {
    /// Build an engine with the standard three-slot loadout.
    pub fn new(config: SimConfig) -> Result<Self, LoadoutError> {
        Self::with_loadout(
            config,
            profiles::standard_loadout(),
            profiles::starting_reserves(),
        )
    }

    /// Build an engine with a custom loadout. The loadout is validated up
    /// front so a running session never trips over bad weapon data.
    pub fn with_loadout(
        config: SimConfig,
        loadout: Vec<WeaponSpec>,
        reserves: Vec<(AmmoFamily, u32)>,
    ) -> Result<Self, LoadoutError> {
        profiles::validate_loadout(&loadout, &reserves)?;

        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: SessionPhase::Idle,
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            view: PlayerView::default(),
            input: InputState::default(),
            arsenal: Arsenal::new(loadout),
            ammo: AmmoPool::new(&reserves),
            scheduler: TaskScheduler::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            animation_events: Vec::new(),
            effect_events: Vec::new(),
        })
    }

    /// Queue a command for the next tick.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue several commands at once, preserving order.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and snapshot the result.
    pub fn tick(&mut self) -> SessionSnapshot {
        self.process_commands();

        if self.phase == SessionPhase::Active {
            self.run_systems();
            self.time.advance();
        }

        // Press edges only live for the tick they were raised on, even
        // while paused or idle.
        self.input.trigger_edge = false;
        self.input.reload_edge = false;

        let audio_events = std::mem::take(&mut self.audio_events);
        let animation_events = std::mem::take(&mut self.animation_events);
        let effect_events = std::mem::take(&mut self.effect_events);

        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.arsenal,
            &self.ammo,
            audio_events,
            animation_events,
            effect_events,
        )
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub fn arsenal(&self) -> &Arsenal {
        &self.arsenal
    }

    #[cfg(test)]
    pub fn arsenal_mut(&mut self) -> &mut Arsenal {
        &mut self.arsenal
    }

    #[cfg(test)]
    pub fn ammo_mut(&mut self) -> &mut AmmoPool {
        &mut self.ammo
    }

    #[cfg(test)]
    pub fn scheduler(&self) -> &TaskScheduler {
        &self.scheduler
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartSession => {
                if self.phase == SessionPhase::Idle {
                    world_setup::setup_range(&mut self.world);
                    self.time = SimTime::default();
                    self.phase = SessionPhase::Active;
                }
            }
            PlayerCommand::Pause => {
                if self.phase == SessionPhase::Active {
                    self.phase = SessionPhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == SessionPhase::Paused {
                    self.phase = SessionPhase::Active;
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, MAX_TIME_SCALE);
            }
            PlayerCommand::TriggerPressed => {
                self.input.trigger_held = true;
                self.input.trigger_edge = true;
            }
            PlayerCommand::TriggerReleased => {
                self.input.trigger_held = false;
            }
            PlayerCommand::ReloadPressed => {
                self.input.reload_edge = true;
            }
            PlayerCommand::AimPressed => {
                let weapon = self.arsenal.active_weapon_mut();
                if !weapon.aiming {
                    weapon.aiming = true;
                    self.animation_events.push(AnimationEvent::AdsEntered);
                }
            }
            PlayerCommand::AimReleased => {
                let weapon = self.arsenal.active_weapon_mut();
                if weapon.aiming {
                    weapon.aiming = false;
                    self.animation_events.push(AnimationEvent::AdsExited);
                }
            }
            PlayerCommand::SelectWeapon { slot } => {
                if slot != self.arsenal.active && slot < self.arsenal.slots.len() {
                    // Pending cooldowns, burst shots, and reloads belong to
                    // the outgoing weapon and die with the swap.
                    self.scheduler.cancel_slot(self.arsenal.active);
                    let outgoing = self.arsenal.active_weapon_mut();
                    if outgoing.aiming {
                        self.animation_events.push(AnimationEvent::AdsExited);
                    }
                    outgoing.reset_transient();
                    self.arsenal.active = slot;
                }
            }
            PlayerCommand::UpdateView { eye, forward } => {
                self.view.eye = eye;
                if forward.length_squared() > 1e-12 {
                    self.view.forward = forward.normalize();
                }
            }
            PlayerCommand::AddReserve { family, amount } => {
                self.ammo.add(family, amount);
            }
        }
    }

    fn run_systems(&mut self) {
        // 1. Deferred weapon tasks due this tick: cooldown re-arms, burst
        //    follow-up shots, reload completions.
        systems::weapon::run_scheduled(
            &mut self.world,
            &mut self.scheduler,
            &mut self.arsenal,
            &mut self.ammo,
            &mut self.rng,
            &self.view,
            self.time.tick,
            &mut self.audio_events,
            &mut self.animation_events,
            &mut self.effect_events,
        );

        // 2. Active weapon per-tick update: trigger, reload key, first shot.
        systems::weapon::run_update(
            &mut self.world,
            &mut self.scheduler,
            &mut self.arsenal,
            &self.ammo,
            &mut self.rng,
            &self.view,
            &self.input,
            self.time.tick,
            &mut self.audio_events,
            &mut self.animation_events,
            &mut self.effect_events,
        );

        // 3. Projectile flight integration.
        systems::movement::run(&mut self.world);

        // 4. Impact sweeps and lifetime expiry.
        systems::projectile::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.effect_events,
        );

        // 5. Remove downed targets and spent projectiles.
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.effect_events,
        );
    }
}
