//! Per-tick weapon state machine.
//!
//! `evaluate` is a pure function from a weapon's observable state and input
//! to a decision. The engine owns the follow-through: spawning projectiles,
//! scheduling the cooldown and reload timers, and mutating the magazine.

use ironsight_core::enums::FireMode;

/// Everything the state machine reads for one weapon on one tick.
#[derive(Debug, Clone, Copy)]
pub struct WeaponContext {
    pub fire_mode: FireMode,
    pub magazine_current: u32,
    pub magazine_capacity: u32,
    /// Cooldown latch. False from a shot until the re-arm timer fires.
    pub ready_to_fire: bool,
    pub reloading: bool,
    /// Rounds in the shared reserve for this weapon's ammo family.
    pub reserve: u32,
    /// Trigger is currently held down.
    pub trigger_held: bool,
    /// Trigger went down this tick.
    pub trigger_edge: bool,
    /// Reload key went down this tick.
    pub reload_pressed: bool,
}

/// What the weapon should do this tick.
///
/// `start_reload` and `fire` are mutually exclusive: a reload decision
/// always suppresses firing on the same tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeaponDecision {
    /// Play the dry-fire cue.
    pub empty_cue: bool,
    /// Begin the reload sequence.
    pub start_reload: bool,
    /// Fire one shot (and start a burst chain in burst mode).
    pub fire: bool,
}

/// Evaluate one weapon for one tick.
pub fn evaluate(ctx: &WeaponContext) -> WeaponDecision {
    // Automatic reads the held trigger; single and burst fire once per press.
    let wants_to_fire = match ctx.fire_mode {
        FireMode::Automatic => ctx.trigger_held,
        FireMode::Single | FireMode::Burst => ctx.trigger_edge,
    };

    // Dry-fire click on an empty magazine. Not suppressed by an ongoing
    // reload; the trigger still clicks while the magazine is out.
    let empty_cue = ctx.magazine_current == 0 && wants_to_fire;

    let mut reloading = ctx.reloading;
    let mut start_reload = false;

    // Manual reload. Refused at full magazine, mid-reload, or with a dry
    // reserve.
    if ctx.reload_pressed
        && ctx.magazine_current < ctx.magazine_capacity
        && !reloading
        && ctx.reserve > 0
    {
        start_reload = true;
        reloading = true;
    }

    // Auto-reload once the weapon runs dry and the trigger is released.
    // No reserve gate here: with an empty reserve this still runs the
    // reload animation and loads zero rounds.
    if ctx.ready_to_fire && !wants_to_fire && !reloading && ctx.magazine_current == 0 {
        start_reload = true;
        reloading = true;
    }

    let fire = ctx.ready_to_fire && wants_to_fire && ctx.magazine_current > 0 && !reloading;

    WeaponDecision {
        empty_cue,
        start_reload,
        fire,
    }
}
