//! Command-line driver for the IRONSIGHT simulation.
//!
//! Runs a scripted range session against the headless engine: one pistol
//! shot, an aimed burst, a second of automatic fire, and a reload. Events
//! are logged as they happen; pass `--json` to dump the final snapshot.

use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ironsight_core::commands::PlayerCommand;
use ironsight_core::constants::TICK_RATE;
use ironsight_core::events::{AudioEvent, EffectEvent};
use ironsight_core::state::SessionSnapshot;
use ironsight_sim::{SimConfig, SimulationEngine};
use ironsight_weapon::profiles;

/// Headless firing range simulation driven by a scripted session.
#[derive(Parser, Debug)]
#[command(name = "ironsight", version, about)]
struct Args {
    /// Seed for the spread RNG.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of ticks to run (60 per second).
    #[arg(long, default_value_t = 720)]
    ticks: u64,

    /// Simulation speed multiplier for real-time pacing.
    #[arg(long, default_value_t = 1.0)]
    time_scale: f64,

    /// Pace ticks against the wall clock instead of free-running.
    #[arg(long)]
    realtime: bool,

    /// Print the final snapshot as pretty JSON on stdout.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Default)]
struct Tally {
    shots: usize,
    impacts: usize,
    targets_down: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = Args::parse();

    let mut engine = SimulationEngine::new(SimConfig {
        seed: args.seed,
        time_scale: args.time_scale,
    })?;

    for spec in profiles::standard_loadout() {
        info!(
            model = ?spec.model,
            mode = ?spec.fire_mode,
            magazine = spec.magazine_capacity,
            "weapon slot"
        );
    }

    let mut script = demo_script();
    let tick_duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);
    let mut next_tick_time = Instant::now() + tick_duration;

    let mut tally = Tally::default();
    let mut final_snapshot = SessionSnapshot::default();

    for i in 0..args.ticks {
        while script.front().map_or(false, |(due, _)| *due == i) {
            if let Some((_, command)) = script.pop_front() {
                debug!(tick = i, command = ?command, "scripted input");
                engine.queue_command(command);
            }
        }

        let snapshot = engine.tick();
        log_events(&snapshot, &mut tally);

        if args.realtime {
            let scale = engine.time_scale();
            let effective = if scale > 0.0 {
                tick_duration.div_f64(scale)
            } else {
                tick_duration
            };
            let now = Instant::now();
            if next_tick_time > now {
                thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > effective * 2 {
                // Fell too far behind; resync rather than sprint to catch up.
                next_tick_time = now;
            }
            next_tick_time += effective;
        }

        final_snapshot = snapshot;
    }

    info!(
        ticks = args.ticks,
        shots = tally.shots,
        impacts = tally.impacts,
        targets_down = tally.targets_down,
        "session complete"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&final_snapshot)?);
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if use_json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

/// The canned session: walks each weapon through its firing mode.
fn demo_script() -> VecDeque<(u64, PlayerCommand)> {
    vec![
        (0, PlayerCommand::StartSession),
        // One pistol shot at the center dummy.
        (30, PlayerCommand::TriggerPressed),
        (36, PlayerCommand::TriggerReleased),
        // Aimed three-round burst from the MP5.
        (90, PlayerCommand::SelectWeapon { slot: 1 }),
        (120, PlayerCommand::AimPressed),
        (150, PlayerCommand::TriggerPressed),
        (156, PlayerCommand::TriggerReleased),
        (240, PlayerCommand::AimReleased),
        // A second of automatic fire, then top the rifle back up.
        (270, PlayerCommand::SelectWeapon { slot: 2 }),
        (300, PlayerCommand::TriggerPressed),
        (360, PlayerCommand::TriggerReleased),
        (420, PlayerCommand::ReloadPressed),
        (600, PlayerCommand::TriggerPressed),
        (606, PlayerCommand::TriggerReleased),
    ]
    .into_iter()
    .collect()
}

fn log_events(snapshot: &SessionSnapshot, tally: &mut Tally) {
    let tick = snapshot.time.tick;

    for event in &snapshot.audio_events {
        if matches!(event, AudioEvent::WeaponFired { .. }) {
            tally.shots += 1;
        }
        info!(tick, event = ?event, "audio");
    }

    for event in &snapshot.animation_events {
        debug!(tick, event = ?event, "animation");
    }

    for event in &snapshot.effect_events {
        match event {
            EffectEvent::Impact { .. } => tally.impacts += 1,
            EffectEvent::TargetDown { .. } => tally.targets_down += 1,
            EffectEvent::MuzzleFlash { .. } => {}
        }
        info!(tick, event = ?event, "effect");
    }
}
