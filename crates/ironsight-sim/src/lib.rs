//! Simulation engine for IRONSIGHT.
//!
//! A headless, deterministic, fixed-timestep firing range: queue player
//! commands, call [`SimulationEngine::tick`], render the returned snapshot.
//! All weapon handling, projectile flight, and target damage happens here;
//! frontends only translate input into commands and snapshots into pixels.

pub mod ammo;
pub mod arsenal;
pub mod engine;
pub mod raycast;
pub mod scheduler;
pub mod spread;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use ironsight_core as core;
