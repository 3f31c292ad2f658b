//! Shared vocabulary for the IRONSIGHT firing range simulation.
//!
//! This crate holds the plain data types exchanged between the simulation
//! engine, the weapon logic crate, and any frontend: components, commands,
//! events, snapshot views, and the fixed-timestep constants. It contains no
//! game logic.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
