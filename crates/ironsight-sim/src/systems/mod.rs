//! Simulation systems, run in a fixed order each tick.
//!
//! Systems are free functions over the engine's split-borrowed state.
//! They never talk to each other directly; anything a frontend needs to
//! know comes out through the event buffers and the snapshot.

pub mod cleanup;
pub mod movement;
pub mod projectile;
pub mod snapshot;
pub mod weapon;
