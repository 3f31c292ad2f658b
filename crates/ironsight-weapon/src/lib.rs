//! Weapon decision logic for IRONSIGHT.
//!
//! Pure per-tick firing and reload decisions plus the per-model weapon data
//! tables. This crate has no ECS or engine dependency; it operates on plain
//! context structs so the logic is testable in isolation.

pub mod fsm;
pub mod profiles;

pub use ironsight_core as core;
