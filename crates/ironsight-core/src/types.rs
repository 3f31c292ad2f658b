//! Core spatial and timing types.
//!
//! The range uses a right-handed, y-up coordinate frame with meters as the
//! unit. Down-range is +z from the shooter's default stance.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::TICK_RATE;

/// World position in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    pub fn from_dvec3(v: DVec3) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }

    /// Straight-line distance to another position, in meters.
    pub fn range_to(&self, other: &Position) -> f64 {
        self.to_dvec3().distance(other.to_dvec3())
    }
}

/// World velocity in meters per second.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Velocity {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    pub fn from_dvec3(v: DVec3) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }

    /// Speed in meters per second.
    pub fn speed(&self) -> f64 {
        self.to_dvec3().length()
    }
}

/// Simulation clock. Advances once per active tick; frozen while paused.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SimTime {
    pub tick: u64,
    pub elapsed_secs: f64,
}

impl SimTime {
    pub fn dt(&self) -> f64 {
        1.0 / TICK_RATE as f64
    }

    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs = self.tick as f64 / TICK_RATE as f64;
    }
}

/// Convert a duration in seconds to whole ticks, rounding to the nearest tick.
pub fn secs_to_ticks(secs: f64) -> u64 {
    (secs * TICK_RATE as f64).round() as u64
}
