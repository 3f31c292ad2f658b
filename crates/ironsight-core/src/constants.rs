//! Simulation tuning constants.

// --- Timing ---

/// Fixed simulation ticks per second.
pub const TICK_RATE: u32 = 60;

/// Seconds elapsed per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Upper bound for the adjustable time scale.
pub const MAX_TIME_SCALE: f64 = 4.0;

// --- Aiming ---

/// Aim rays that hit nothing resolve to a point this far along the ray, in meters.
pub const AIM_MAX_RANGE_M: f64 = 100.0;

/// Projectiles spawn this far in front of the eye, along the view direction.
pub const MUZZLE_OFFSET_M: f64 = 0.4;

/// Eye height of the shooter above the range floor, in meters.
pub const DEFAULT_EYE_HEIGHT_M: f64 = 1.6;

// --- Range targets ---

/// Collision radius of a practice dummy, in meters.
pub const DUMMY_RADIUS_M: f64 = 0.5;

/// Collision radius of a steel plate, in meters.
pub const PLATE_RADIUS_M: f64 = 0.25;

/// Hit points of a freshly spawned practice dummy.
pub const DUMMY_HEALTH: i32 = 100;
