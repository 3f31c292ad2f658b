//! Per-model weapon data tables.
//!
//! All balance numbers live here, one profile per weapon model, so tuning
//! never touches the state machine or the engine.

use std::fmt;

use ironsight_core::enums::{AmmoFamily, FireMode, WeaponModel};

/// Audio cue names for one weapon model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CueSet {
    pub fire: &'static str,
    pub fire_aimed: &'static str,
    pub reload: &'static str,
}

/// Static description of one weapon model.
#[derive(Debug, Clone)]
pub struct WeaponSpec {
    pub model: WeaponModel,
    pub display_name: &'static str,
    pub fire_mode: FireMode,
    /// Rounds in a full magazine.
    pub magazine_capacity: u32,
    /// Rounds per trigger pull in burst mode. 1 for single and automatic.
    pub burst_size: u32,
    /// Seconds between shots; also the in-burst cadence.
    pub fire_cooldown_secs: f64,
    pub reload_secs: f64,
    /// Maximum jitter offset while hip firing, in meters per axis.
    pub spread_hip: f64,
    /// Maximum jitter offset while aiming down sights.
    pub spread_aimed: f64,
    pub damage_per_hit: i32,
    pub muzzle_speed_mps: f64,
    pub projectile_lifetime_secs: f64,
    pub ammo: AmmoFamily,
    pub cues: CueSet,
}

/// Look up the profile for a weapon model.
pub fn get_spec(model: WeaponModel) -> WeaponSpec {
    match model {
        WeaponModel::Pistol1911 => WeaponSpec {
            model,
            display_name: "M1911",
            fire_mode: FireMode::Single,
            magazine_capacity: 7,
            burst_size: 1,
            fire_cooldown_secs: 0.25,
            reload_secs: 1.6,
            spread_hip: 0.06,
            spread_aimed: 0.015,
            damage_per_hit: 25,
            muzzle_speed_mps: 250.0,
            projectile_lifetime_secs: 3.0,
            ammo: AmmoFamily::Acp45,
            cues: CueSet {
                fire: "p1911_fire",
                fire_aimed: "p1911_fire_ads",
                reload: "p1911_reload",
            },
        },
        WeaponModel::Mp5 => WeaponSpec {
            model,
            display_name: "MP5",
            fire_mode: FireMode::Burst,
            magazine_capacity: 30,
            burst_size: 3,
            fire_cooldown_secs: 0.1,
            reload_secs: 2.0,
            spread_hip: 0.05,
            spread_aimed: 0.012,
            damage_per_hit: 22,
            muzzle_speed_mps: 400.0,
            projectile_lifetime_secs: 3.0,
            ammo: AmmoFamily::Para9,
            cues: CueSet {
                fire: "mp5_fire",
                fire_aimed: "mp5_fire_ads",
                reload: "mp5_reload",
            },
        },
        WeaponModel::M16 => WeaponSpec {
            model,
            display_name: "M16",
            fire_mode: FireMode::Automatic,
            magazine_capacity: 30,
            burst_size: 1,
            fire_cooldown_secs: 0.1,
            reload_secs: 2.2,
            spread_hip: 0.08,
            spread_aimed: 0.02,
            damage_per_hit: 30,
            muzzle_speed_mps: 900.0,
            projectile_lifetime_secs: 3.0,
            ammo: AmmoFamily::Nato556,
            cues: CueSet {
                fire: "m16_fire",
                fire_aimed: "m16_fire_ads",
                reload: "m16_reload",
            },
        },
    }
}

/// The three-slot loadout a session starts with. Slot order is fixed:
/// sidearm, SMG, rifle.
pub fn standard_loadout() -> Vec<WeaponSpec> {
    vec![
        get_spec(WeaponModel::Pistol1911),
        get_spec(WeaponModel::Mp5),
        get_spec(WeaponModel::M16),
    ]
}

/// Reserve rounds a session starts with, per ammo family.
pub fn starting_reserves() -> Vec<(AmmoFamily, u32)> {
    vec![
        (AmmoFamily::Acp45, 48),
        (AmmoFamily::Para9, 90),
        (AmmoFamily::Nato556, 90),
    ]
}

/// Ways a loadout can be unusable. All of these are construction-time
/// failures; a running session never sees them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadoutError {
    EmptyLoadout,
    ZeroMagazine { model: WeaponModel },
    ZeroBurst { model: WeaponModel },
    BurstExceedsMagazine { model: WeaponModel },
    NonPositiveTiming { model: WeaponModel, field: &'static str },
    NegativeSpread { model: WeaponModel },
    InvertedSpread { model: WeaponModel },
    MissingCue { model: WeaponModel },
    MissingReserve { model: WeaponModel, family: AmmoFamily },
}

impl fmt::Display for LoadoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadoutError::EmptyLoadout => write!(f, "loadout has no weapons"),
            LoadoutError::ZeroMagazine { model } => {
                write!(f, "{model:?} has a zero-capacity magazine")
            }
            LoadoutError::ZeroBurst { model } => {
                write!(f, "{model:?} has a zero burst size")
            }
            LoadoutError::BurstExceedsMagazine { model } => {
                write!(f, "{model:?} burst size exceeds its magazine capacity")
            }
            LoadoutError::NonPositiveTiming { model, field } => {
                write!(f, "{model:?} has a non-positive {field}")
            }
            LoadoutError::NegativeSpread { model } => {
                write!(f, "{model:?} has a negative spread")
            }
            LoadoutError::InvertedSpread { model } => {
                write!(f, "{model:?} has a wider aimed spread than hip spread")
            }
            LoadoutError::MissingCue { model } => {
                write!(f, "{model:?} has an empty audio cue name")
            }
            LoadoutError::MissingReserve { model, family } => {
                write!(f, "{model:?} uses {family:?} but no reserve is defined for it")
            }
        }
    }
}

impl std::error::Error for LoadoutError {}

/// Validate a loadout and its reserves before a session starts.
pub fn validate_loadout(
    loadout: &[WeaponSpec],
    reserves: &[(AmmoFamily, u32)],
) -> Result<(), LoadoutError> {
    if loadout.is_empty() {
        return Err(LoadoutError::EmptyLoadout);
    }

    for spec in loadout {
        let model = spec.model;
        if spec.magazine_capacity == 0 {
            return Err(LoadoutError::ZeroMagazine { model });
        }
        if spec.burst_size == 0 {
            return Err(LoadoutError::ZeroBurst { model });
        }
        if spec.burst_size > spec.magazine_capacity {
            return Err(LoadoutError::BurstExceedsMagazine { model });
        }
        if spec.fire_cooldown_secs <= 0.0 {
            return Err(LoadoutError::NonPositiveTiming {
                model,
                field: "fire cooldown",
            });
        }
        if spec.reload_secs <= 0.0 {
            return Err(LoadoutError::NonPositiveTiming {
                model,
                field: "reload time",
            });
        }
        if spec.muzzle_speed_mps <= 0.0 {
            return Err(LoadoutError::NonPositiveTiming {
                model,
                field: "muzzle speed",
            });
        }
        if spec.projectile_lifetime_secs <= 0.0 {
            return Err(LoadoutError::NonPositiveTiming {
                model,
                field: "projectile lifetime",
            });
        }
        if spec.spread_hip < 0.0 || spec.spread_aimed < 0.0 {
            return Err(LoadoutError::NegativeSpread { model });
        }
        if spec.spread_aimed > spec.spread_hip {
            return Err(LoadoutError::InvertedSpread { model });
        }
        if spec.cues.fire.is_empty()
            || spec.cues.fire_aimed.is_empty()
            || spec.cues.reload.is_empty()
        {
            return Err(LoadoutError::MissingCue { model });
        }
        if !reserves.iter().any(|(family, _)| *family == spec.ammo) {
            return Err(LoadoutError::MissingReserve {
                model,
                family: spec.ammo,
            });
        }
    }

    Ok(())
}
