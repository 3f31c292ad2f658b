//! The shooter's weapon slots.

use ironsight_weapon::profiles::WeaponSpec;

/// Runtime state for one weapon slot. The static profile rides along so
/// systems never need a separate table lookup.
#[derive(Debug, Clone)]
pub struct WeaponState {
    pub spec: WeaponSpec,
    pub magazine_current: u32,
    /// Shots left in the burst chain currently being fired.
    pub burst_remaining: u32,
    /// Cooldown latch. Cleared by a shot, set again by the re-arm task.
    pub ready_to_fire: bool,
    pub reloading: bool,
    pub aiming: bool,
}

impl WeaponState {
    /// A fresh weapon starts with a full magazine.
    pub fn new(spec: WeaponSpec) -> Self {
        Self {
            magazine_current: spec.magazine_capacity,
            burst_remaining: spec.burst_size,
            ready_to_fire: true,
            reloading: false,
            aiming: false,
            spec,
        }
    }

    /// Drop the transient latches back to their holstered values. Magazine
    /// contents survive; an interrupted reload loads nothing.
    pub fn reset_transient(&mut self) {
        self.ready_to_fire = true;
        self.reloading = false;
        self.burst_remaining = self.spec.burst_size;
        self.aiming = false;
    }
}

/// All carried weapons plus the active slot index.
///
/// Construction guarantees at least one slot, and `active` is only ever
/// set to a valid index, so active-weapon access never fails.
#[derive(Debug)]
pub struct Arsenal {
    pub slots: Vec<WeaponState>,
    pub active: usize,
}

impl Arsenal {
    pub fn new(loadout: Vec<WeaponSpec>) -> Self {
        Self {
            slots: loadout.into_iter().map(WeaponState::new).collect(),
            active: 0,
        }
    }

    pub fn active_weapon(&self) -> &WeaponState {
        &self.slots[self.active]
    }

    pub fn active_weapon_mut(&mut self) -> &mut WeaponState {
        &mut self.slots[self.active]
    }
}
