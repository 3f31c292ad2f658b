//! Shared reserve ammunition.

use std::collections::HashMap;

use ironsight_core::enums::AmmoFamily;

/// Reserve rounds keyed by ammo family. Weapons chambered for the same
/// family compete for the same pool. Only reload completion and pickup
/// commands mutate it.
#[derive(Debug, Default)]
pub struct AmmoPool {
    reserves: HashMap<AmmoFamily, u32>,
}

impl AmmoPool {
    pub fn new(starting: &[(AmmoFamily, u32)]) -> Self {
        Self {
            reserves: starting.iter().copied().collect(),
        }
    }

    /// Rounds available for a family. Unknown families read as zero.
    pub fn reserve(&self, family: AmmoFamily) -> u32 {
        self.reserves.get(&family).copied().unwrap_or(0)
    }

    /// Remove up to `amount` rounds, saturating at zero.
    pub fn decrement(&mut self, family: AmmoFamily, amount: u32) {
        if let Some(count) = self.reserves.get_mut(&family) {
            *count = count.saturating_sub(amount);
        }
    }

    /// Add rounds to a family's reserve (ammo pickups).
    pub fn add(&mut self, family: AmmoFamily, amount: u32) {
        *self.reserves.entry(family).or_insert(0) += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decrement_saturates_at_zero() {
        let mut pool = AmmoPool::new(&[(AmmoFamily::Para9, 10)]);
        pool.decrement(AmmoFamily::Para9, 25);
        assert_eq!(pool.reserve(AmmoFamily::Para9), 0);
    }

    #[test]
    fn test_unknown_family_reads_zero() {
        let pool = AmmoPool::new(&[(AmmoFamily::Para9, 10)]);
        assert_eq!(pool.reserve(AmmoFamily::Nato556), 0);
    }

    #[test]
    fn test_add_creates_missing_family() {
        let mut pool = AmmoPool::default();
        pool.add(AmmoFamily::Acp45, 14);
        assert_eq!(pool.reserve(AmmoFamily::Acp45), 14);
    }
}
