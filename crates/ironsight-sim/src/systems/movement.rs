//! Projectile flight integration.

use hecs::World;

use ironsight_core::constants::DT;
use ironsight_core::types::{Position, Velocity};

/// Advance every moving entity by one tick of straight-line flight.
/// Rounds on this range fly flat; there is no drag or drop model.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x * DT;
        pos.y += vel.y * DT;
        pos.z += vel.z * DT;
    }
}
