//! Range initialization.

use hecs::{Entity, World};

use ironsight_core::components::{Collider, Health, TargetInfo};
use ironsight_core::constants::{DUMMY_HEALTH, DUMMY_RADIUS_M, PLATE_RADIUS_M};
use ironsight_core::enums::TargetKind;
use ironsight_core::types::Position;

/// Lay out the firing range: three practice dummies down the center lanes
/// and two steel plates further out. The shooter stands at the origin
/// looking down +z.
pub fn setup_range(world: &mut World) {
    spawn_dummy(world, 1, Position::new(-4.0, 1.2, 22.0));
    spawn_dummy(world, 2, Position::new(0.0, 1.2, 30.0));
    spawn_dummy(world, 3, Position::new(5.0, 1.2, 45.0));
    spawn_plate(world, 4, Position::new(-8.0, 1.5, 60.0));
    spawn_plate(world, 5, Position::new(9.0, 1.5, 80.0));
}

/// A dummy takes damage and goes down at zero hit points.
pub fn spawn_dummy(world: &mut World, id: u32, position: Position) -> Entity {
    world.spawn((
        position,
        Collider {
            radius: DUMMY_RADIUS_M,
        },
        Health {
            current: DUMMY_HEALTH,
        },
        TargetInfo {
            id,
            kind: TargetKind::Dummy,
        },
    ))
}

/// A plate just takes the hit; no health, never despawns.
pub fn spawn_plate(world: &mut World, id: u32, position: Position) -> Entity {
    world.spawn((
        position,
        Collider {
            radius: PLATE_RADIUS_M,
        },
        TargetInfo {
            id,
            kind: TargetKind::Plate,
        },
    ))
}
