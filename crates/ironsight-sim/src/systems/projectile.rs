//! Projectile impacts and lifetime expiry.
//!
//! Runs after movement. Each projectile sweeps the segment it covered this
//! tick against the target colliders, so fast rounds cannot tunnel through
//! a target between steps. A hit despawns the round at the hit point; a
//! round that outlives its fuse despawns silently. When both happen on the
//! same tick the hit wins.

use glam::DVec3;
use hecs::{Entity, World};

use ironsight_core::components::{Health, Projectile};
use ironsight_core::constants::DT;
use ironsight_core::enums::ImpactKind;
use ironsight_core::events::EffectEvent;
use ironsight_core::types::{Position, Velocity};

use crate::raycast::{self, RayHit};

struct Shot {
    entity: Entity,
    start: DVec3,
    end: DVec3,
    damage: i32,
    expired: bool,
}

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, effect_events: &mut Vec<EffectEvent>) {
    // Gather kinematics first; the sweep needs shared access to the world.
    let mut shots = Vec::new();
    for (entity, (pos, vel, projectile)) in
        world.query_mut::<(&Position, &Velocity, &mut Projectile)>()
    {
        projectile.lifetime_secs -= DT;
        let end = pos.to_dvec3();
        let start = end - vel.to_dvec3() * DT;
        shots.push(Shot {
            entity,
            start,
            end,
            damage: projectile.damage,
            expired: projectile.lifetime_secs <= 0.0,
        });
    }

    for shot in shots {
        match raycast::sweep_segment(world, shot.start, shot.end) {
            Some(hit) => {
                apply_impact(world, &hit, shot.damage, effect_events);
                despawn_buffer.push(shot.entity);
            }
            None if shot.expired => despawn_buffer.push(shot.entity),
            None => {}
        }
    }
}

/// Damage the struck entity if it tracks health, and emit the impact
/// effect matched to what was hit.
fn apply_impact(world: &mut World, hit: &RayHit, damage: i32, effect_events: &mut Vec<EffectEvent>) {
    let kind = match world.get::<&mut Health>(hit.entity) {
        Ok(mut health) => {
            health.current -= damage;
            ImpactKind::Flesh
        }
        Err(_) => ImpactKind::Surface,
    };

    effect_events.push(EffectEvent::Impact {
        position: Position::from_dvec3(hit.point),
        normal: hit.normal,
        kind,
    });
}
