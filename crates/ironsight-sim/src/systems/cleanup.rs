//! End-of-tick removal.
//!
//! Sweeps downed targets into the despawn buffer, then despawns everything
//! the earlier systems queued. Runs last so no system ever observes a
//! half-removed entity.

use hecs::{Entity, World};

use ironsight_core::components::{Health, TargetInfo};
use ironsight_core::events::EffectEvent;
use ironsight_core::types::Position;

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, effect_events: &mut Vec<EffectEvent>) {
    for (entity, (info, health, pos)) in world.query_mut::<(&TargetInfo, &Health, &Position)>() {
        if health.current <= 0 {
            effect_events.push(EffectEvent::TargetDown {
                id: info.id,
                position: *pos,
            });
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
