//! Ray and sweep queries against target colliders.

use glam::DVec3;
use hecs::{Entity, World};

use ironsight_core::components::Collider;
use ironsight_core::constants::AIM_MAX_RANGE_M;
use ironsight_core::types::Position;

/// A resolved hit against a collider entity.
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    pub entity: Entity,
    pub point: DVec3,
    /// Unit vector out of the struck surface.
    pub normal: DVec3,
    /// Ray parameter of the hit, in meters from the origin.
    pub distance: f64,
}

/// Cast a ray against every collider sphere and return the nearest hit
/// within `max_range`. `dir` must be a unit vector.
pub fn cast_ray(world: &World, origin: DVec3, dir: DVec3, max_range: f64) -> Option<RayHit> {
    let mut nearest: Option<RayHit> = None;
    for (entity, (pos, collider)) in world.query::<(&Position, &Collider)>().iter() {
        let center = pos.to_dvec3();
        if let Some(t) = ray_sphere(origin, dir, center, collider.radius) {
            if t <= max_range && nearest.map_or(true, |hit| t < hit.distance) {
                let point = origin + dir * t;
                nearest = Some(RayHit {
                    entity,
                    point,
                    normal: (point - center).normalize_or_zero(),
                    distance: t,
                });
            }
        }
    }
    nearest
}

/// Sweep the segment from `start` to `end` and return the first collider
/// crossed. Degenerate segments hit nothing.
pub fn sweep_segment(world: &World, start: DVec3, end: DVec3) -> Option<RayHit> {
    let delta = end - start;
    let len = delta.length();
    if len <= f64::EPSILON {
        return None;
    }
    cast_ray(world, start, delta / len, len)
}

/// Resolve the aim ray to a world point: the nearest obstruction, or the
/// point `AIM_MAX_RANGE_M` down the ray when nothing is in the way.
pub fn resolve_aim_point(world: &World, eye: DVec3, forward: DVec3) -> DVec3 {
    match cast_ray(world, eye, forward, AIM_MAX_RANGE_M) {
        Some(hit) => hit.point,
        None => eye + forward * AIM_MAX_RANGE_M,
    }
}

/// Smallest non-negative ray parameter at which the ray enters the sphere.
fn ray_sphere(origin: DVec3, dir: DVec3, center: DVec3, radius: f64) -> Option<f64> {
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    let t_near = -b - sqrt_disc;
    let t_far = -b + sqrt_disc;
    if t_near >= 0.0 {
        Some(t_near)
    } else if t_far >= 0.0 {
        // Origin is inside the sphere; report the exit crossing.
        Some(t_far)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with_sphere(center: Position, radius: f64) -> World {
        let mut world = World::new();
        world.spawn((center, Collider { radius }));
        world
    }

    #[test]
    fn test_ray_hits_sphere_ahead() {
        let world = world_with_sphere(Position::new(0.0, 0.0, 10.0), 1.0);
        let hit = cast_ray(&world, DVec3::ZERO, DVec3::Z, 100.0).expect("should hit");
        assert!((hit.distance - 9.0).abs() < 1e-9);
        assert!((hit.normal - (-DVec3::Z)).length() < 1e-9);
    }

    #[test]
    fn test_ray_misses_sphere_behind() {
        let world = world_with_sphere(Position::new(0.0, 0.0, -10.0), 1.0);
        assert!(cast_ray(&world, DVec3::ZERO, DVec3::Z, 100.0).is_none());
    }

    #[test]
    fn test_nearest_of_two_spheres_wins() {
        let mut world = World::new();
        world.spawn((Position::new(0.0, 0.0, 20.0), Collider { radius: 1.0 }));
        world.spawn((Position::new(0.0, 0.0, 8.0), Collider { radius: 1.0 }));

        let hit = cast_ray(&world, DVec3::ZERO, DVec3::Z, 100.0).expect("should hit");
        assert!((hit.distance - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_aim_point_falls_back_to_max_range() {
        let world = World::new();
        let point = resolve_aim_point(&world, DVec3::ZERO, DVec3::Z);
        assert!((point.z - AIM_MAX_RANGE_M).abs() < 1e-9);
    }

    #[test]
    fn test_sweep_catches_tunneling_segment() {
        // Segment fully crosses the sphere in one step.
        let world = world_with_sphere(Position::new(0.0, 0.0, 5.0), 0.5);
        let hit = sweep_segment(&world, DVec3::ZERO, DVec3::new(0.0, 0.0, 15.0))
            .expect("sweep should catch the crossing");
        assert!((hit.distance - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_sweep_stops_short_of_sphere() {
        let world = world_with_sphere(Position::new(0.0, 0.0, 5.0), 0.5);
        assert!(sweep_segment(&world, DVec3::ZERO, DVec3::new(0.0, 0.0, 4.0)).is_none());
    }
}
