//! Shot direction jitter.
//!
//! Spread is applied in the view plane: the base direction is nudged along
//! the camera's right and up axes, never along the view direction itself,
//! so groups stay symmetric around the point of aim.

use glam::DVec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Camera-space basis for a view direction: `(right, up)`.
/// Falls back to the world x axis when looking straight up or down.
pub fn view_basis(forward: DVec3) -> (DVec3, DVec3) {
    let fwd = forward.normalize_or_zero();
    let mut right = fwd.cross(DVec3::Y);
    if right.length_squared() < 1e-9 {
        right = DVec3::X;
    } else {
        right = right.normalize();
    }
    let up = right.cross(fwd).normalize();
    (right, up)
}

/// Jitter `base_dir` by uniform offsets in `[-spread, +spread]` along the
/// view-orthogonal axes, then normalize. `spread` of zero returns the base
/// direction unchanged (modulo normalization).
pub fn jitter_direction(
    base_dir: DVec3,
    view_forward: DVec3,
    spread: f64,
    rng: &mut ChaCha8Rng,
) -> DVec3 {
    let (right, up) = view_basis(view_forward);
    let dx = rng.gen_range(-spread..=spread);
    let dy = rng.gen_range(-spread..=spread);
    (base_dir + right * dx + up * dy).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_view_basis_is_orthonormal() {
        let (right, up) = view_basis(DVec3::new(0.3, -0.2, 0.9));
        let fwd = DVec3::new(0.3, -0.2, 0.9).normalize();

        assert!(right.dot(fwd).abs() < 1e-9);
        assert!(up.dot(fwd).abs() < 1e-9);
        assert!(right.dot(up).abs() < 1e-9);
        assert!((right.length() - 1.0).abs() < 1e-9);
        assert!((up.length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_view_basis_handles_vertical_look() {
        let (right, up) = view_basis(DVec3::Y);
        assert!((right.length() - 1.0).abs() < 1e-9);
        assert!((up.length() - 1.0).abs() < 1e-9);
        assert!(right.dot(up).abs() < 1e-9);
    }

    #[test]
    fn test_zero_spread_preserves_direction() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let base = DVec3::new(0.0, 0.0, 30.0);
        let dir = jitter_direction(base, DVec3::Z, 0.0, &mut rng);
        assert!((dir - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_jitter_stays_in_view_plane() {
        // Offsets are orthogonal to the view direction, so the z component
        // of the jittered direction can only shrink via normalization.
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let base = DVec3::new(0.0, 0.0, 30.0);
        for _ in 0..100 {
            let dir = jitter_direction(base, DVec3::Z, 0.5, &mut rng);
            assert!((dir.length() - 1.0).abs() < 1e-9);
            assert!(dir.z > 0.99, "jitter should stay close to the aim line");
        }
    }
}
