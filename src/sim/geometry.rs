//! Steering and proximity math shared by every entity kind

use glam::Vec2;

/// Angle (radians) of the vector pointing from `from` to `to`
#[inline]
pub fn bearing_angle(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Unit heading for an angle
#[inline]
pub fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Check whether two circular footprints overlap
///
/// `scale` tightens (< 1) or loosens (> 1) the combined radius so collision
/// footprints can differ from the nominal sprite sizes.
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32, scale: f32) -> bool {
    a_pos.distance(b_pos) < scale * (a_radius + b_radius)
}

/// Cheap "close enough" test: product of axis deltas against a threshold
///
/// Not a distance. Any axis-aligned approach reads as arrived.
#[inline]
pub fn delta_product_below(pos: Vec2, target: Vec2, threshold: f32) -> bool {
    ((target.x - pos.x) * (target.y - pos.y)).abs() < threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn test_bearing_diagonal() {
        let angle = bearing_angle(Vec2::ZERO, Vec2::new(10.0, 10.0));
        assert!((angle - FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn test_bearing_negative_x() {
        let angle = bearing_angle(Vec2::new(5.0, 0.0), Vec2::new(-5.0, 0.0));
        assert!((angle.abs() - std::f32::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_overlap_is_strict() {
        // Exactly touching is not an overlap
        assert!(!circles_overlap(Vec2::ZERO, 5.0, Vec2::new(10.0, 0.0), 5.0, 1.0));
        assert!(circles_overlap(Vec2::ZERO, 5.0, Vec2::new(9.9, 0.0), 5.0, 1.0));
    }

    #[test]
    fn test_tighter_scale_rejects_near_miss() {
        let a = Vec2::ZERO;
        let b = Vec2::new(9.0, 0.0);
        assert!(circles_overlap(a, 5.0, b, 5.0, 1.0));
        assert!(!circles_overlap(a, 5.0, b, 5.0, 0.8));
    }

    #[test]
    fn test_delta_product_axis_aligned() {
        // Same row: product is zero no matter how far apart
        assert!(delta_product_below(Vec2::ZERO, Vec2::new(500.0, 0.0), 1.0));
        assert!(!delta_product_below(Vec2::ZERO, Vec2::new(10.0, 10.0), 16.0));
    }

    fn coord() -> impl Strategy<Value = f32> {
        -1000.0f32..1000.0
    }

    proptest! {
        #[test]
        fn prop_overlap_symmetric(
            ax in coord(), ay in coord(), ar in 0.0f32..100.0,
            bx in coord(), by in coord(), br in 0.0f32..100.0,
            scale in 0.1f32..2.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!(
                circles_overlap(a, ar, b, br, scale),
                circles_overlap(b, br, a, ar, scale)
            );
        }

        #[test]
        fn prop_overlap_monotonic_in_scale(
            ax in coord(), ay in coord(), ar in 0.0f32..100.0,
            bx in coord(), by in coord(), br in 0.0f32..100.0,
            scale in 0.1f32..2.0, extra in 0.0f32..2.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            if circles_overlap(a, ar, b, br, scale) {
                prop_assert!(circles_overlap(a, ar, b, br, scale + extra));
            }
        }
    }
}
