//! Collision tests between circular bodies and static walls
//!
//! Walls are tested against the circle by inflating each wall rectangle by
//! the circle radius and checking the circle center against the result.
//! The inflated shape keeps square corners, so a body can slip slightly
//! closer to a wall corner on the diagonal than an exact circle test would
//! allow. Movement feel depends on this; keep it.

use glam::Vec2;

use super::rect::Rect;

/// AABB overlap between two rectangles (touching edges overlap)
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}

/// Check whether a circle at `center` with radius `radius` hits any wall
///
/// Returns on the first wall hit.
pub fn circle_collides_any(center: Vec2, radius: f32, walls: &[Rect]) -> bool {
    // Compare against each edge pushed out by `radius` rather than building
    // the inflated rectangle, so the test stays monotonic in `radius`.
    walls.iter().any(|wall| {
        center.x >= wall.x - radius
            && center.x <= wall.right() + radius
            && center.y >= wall.y - radius
            && center.y <= wall.bottom() + radius
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn wall() -> Rect {
        Rect::new(100.0, 100.0, 8.0, 200.0)
    }

    #[test]
    fn test_circle_clear_of_wall() {
        assert!(!circle_collides_any(
            Vec2::new(70.0, 150.0),
            14.0,
            &[wall()]
        ));
    }

    #[test]
    fn test_circle_touching_wall_collides() {
        // Exactly radius away from the left face
        assert!(circle_collides_any(Vec2::new(86.0, 150.0), 14.0, &[wall()]));
    }

    #[test]
    fn test_square_corner_approximation() {
        // Diagonally off the top-left corner: true distance is ~14.1 > 13,
        // but the inflated rectangle still contains the point.
        let p = Vec2::new(100.0 - 10.0, 100.0 - 10.0);
        let true_dist = (p - Vec2::new(100.0, 100.0)).length();
        assert!(true_dist > 13.0);
        assert!(circle_collides_any(p, 13.0, &[wall()]));
    }

    #[test]
    fn test_no_walls() {
        assert!(!circle_collides_any(Vec2::ZERO, 100.0, &[]));
    }

    #[test]
    fn test_rects_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rects_overlap(&a, &Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!rects_overlap(&a, &Rect::new(20.0, 0.0, 10.0, 10.0)));
    }

    proptest! {
        #[test]
        fn prop_collision_monotonic_in_radius(
            px in -50.0f32..250.0,
            py in -50.0f32..350.0,
            r in 0.0f32..40.0,
            extra in 0.0f32..40.0,
        ) {
            let walls = [wall(), Rect::new(0.0, 0.0, 200.0, 8.0)];
            let p = Vec2::new(px, py);
            if circle_collides_any(p, r, &walls) {
                prop_assert!(circle_collides_any(p, r + extra, &walls));
            }
        }
    }
}
