//! Axis-aligned rectangles for rooms and walls
//!
//! Screen-style coordinates: origin at the top-left, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    /// Width (non-negative)
    pub w: f32,
    /// Height (non-negative)
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Grow the rectangle by `r` on every side
    pub fn inflate(&self, r: f32) -> Self {
        Self::new(self.x - r, self.y - r, self.w + r * 2.0, self.h + r * 2.0)
    }

    /// Inclusive point test (points on the edge are inside)
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Inclusive AABB overlap; rectangles sharing an edge overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(other.x > self.right()
            || other.right() < self.x
            || other.y > self.bottom()
            || other.bottom() < self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inflate() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0).inflate(5.0);
        assert_eq!(r, Rect::new(5.0, 15.0, 40.0, 50.0));
    }

    #[test]
    fn test_contains_point_edges() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_point(Vec2::new(0.0, 0.0)));
        assert!(r.contains_point(Vec2::new(10.0, 10.0)));
        assert!(!r.contains_point(Vec2::new(10.01, 5.0)));
    }

    #[test]
    fn test_overlaps() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shared edge counts
        assert!(a.overlaps(&Rect::new(10.0, 0.0, 5.0, 5.0)));
        assert!(a.overlaps(&Rect::new(2.0, 2.0, 2.0, 2.0)));
        assert!(!a.overlaps(&Rect::new(10.5, 0.0, 5.0, 5.0)));
        assert!(!a.overlaps(&Rect::new(0.0, -6.0, 5.0, 5.0)));
    }
}
