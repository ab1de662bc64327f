//! Collision detection for axis-aligned boxes
//!
//! Everything in the playfield is a box: the player sprite and the coins.
//! Overlap is strict, so boxes that only share an edge do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in playfield coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap test (touching edges do not count)
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f32, y: f32, s: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::splat(s))
    }

    #[test]
    fn test_overlap_partial() {
        let a = square(0.0, 0.0, 50.0);
        let b = square(40.0, 40.0, 16.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlap_contained() {
        let a = square(0.0, 0.0, 50.0);
        let b = square(10.0, 10.0, 16.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = square(0.0, 0.0, 50.0);
        assert!(!a.overlaps(&square(50.0, 0.0, 16.0)));
        assert!(!a.overlaps(&square(0.0, 50.0, 16.0)));
        assert!(!a.overlaps(&square(-16.0, 0.0, 16.0)));
        assert!(!a.overlaps(&square(0.0, -16.0, 16.0)));
    }

    #[test]
    fn test_separated() {
        let a = square(0.0, 0.0, 50.0);
        assert!(!a.overlaps(&square(100.0, 100.0, 16.0)));
        assert!(!a.overlaps(&square(10.0, 60.0, 16.0)));
    }

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }
}
