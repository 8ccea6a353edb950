//! Axis-aligned rectangle geometry
//!
//! Screen space: origin at the top-left of the playfield, +x right, +y down.

use glam::Vec2;

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
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

    /// Standard AABB overlap test.
    ///
    /// Rectangles that only share an edge do not overlap: the ranges must
    /// intersect with positive extent on both axes.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// True if the rectangle lies entirely within `[0, bounds]` on both axes
    pub fn is_within(&self, bounds: Vec2) -> bool {
        self.left() >= 0.0
            && self.top() >= 0.0
            && self.right() <= bounds.x
            && self.bottom() <= bounds.y
    }
}
