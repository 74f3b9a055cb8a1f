//! Axis-aligned bounding boxes and the overlap test
//!
//! Everything that can collide in this game is a rectangle, so collision
//! detection is a single strict AABB overlap check. Boxes that merely touch
//! at an edge do not collide.

use glam::Vec2;

/// An axis-aligned box: top-left corner plus extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
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

    /// Strict overlap test: both axis projections must properly intersect.
    ///
    /// All four comparisons are strict, so boxes sharing an edge (e.g. one
    /// box's right edge equal to the other's left edge) report no overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Clamp a left edge so a body of `body_width` stays inside `[0, field_width]`
#[inline]
pub fn clamp_to_width(x: f32, body_width: f32, field_width: f32) -> f32 {
    x.clamp(0.0, field_width - body_width)
}
