//! Axis-aligned collision tests
//!
//! All comparisons are strict: rectangles that share an edge do not overlap.
//! Tests are discrete (no sweeping), so a fast enough mover can tunnel
//! through a thin band between two frames.

use glam::Vec2;

/// Axis-aligned bounding box in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box from its top-left corner and size
    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Square box from its top-left corner
    #[inline]
    pub fn square(pos: Vec2, side: f32) -> Self {
        Self::from_pos_size(pos, Vec2::splat(side))
    }

    /// True if the interiors of both boxes intersect
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Does a player box hit an obstacle's solid bands?
///
/// The obstacle occupies `[x, x + width)` horizontally and is solid above
/// `top` and below `bottom`. Only the open gap `[top, bottom]` is safe.
pub fn hits_obstacle(player: &Aabb, x: f32, width: f32, top: f32, bottom: f32) -> bool {
    let horizontal = player.min.x < x + width && player.max.x > x;
    horizontal && (player.min.y < top || player.max.y > bottom)
}
