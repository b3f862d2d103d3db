//! Axis-aligned collision with forgiving hitboxes
//!
//! Both boxes are shrunk inward before testing so grazing contact never
//! kills the player. Touching edges do not count as overlap.

use glam::Vec2;

/// Axis-aligned bounding box in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box from a top-left corner and a size
    pub fn from_rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Shrink inward by `padding` on all four sides
    pub fn shrink(&self, padding: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(padding),
            max: self.max - Vec2::splat(padding),
        }
    }

    /// Strict overlap on both axes; shared edges are a miss
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Check two boxes after shrinking each by `padding`
///
/// A box shrunk to nothing (or inside out) never reports a hit.
pub fn padded_overlap(a: &Aabb, b: &Aabb, padding: f32) -> bool {
    let a = a.shrink(padding);
    let b = b.shrink(padding);
    if a.width() <= 0.0 || a.height() <= 0.0 || b.width() <= 0.0 || b.height() <= 0.0 {
        return false;
    }
    a.overlaps(&b)
}
