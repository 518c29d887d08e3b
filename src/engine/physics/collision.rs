use glam::Vec2;
use parry2d::bounding_volume::{Aabb, BoundingVolume};
use parry2d::math::Point;

/// Axis-aligned rectangle in arena units (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Create a rectangle from its center and full size
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self::new(center, size * 0.5)
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents
    }

    /// Convert to parry's bounding volume
    pub fn to_aabb(&self) -> Aabb {
        let min = self.min();
        let max = self.max();
        Aabb::new(Point::new(min.x, min.y), Point::new(max.x, max.y))
    }

    /// Check if two rectangles overlap (touching edges count)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.to_aabb().intersects(&other.to_aabb())
    }
}

/// Place an attack hitbox relative to its owner.
///
/// `offset` is given for a right-facing owner; its x component is mirrored
/// by `facing_sign`.
pub fn place_hitbox(owner_position: Vec2, facing_sign: f32, offset: Vec2, size: Vec2) -> Rect {
    let center = owner_position + Vec2::new(offset.x * facing_sign, offset.y);
    Rect::from_center_size(center, size)
}
