use glam::Vec2;

use super::collision::Rect;

/// Kinematic state integrated by the physics world
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KinematicBody {
    /// Center of the visual body
    pub position: Vec2,
    /// Velocity in units/second
    pub velocity: Vec2,
    /// Set by the resolver when the collider rests on the ground
    pub on_ground: bool,
}

impl KinematicBody {
    /// Create a body at rest at `position`
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            on_ground: false,
        }
    }
}

/// Visual body size plus the inset collision box used for contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyShape {
    size: Vec2,
    collider_size: Vec2,
    collider_inset: Vec2,
}

impl BodyShape {
    /// `collider_inset` is measured from the body's top-left corner
    pub fn new(size: Vec2, collider_size: Vec2, collider_inset: Vec2) -> Self {
        Self {
            size,
            collider_size,
            collider_inset,
        }
    }

    /// A shape whose collider covers the whole body
    pub fn solid(size: Vec2) -> Self {
        Self::new(size, size, Vec2::ZERO)
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Half size of the collision box
    pub fn collider_half_extents(&self) -> Vec2 {
        self.collider_size * 0.5
    }

    /// Offset of the collider center from the body center
    pub fn collider_offset(&self) -> Vec2 {
        -self.size * 0.5 + self.collider_inset + self.collider_half_extents()
    }

    /// Distance from the body center to each collider edge
    pub fn extent_left(&self) -> f32 {
        self.collider_half_extents().x - self.collider_offset().x
    }

    pub fn extent_right(&self) -> f32 {
        self.collider_half_extents().x + self.collider_offset().x
    }

    pub fn extent_top(&self) -> f32 {
        self.collider_half_extents().y - self.collider_offset().y
    }

    pub fn extent_bottom(&self) -> f32 {
        self.collider_half_extents().y + self.collider_offset().y
    }

    /// World-space collision box for a body centered at `position`
    pub fn collider_rect(&self, position: Vec2) -> Rect {
        Rect::new(position + self.collider_offset(), self.collider_half_extents())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fighter_shape() -> BodyShape {
        BodyShape::new(Vec2::new(50.0, 90.0), Vec2::new(40.0, 88.0), Vec2::new(5.0, 2.0))
    }

    #[test]
    fn test_body_at_rest() {
        let body = KinematicBody::at(Vec2::new(3.0, 4.0));
        assert_eq!(body.velocity, Vec2::ZERO);
        assert!(!body.on_ground);
    }

    #[test]
    fn test_inset_collider_extents() {
        let shape = fighter_shape();
        assert_eq!(shape.extent_left(), 20.0);
        assert_eq!(shape.extent_right(), 20.0);
        assert_eq!(shape.extent_top(), 43.0);
        assert_eq!(shape.extent_bottom(), 45.0);
    }

    #[test]
    fn test_solid_shape_is_centered() {
        let shape = BodyShape::solid(Vec2::new(10.0, 20.0));
        assert_eq!(shape.collider_offset(), Vec2::ZERO);
        assert_eq!(shape.extent_bottom(), 10.0);
    }

    #[test]
    fn test_collider_rect() {
        let rect = fighter_shape().collider_rect(Vec2::new(100.0, 100.0));
        assert_eq!(rect.min(), Vec2::new(80.0, 57.0));
        assert_eq!(rect.max(), Vec2::new(120.0, 145.0));
    }
}
