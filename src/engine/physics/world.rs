use glam::Vec2;

use super::body::{BodyShape, KinematicBody};
use crate::core::math::ms_to_secs;

/// Surfaces a body touched during one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Contacts {
    pub ground: bool,
    pub ceiling: bool,
    pub left_wall: bool,
    pub right_wall: bool,
}

/// Arcade physics for a closed arena: gravity, integration and bounds.
///
/// Coordinates are screen-like, y grows downward, so gravity is positive.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsWorld {
    /// Arena width; x bounds are [0, width]
    width: f32,
    /// Arena height; the ceiling sits at y = 0
    height: f32,
    /// Upper surface of the ground
    ground_top: f32,
    /// Downward acceleration in units/second²
    gravity: f32,
}

impl PhysicsWorld {
    pub fn new(width: f32, height: f32, ground_top: f32, gravity: f32) -> Self {
        Self {
            width,
            height,
            ground_top,
            gravity,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn ground_top(&self) -> f32 {
        self.ground_top
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    /// Lowest and highest center position a body of `shape` can occupy
    pub fn center_bounds(&self, shape: &BodyShape) -> (Vec2, Vec2) {
        let min = Vec2::new(shape.extent_left(), shape.extent_top());
        let max = Vec2::new(
            self.width - shape.extent_right(),
            self.ground_top - shape.extent_bottom(),
        );
        (min, max)
    }

    /// Advance one body by `dt_ms` milliseconds.
    ///
    /// Gravity is applied first, then the position integrates the new
    /// velocity, then the collider is pushed back inside the arena. Any
    /// velocity component pointing into a touched surface is zeroed.
    pub fn step_body(&self, body: &mut KinematicBody, shape: &BodyShape, dt_ms: f32) -> Contacts {
        let dt = ms_to_secs(dt_ms);

        body.velocity.y += self.gravity * dt;
        body.position += body.velocity * dt;

        let (min, max) = self.center_bounds(shape);
        let mut contacts = Contacts::default();

        if body.position.x <= min.x {
            body.position.x = min.x;
            body.velocity.x = body.velocity.x.max(0.0);
            contacts.left_wall = true;
        } else if body.position.x >= max.x {
            body.position.x = max.x;
            body.velocity.x = body.velocity.x.min(0.0);
            contacts.right_wall = true;
        }

        if body.position.y >= max.y {
            body.position.y = max.y;
            body.velocity.y = 0.0;
            contacts.ground = true;
        } else if body.position.y <= min.y {
            body.position.y = min.y;
            body.velocity.y = 0.0;
            contacts.ceiling = true;
        }

        body.on_ground = contacts.ground;
        contacts
    }
}
