// Fighter stats - BOTH PLAYERS SHARE THE SAME STATS
// Differentiation comes from the player, not the numbers

use glam::Vec2;

use crate::engine::physics::BodyShape;

/// Movement, health and body dimensions of a fighter
#[derive(Debug, Clone, PartialEq)]
pub struct FighterStats {
    // Movement
    /// Horizontal speed while a direction is held (units/second)
    pub move_speed: f32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_velocity: f32,
    /// Per-tick multiplier applied to horizontal velocity with no input
    pub friction: f32,
    /// Horizontal speeds below this snap to rest while decaying
    pub rest_epsilon: f32,

    // Combat
    /// Starting and maximum health
    pub max_health: i32,

    // Dimensions
    /// Visual body size, position is its center
    pub body_size: Vec2,
    /// Collision box size
    pub collider_size: Vec2,
    /// Collision box offset from the body's top-left corner
    pub collider_inset: Vec2,
    /// Attack hitbox size
    pub hitbox_size: Vec2,
    /// Hitbox center offset from the body center when facing right
    pub hitbox_offset: Vec2,
}

/// The ONE set of fighter stats used by both players
pub const BASE_STATS: FighterStats = FighterStats {
    move_speed: 260.0,
    jump_velocity: -520.0,
    friction: 0.9,
    rest_epsilon: 1.0,

    max_health: 100,

    body_size: Vec2::new(50.0, 90.0),
    collider_size: Vec2::new(40.0, 88.0),
    collider_inset: Vec2::new(5.0, 2.0),
    hitbox_size: Vec2::new(40.0, 30.0),
    hitbox_offset: Vec2::new(48.0, -10.0),
};

impl Default for FighterStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl FighterStats {
    /// Get the standard fighter stats (same for both players)
    pub fn standard() -> Self {
        BASE_STATS
    }

    /// Collision shape used by the physics resolver
    pub fn body_shape(&self) -> BodyShape {
        BodyShape::new(self.body_size, self.collider_size, self.collider_inset)
    }
}
