// Match configuration - every tunable of the simulation in one place

use glam::Vec2;
use thiserror::Error;

use super::characters::{AttackWindows, Facing, FighterStats};
use crate::engine::physics::PhysicsWorld;

/// Invalid tunable values rejected by `CombatConfig::validate`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("arena must have a positive size, got {width}x{height}")]
    ArenaSize { width: f32, height: f32 },

    #[error("ground thickness {thickness} must be in [0, arena height {height})")]
    GroundThickness { thickness: f32, height: f32 },

    #[error("gravity must be finite and non-negative, got {0}")]
    Gravity(f32),

    #[error("fighter collider {width}x{height} does not fit above the ground")]
    ColliderTooLarge { width: f32, height: f32 },

    #[error("collider must lie inside the body and have a positive size")]
    ColliderOutsideBody,

    #[error("friction factor must be in [0, 1), got {0}")]
    Friction(f32),

    #[error("max health must be positive, got {0}")]
    MaxHealth(i32),

    #[error("{name} must be finite and non-negative, got {value}")]
    Duration { name: &'static str, value: f32 },

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },

    #[error("hitbox must have a positive size, got {width}x{height}")]
    HitboxSize { width: f32, height: f32 },

    #[error("damage range [{min}, {max}] is invalid")]
    DamageRange { min: i32, max: i32 },

    #[error("spawn point for player {player} is outside the arena")]
    SpawnOutsideArena { player: u8 },
}

/// Arena geometry and gravity
#[derive(Debug, Clone, PartialEq)]
pub struct ArenaConfig {
    /// Arena width in logical units
    pub width: f32,
    /// Arena height in logical units
    pub height: f32,
    /// Thickness of the ground slab resting on the arena floor
    pub ground_thickness: f32,
    /// Downward acceleration in units/second²
    pub gravity: f32,
}

pub const STANDARD_ARENA: ArenaConfig = ArenaConfig {
    width: 800.0,
    height: 450.0,
    ground_thickness: 40.0,
    gravity: 1200.0,
};

impl Default for ArenaConfig {
    fn default() -> Self {
        STANDARD_ARENA
    }
}

impl ArenaConfig {
    /// y coordinate of the ground's upper surface
    pub fn ground_top(&self) -> f32 {
        self.height - self.ground_thickness
    }

    /// Build the physics world for this arena
    pub fn physics_world(&self) -> PhysicsWorld {
        PhysicsWorld::new(self.width, self.height, self.ground_top(), self.gravity)
    }
}

/// Attack timing, damage and hit reaction
#[derive(Debug, Clone, PartialEq)]
pub struct AttackTiming {
    /// Minimum time between two attack triggers
    pub cooldown_ms: f32,
    /// Delay from trigger until the hitbox opens
    pub wind_up_ms: f32,
    /// How long the hitbox stays open
    pub active_ms: f32,
    /// How long the attack counts as live from the trigger
    pub total_ms: f32,
    /// Time after being hit during which further hits are ignored
    pub invuln_ms: f32,
    /// Smallest damage roll (inclusive)
    pub damage_min: i32,
    /// Largest damage roll (inclusive)
    pub damage_max: i32,
    /// Velocity given to the defender, x mirrored by attacker facing
    pub knockback: Vec2,
    /// How long a struck fighter reports `flashing`
    pub flash_ms: f32,
}

pub const STANDARD_TIMING: AttackTiming = AttackTiming {
    cooldown_ms: 450.0,
    wind_up_ms: 60.0,
    active_ms: 120.0,
    total_ms: 150.0,
    invuln_ms: 300.0,
    damage_min: 8,
    damage_max: 11,
    knockback: Vec2::new(260.0, -150.0),
    flash_ms: 100.0,
};

impl Default for AttackTiming {
    fn default() -> Self {
        STANDARD_TIMING
    }
}

impl AttackTiming {
    /// Phase boundaries for the attack state machine
    pub fn windows(&self) -> AttackWindows {
        AttackWindows::new(self.wind_up_ms, self.active_ms, self.total_ms)
    }
}

/// Where and how a fighter enters the match
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPoint {
    pub position: Vec2,
    pub facing: Facing,
}

impl SpawnPoint {
    pub const fn new(x: f32, y: f32, facing: Facing) -> Self {
        Self {
            position: Vec2::new(x, y),
            facing,
        }
    }
}

/// Complete configuration of a match
#[derive(Debug, Clone, PartialEq)]
pub struct CombatConfig {
    pub arena: ArenaConfig,
    pub stats: FighterStats,
    pub timing: AttackTiming,
    /// Spawn for player 1 and player 2
    pub spawns: [SpawnPoint; 2],
    /// Seed for damage rolls
    pub seed: u64,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            arena: STANDARD_ARENA,
            stats: FighterStats::standard(),
            timing: STANDARD_TIMING,
            spawns: [
                SpawnPoint::new(200.0, 370.0, Facing::Right),
                SpawnPoint::new(600.0, 370.0, Facing::Right),
            ],
            seed: 0,
        }
    }
}

impl CombatConfig {
    /// Standard configuration with the given damage seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Check every tunable for values the simulation cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        let arena = &self.arena;
        if !(arena.width > 0.0 && arena.height > 0.0)
            || !arena.width.is_finite()
            || !arena.height.is_finite()
        {
            return Err(ConfigError::ArenaSize {
                width: arena.width,
                height: arena.height,
            });
        }
        if !(arena.ground_thickness >= 0.0 && arena.ground_thickness < arena.height) {
            return Err(ConfigError::GroundThickness {
                thickness: arena.ground_thickness,
                height: arena.height,
            });
        }
        if !(arena.gravity.is_finite() && arena.gravity >= 0.0) {
            return Err(ConfigError::Gravity(arena.gravity));
        }

        let stats = &self.stats;
        for (name, value) in [
            ("move_speed", stats.move_speed),
            ("jump_velocity", stats.jump_velocity),
            ("rest_epsilon", stats.rest_epsilon),
            ("body_size.x", stats.body_size.x),
            ("body_size.y", stats.body_size.y),
            ("collider_size.x", stats.collider_size.x),
            ("collider_size.y", stats.collider_size.y),
            ("collider_inset.x", stats.collider_inset.x),
            ("collider_inset.y", stats.collider_inset.y),
            ("hitbox_offset.x", stats.hitbox_offset.x),
            ("hitbox_offset.y", stats.hitbox_offset.y),
            ("knockback.x", self.timing.knockback.x),
            ("knockback.y", self.timing.knockback.y),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        let hitbox = stats.hitbox_size;
        if !(hitbox.is_finite() && hitbox.x > 0.0 && hitbox.y > 0.0) {
            return Err(ConfigError::HitboxSize {
                width: hitbox.x,
                height: hitbox.y,
            });
        }

        let inset = stats.collider_inset;
        let collider = stats.collider_size;
        if collider.x <= 0.0
            || collider.y <= 0.0
            || inset.x < 0.0
            || inset.y < 0.0
            || inset.x + collider.x > stats.body_size.x
            || inset.y + collider.y > stats.body_size.y
        {
            return Err(ConfigError::ColliderOutsideBody);
        }
        if collider.x > arena.width || collider.y > arena.ground_top() {
            return Err(ConfigError::ColliderTooLarge {
                width: collider.x,
                height: collider.y,
            });
        }
        if !(stats.friction >= 0.0 && stats.friction < 1.0) {
            return Err(ConfigError::Friction(stats.friction));
        }
        if stats.max_health <= 0 {
            return Err(ConfigError::MaxHealth(stats.max_health));
        }

        let timing = &self.timing;
        for (name, value) in [
            ("cooldown_ms", timing.cooldown_ms),
            ("wind_up_ms", timing.wind_up_ms),
            ("active_ms", timing.active_ms),
            ("total_ms", timing.total_ms),
            ("invuln_ms", timing.invuln_ms),
            ("flash_ms", timing.flash_ms),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Duration { name, value });
            }
        }
        if timing.damage_min < 0 || timing.damage_min > timing.damage_max {
            return Err(ConfigError::DamageRange {
                min: timing.damage_min,
                max: timing.damage_max,
            });
        }

        for (index, spawn) in self.spawns.iter().enumerate() {
            let p = spawn.position;
            if !(p.x >= 0.0 && p.x <= arena.width && p.y >= 0.0 && p.y <= arena.height) {
                return Err(ConfigError::SpawnOutsideArena {
                    player: index as u8 + 1,
                });
            }
        }

        Ok(())
    }
}
