// Fighter entity: kinematics, attack timing, health and hit reaction

use glam::Vec2;
use rand::Rng;

use crate::core::math::{decay_toward_rest, has_elapsed};
use crate::engine::input::{FrameInput, PlayerSlot};
use crate::engine::physics::{place_hitbox, BodyShape, Contacts, KinematicBody, PhysicsWorld, Rect};
use crate::game::combat::Hit;
use crate::game::config::{AttackTiming, CombatConfig, SpawnPoint};
use crate::game::snapshot::FighterSnapshot;

use super::state::{AttackState, AttackStateMachine, Facing};
use super::stats::FighterStats;

/// One combatant of a match
///
/// A fighter only ever mutates itself. Hits on the opponent are computed
/// against a shared borrow and handed back to the match as a [`Hit`].
#[derive(Debug, Clone)]
pub struct Fighter {
    slot: PlayerSlot,
    body: KinematicBody,
    facing: Facing,
    health: i32,
    max_health: i32,
    attack: AttackStateMachine,
    /// Match time of the last attack trigger (None = never attacked)
    last_attack_at: Option<f64>,
    /// Match time this fighter last took damage (None = never hit)
    last_hit_at: Option<f64>,
    /// Match time the hit flash ends
    flash_until: Option<f64>,
}

impl Fighter {
    /// Create a fighter at its spawn point with full health
    pub fn new(slot: PlayerSlot, spawn: &SpawnPoint, stats: &FighterStats) -> Self {
        Self {
            slot,
            body: KinematicBody::at(spawn.position),
            facing: spawn.facing,
            health: stats.max_health,
            max_health: stats.max_health,
            attack: AttackStateMachine::new(),
            last_attack_at: None,
            last_hit_at: None,
            flash_until: None,
        }
    }

    /// Apply one tick of input at match time `now_ms`.
    ///
    /// Sets horizontal velocity and facing, starts a jump, advances the
    /// current attack and starts a new one on a fresh attack press. Gravity
    /// and collision are left to the physics step. Returns true if an attack
    /// started this tick.
    pub fn update(
        &mut self,
        dt_ms: f32,
        input: &FrameInput,
        now_ms: f64,
        config: &CombatConfig,
    ) -> bool {
        self.update_movement(input, &config.stats);

        let windows = config.timing.windows();
        self.attack.advance(dt_ms, &windows);

        if input.attack_just_pressed && self.can_attack(now_ms, &config.timing) {
            self.attack.trigger(&windows);
            self.last_attack_at = Some(now_ms);
            log::debug!(
                "Player {} attack started at {:.0}ms",
                self.slot.number(),
                now_ms
            );
            return true;
        }
        false
    }

    fn update_movement(&mut self, input: &FrameInput, stats: &FighterStats) {
        let velocity = &mut self.body.velocity;

        // Right wins when both directions are held
        if input.right {
            velocity.x = stats.move_speed;
            self.facing = Facing::Right;
        } else if input.left {
            velocity.x = -stats.move_speed;
            self.facing = Facing::Left;
        } else {
            velocity.x = decay_toward_rest(velocity.x, stats.friction, stats.rest_epsilon);
        }

        if input.jump_held && self.body.on_ground {
            velocity.y = stats.jump_velocity;
            self.body.on_ground = false;
        }
    }

    /// Check if a fresh attack press at `now_ms` would start an attack
    pub fn can_attack(&self, now_ms: f64, timing: &AttackTiming) -> bool {
        if self.attack.state() != AttackState::Idle {
            return false;
        }
        match self.last_attack_at {
            Some(at) => has_elapsed(now_ms - at, timing.cooldown_ms as f64),
            None => true,
        }
    }

    /// Integrate this fighter's body through the arena
    pub fn step_physics(&mut self, world: &PhysicsWorld, shape: &BodyShape, dt_ms: f32) -> Contacts {
        world.step_body(&mut self.body, shape, dt_ms)
    }

    /// World-space collision box
    pub fn body_rect(&self, stats: &FighterStats) -> Rect {
        stats.body_shape().collider_rect(self.body.position)
    }

    /// Where the attack hitbox sits this tick, whether live or not
    pub fn hitbox_rect(&self, stats: &FighterStats) -> Rect {
        place_hitbox(
            self.body.position,
            self.facing.sign(),
            stats.hitbox_offset,
            stats.hitbox_size,
        )
    }

    /// The hitbox if it currently takes part in overlap tests
    pub fn active_hitbox(&self, stats: &FighterStats) -> Option<Rect> {
        self.attack
            .state()
            .hitbox_enabled()
            .then(|| self.hitbox_rect(stats))
    }

    /// Check if `now_ms` falls inside the invulnerability window
    pub fn is_invulnerable(&self, now_ms: f64, timing: &AttackTiming) -> bool {
        match self.last_hit_at {
            Some(at) => !has_elapsed(now_ms - at, timing.invuln_ms as f64),
            None => false,
        }
    }

    /// Resolve an attack against `defender`, whose body overlaps our hitbox.
    ///
    /// Lands only while this fighter is Active and the defender is outside
    /// its invulnerability window.
    pub fn try_hit<R: Rng>(
        &self,
        defender: &Fighter,
        now_ms: f64,
        timing: &AttackTiming,
        rng: &mut R,
    ) -> Option<Hit> {
        if self.attack.state() != AttackState::Active {
            return None;
        }
        if defender.is_invulnerable(now_ms, timing) {
            return None;
        }
        Some(Hit::roll(self.slot, self.facing, timing, rng))
    }

    /// Take a landed hit: lose health, get knocked back, start flashing
    pub fn apply_damage(&mut self, hit: &Hit, now_ms: f64, timing: &AttackTiming) {
        self.last_hit_at = Some(now_ms);
        self.health = (self.health - hit.damage.max(0)).clamp(0, self.max_health);
        self.body.velocity = hit.knockback;
        self.flash_until = Some(now_ms + timing.flash_ms as f64);

        log::debug!(
            "Player {} hit by player {} for {} ({} left)",
            self.slot.number(),
            hit.attacker.number(),
            hit.damage,
            self.health
        );
    }

    /// Check if the hit flash is showing at `now_ms`
    pub fn is_flashing(&self, now_ms: f64) -> bool {
        self.flash_until
            .is_some_and(|until| !has_elapsed(now_ms, until))
    }

    /// Copy out the state a renderer needs
    pub fn snapshot(&self, now_ms: f64) -> FighterSnapshot {
        FighterSnapshot {
            x: self.body.position.x,
            y: self.body.position.y,
            velocity: self.body.velocity,
            health: self.health,
            facing: self.facing,
            attack_state: self.attack.state(),
            flashing: self.is_flashing(now_ms),
            on_ground: self.body.on_ground,
        }
    }

    pub fn slot(&self) -> PlayerSlot {
        self.slot
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn on_ground(&self) -> bool {
        self.body.on_ground
    }

    pub fn attack_state(&self) -> AttackState {
        self.attack.state()
    }

    /// Milliseconds left in the current attack state
    pub fn attack_timer_ms(&self) -> f32 {
        self.attack.timer_ms()
    }

    pub fn last_attack_at(&self) -> Option<f64> {
        self.last_attack_at
    }

    pub fn last_hit_at(&self) -> Option<f64> {
        self.last_hit_at
    }
}
