// Match controller: owns both fighters and runs the per-tick update

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::characters::Fighter;
use super::combat::{CombatEvent, Hit};
use super::config::{CombatConfig, ConfigError};
use super::snapshot::{MatchSnapshot, Outcome, PresentationSink};
use crate::engine::input::{FrameInput, InputSampler, PlayerSlot};
use crate::engine::physics::{BodyShape, PhysicsWorld};

/// A single two-player match
///
/// Restarting means dropping the match and building a new one; nothing
/// from a previous match carries over.
#[derive(Debug, Clone)]
pub struct Match {
    config: CombatConfig,
    world: PhysicsWorld,
    shape: BodyShape,
    fighter1: Fighter,
    fighter2: Fighter,
    outcome: Outcome,
    /// Match time in milliseconds, the sum of all tick lengths
    clock_ms: f64,
    tick: u64,
    rng: ChaCha8Rng,
}

impl Match {
    /// Create a match from a validated configuration
    pub fn new(config: CombatConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let world = config.arena.physics_world();
        let shape = config.stats.body_shape();
        let fighter1 = Fighter::new(PlayerSlot::One, &config.spawns[0], &config.stats);
        let fighter2 = Fighter::new(PlayerSlot::Two, &config.spawns[1], &config.stats);
        let rng = ChaCha8Rng::seed_from_u64(config.seed);

        log::info!(
            "Match created: arena {}x{}, seed {}",
            config.arena.width,
            config.arena.height,
            config.seed
        );

        Ok(Self {
            config,
            world,
            shape,
            fighter1,
            fighter2,
            outcome: Outcome::InProgress,
            clock_ms: 0.0,
            tick: 0,
            rng,
        })
    }

    /// Advance the match by `dt_ms` milliseconds with one input per player.
    ///
    /// Once the outcome is decided this is a no-op and returns the frozen
    /// state with no events.
    pub fn tick(&mut self, dt_ms: f32, input1: &FrameInput, input2: &FrameInput) -> MatchSnapshot {
        if self.outcome.is_decided() {
            return self.snapshot_with(Vec::new());
        }

        let dt_ms = sanitize_dt(dt_ms);
        self.clock_ms += dt_ms as f64;
        self.tick += 1;
        let now = self.clock_ms;
        let mut events = Vec::new();

        // Fighter 1 first; the order only matters for logging
        if self.fighter1.update(dt_ms, input1, now, &self.config) {
            events.push(CombatEvent::AttackStarted {
                player: PlayerSlot::One,
            });
        }
        if self.fighter2.update(dt_ms, input2, now, &self.config) {
            events.push(CombatEvent::AttackStarted {
                player: PlayerSlot::Two,
            });
        }

        self.fighter1.step_physics(&self.world, &self.shape, dt_ms);
        self.fighter2.step_physics(&self.world, &self.shape, dt_ms);

        if let Some(hit) = resolve_attack(&self.fighter1, &self.fighter2, now, &self.config, &mut self.rng) {
            self.fighter2.apply_damage(&hit, now, &self.config.timing);
            events.push(hit_event(&hit, &self.fighter2));
        }
        if let Some(hit) = resolve_attack(&self.fighter2, &self.fighter1, now, &self.config, &mut self.rng) {
            self.fighter1.apply_damage(&hit, now, &self.config.timing);
            events.push(hit_event(&hit, &self.fighter1));
        }

        // Fighter 1's death is checked first, so a double KO goes to player 2
        if self.fighter1.health() <= 0 {
            self.outcome = Outcome::Player2Wins;
        } else if self.fighter2.health() <= 0 {
            self.outcome = Outcome::Player1Wins;
        }
        if let Some(message) = self.outcome.message() {
            log::info!("{} ({:.0}ms, tick {})", message, self.clock_ms, self.tick);
            events.push(CombatEvent::MatchDecided(self.outcome));
        }

        log::trace!(
            "tick {}: p1 {:?} hp {}, p2 {:?} hp {}",
            self.tick,
            self.fighter1.position(),
            self.fighter1.health(),
            self.fighter2.position(),
            self.fighter2.health()
        );

        self.snapshot_with(events)
    }

    /// Sample both players, tick, and hand the result to `sink`
    pub fn tick_into<I, S>(&mut self, dt_ms: f32, sampler: &mut I, sink: &mut S) -> Outcome
    where
        I: InputSampler + ?Sized,
        S: PresentationSink + ?Sized,
    {
        let input1 = sampler.sample(PlayerSlot::One);
        let input2 = sampler.sample(PlayerSlot::Two);
        let snapshot = self.tick(dt_ms, &input1, &input2);
        sink.on_tick(&snapshot);
        snapshot.outcome
    }

    /// Current state without advancing
    pub fn snapshot(&self) -> MatchSnapshot {
        self.snapshot_with(Vec::new())
    }

    fn snapshot_with(&self, events: Vec<CombatEvent>) -> MatchSnapshot {
        MatchSnapshot {
            fighter1: self.fighter1.snapshot(self.clock_ms),
            fighter2: self.fighter2.snapshot(self.clock_ms),
            outcome: self.outcome,
            clock_ms: self.clock_ms,
            tick: self.tick,
            events,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn fighter(&self, slot: PlayerSlot) -> &Fighter {
        match slot {
            PlayerSlot::One => &self.fighter1,
            PlayerSlot::Two => &self.fighter2,
        }
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }
}

/// Test `attacker`'s live hitbox against `defender`'s body and roll the hit
fn resolve_attack(
    attacker: &Fighter,
    defender: &Fighter,
    now: f64,
    config: &CombatConfig,
    rng: &mut ChaCha8Rng,
) -> Option<Hit> {
    let hitbox = attacker.active_hitbox(&config.stats)?;
    if !hitbox.intersects(&defender.body_rect(&config.stats)) {
        return None;
    }
    attacker.try_hit(defender, now, &config.timing, rng)
}

fn hit_event(hit: &Hit, defender: &Fighter) -> CombatEvent {
    CombatEvent::Hit {
        attacker: hit.attacker,
        defender: defender.slot(),
        damage: hit.damage,
        remaining_health: defender.health(),
    }
}

/// Negative or non-finite tick lengths advance nothing
fn sanitize_dt(dt_ms: f32) -> f32 {
    if dt_ms.is_finite() && dt_ms >= 0.0 {
        dt_ms
    } else {
        log::warn!("Ignoring invalid tick length {}ms", dt_ms);
        0.0
    }
}
