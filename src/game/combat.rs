// Hit resolution data and combat events

use glam::Vec2;
use rand::Rng;

use super::characters::Facing;
use super::config::AttackTiming;
use super::snapshot::Outcome;
use crate::engine::input::PlayerSlot;

/// A hit that landed and still has to be applied to the defender
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub attacker: PlayerSlot,
    pub damage: i32,
    /// Velocity the defender is set to
    pub knockback: Vec2,
}

impl Hit {
    /// Roll damage and aim knockback along the attacker's facing
    pub fn roll<R: Rng>(
        attacker: PlayerSlot,
        facing: Facing,
        timing: &AttackTiming,
        rng: &mut R,
    ) -> Self {
        let damage = rng.gen_range(timing.damage_min..=timing.damage_max);
        let knockback = Vec2::new(timing.knockback.x * facing.sign(), timing.knockback.y);
        Self {
            attacker,
            damage,
            knockback,
        }
    }
}

/// Something a presentation layer may want to react to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CombatEvent {
    /// A fighter began an attack wind-up
    AttackStarted { player: PlayerSlot },
    /// An attack connected
    Hit {
        attacker: PlayerSlot,
        defender: PlayerSlot,
        damage: i32,
        remaining_health: i32,
    },
    /// The match reached its final outcome
    MatchDecided(Outcome),
}
