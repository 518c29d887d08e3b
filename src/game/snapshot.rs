// Read-only match state handed to presentation after every tick

use glam::Vec2;

use super::characters::{AttackState, Facing};
use super::combat::CombatEvent;
use crate::engine::input::PlayerSlot;

/// Result of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    Player1Wins,
    Player2Wins,
}

impl Outcome {
    /// Check if the match is over
    pub fn is_decided(&self) -> bool {
        !matches!(self, Self::InProgress)
    }

    /// The winning player, if any
    pub fn winner(&self) -> Option<PlayerSlot> {
        match self {
            Self::InProgress => None,
            Self::Player1Wins => Some(PlayerSlot::One),
            Self::Player2Wins => Some(PlayerSlot::Two),
        }
    }

    /// Outcome in which `slot` won
    pub fn won_by(slot: PlayerSlot) -> Self {
        match slot {
            PlayerSlot::One => Self::Player1Wins,
            PlayerSlot::Two => Self::Player2Wins,
        }
    }

    /// Banner text for the end of a match
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::InProgress => None,
            Self::Player1Wins => Some("Player 1 wins!"),
            Self::Player2Wins => Some("Player 2 wins!"),
        }
    }
}

/// Copy of one fighter's presentation state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FighterSnapshot {
    pub x: f32,
    pub y: f32,
    pub velocity: Vec2,
    pub health: i32,
    pub facing: Facing,
    pub attack_state: AttackState,
    /// True briefly after taking a hit
    pub flashing: bool,
    pub on_ground: bool,
}

impl FighterSnapshot {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Copy of the whole match after a tick
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSnapshot {
    pub fighter1: FighterSnapshot,
    pub fighter2: FighterSnapshot,
    pub outcome: Outcome,
    /// Match clock in milliseconds
    pub clock_ms: f64,
    /// Number of ticks simulated so far
    pub tick: u64,
    /// Events raised during this tick, in order
    pub events: Vec<CombatEvent>,
}

impl MatchSnapshot {
    /// Snapshot of the fighter in `slot`
    pub fn fighter(&self, slot: PlayerSlot) -> &FighterSnapshot {
        match slot {
            PlayerSlot::One => &self.fighter1,
            PlayerSlot::Two => &self.fighter2,
        }
    }
}

/// Consumer of per-tick snapshots (renderer, HUD, logger)
pub trait PresentationSink {
    fn on_tick(&mut self, snapshot: &MatchSnapshot);
}

/// Keeps every snapshot it receives
impl PresentationSink for Vec<MatchSnapshot> {
    fn on_tick(&mut self, snapshot: &MatchSnapshot) {
        self.push(snapshot.clone());
    }
}
