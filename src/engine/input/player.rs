// Per-player input state and the per-tick input sample

use super::action::Action;
use std::collections::HashSet;

/// Which side of the match a player controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub const ALL: [PlayerSlot; 2] = [PlayerSlot::One, PlayerSlot::Two];

    /// Zero-based index (0 for player 1)
    pub fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    /// The other player
    pub fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// One-based player number used in messages
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

/// Input sampled for one player for one simulation tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub jump_held: bool,
    /// True only on the tick the attack key went from released to pressed
    pub attack_just_pressed: bool,
}

impl FrameInput {
    /// No buttons held
    pub fn idle() -> Self {
        Self::default()
    }
}

/// Source of per-tick input, polled once per player before each tick
pub trait InputSampler {
    fn sample(&mut self, slot: PlayerSlot) -> FrameInput;
}

/// Represents the input state for a single player
#[derive(Debug)]
pub struct PlayerInput {
    slot: PlayerSlot,

    /// Actions that are currently held
    pressed: HashSet<Action>,

    /// Press edges not yet handed out by `sample`
    just_pressed: HashSet<Action>,
}

impl PlayerInput {
    /// Create a new player input state
    pub fn new(slot: PlayerSlot) -> Self {
        Self {
            slot,
            pressed: HashSet::new(),
            just_pressed: HashSet::new(),
        }
    }

    pub fn slot(&self) -> PlayerSlot {
        self.slot
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was pressed since the last sample
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Register an action press
    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        self.pressed.remove(&action);
    }

    /// Build this tick's sample and consume the pending press edges.
    ///
    /// Edges stay pending until sampled, so a rendered frame that runs no
    /// fixed step never drops a press, and a frame that runs several steps
    /// reports the edge only on the first.
    pub fn sample(&mut self) -> FrameInput {
        let input = FrameInput {
            left: self.is_pressed(Action::MoveLeft),
            right: self.is_pressed(Action::MoveRight),
            jump_held: self.is_pressed(Action::Jump),
            attack_just_pressed: self.just_pressed(Action::Attack),
        };
        self.just_pressed.clear();
        input
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
    }

}
