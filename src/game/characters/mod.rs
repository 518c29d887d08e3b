// Fighter system
//
// This module contains everything related to a combatant:
// - Fighter entity with kinematics, health and hit reaction
// - Shared fighter stats and dimensions
// - Facing and the attack state machine

pub mod fighter;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use fighter::Fighter;
pub use state::{AttackState, AttackStateMachine, AttackWindows, Facing};
pub use stats::{FighterStats, BASE_STATS};
