//! Deterministic two-player arena fighting simulation.
//!
//! A [`Match`] owns both fighters and advances them one fixed tick at a time
//! from a [`FrameInput`] per player, producing a [`MatchSnapshot`] that a
//! presentation layer can draw. Input sampling from the keyboard and a
//! fixed-timestep frame driver live in [`engine`].

pub mod core;
pub mod engine;
pub mod game;

pub use engine::input::{FrameInput, InputSampler, PlayerSlot};
pub use game::{
    AttackState, CombatConfig, CombatEvent, ConfigError, Facing, FighterSnapshot, Match,
    MatchSnapshot, Outcome, PresentationSink,
};
