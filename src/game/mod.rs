// Game layer: fighters, combat rules, configuration and the match controller

pub mod characters;
pub mod combat;
pub mod config;
pub mod match_controller;
pub mod snapshot;

pub use characters::{AttackState, Facing, Fighter, FighterStats};
pub use combat::{CombatEvent, Hit};
pub use config::{ArenaConfig, AttackTiming, CombatConfig, ConfigError, SpawnPoint};
pub use match_controller::Match;
pub use snapshot::{FighterSnapshot, MatchSnapshot, Outcome, PresentationSink};
