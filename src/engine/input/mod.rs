// Input handling system
//
// Translates keyboard state into the per-tick sample a match consumes.
//
// ## Architecture
//
// - `action`: Fighter actions and default key bindings
// - `player`: Per-player key state, `FrameInput` and the `InputSampler` trait
// - `config`: Binding and remapping
// - `manager`: Routes winit keyboard events to both players
//
// ## Usage Example
//
// ```rust
// use arena_duel::engine::input::{InputManager, InputSampler, PlayerSlot};
//
// let mut input = InputManager::new();
//
// // In your event loop, process keyboard events
// input.process_keyboard_event(&key_event);
//
// // Before each tick, sample both players
// let p1 = input.sample(PlayerSlot::One);
// let p2 = input.sample(PlayerSlot::Two);
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::{Action, InputSource};
pub use config::InputConfig;
pub use manager::InputManager;
pub use player::{FrameInput, InputSampler, PlayerInput, PlayerSlot};
