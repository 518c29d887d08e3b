// Input manager - routes keyboard events to both players

use super::action::InputSource;
use super::config::InputConfig;
use super::player::{FrameInput, InputSampler, PlayerInput, PlayerSlot};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Keyboard input for both players of a match
pub struct InputManager {
    configs: [InputConfig; 2],
    players: [PlayerInput; 2],
}

impl InputManager {
    /// Create an input manager with default bindings for both players
    pub fn new() -> Self {
        Self {
            configs: [
                InputConfig::with_defaults(PlayerSlot::One),
                InputConfig::with_defaults(PlayerSlot::Two),
            ],
            players: [
                PlayerInput::new(PlayerSlot::One),
                PlayerInput::new(PlayerSlot::Two),
            ],
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(key_code, event.state, event.repeat);
        }
    }

    /// Apply a key press or release to every player bound to it.
    ///
    /// Returns true if any player has the key bound.
    pub fn process_key(&mut self, key_code: KeyCode, state: ElementState, repeat: bool) -> bool {
        let source = InputSource::key(key_code);
        let mut handled = false;

        for (config, player) in self.configs.iter().zip(self.players.iter_mut()) {
            let Some(action) = config.get_action(source) else {
                continue;
            };
            handled = true;
            match state {
                // Key repeat must never produce a fresh press edge
                ElementState::Pressed if !repeat => player.press(action),
                ElementState::Pressed => {}
                ElementState::Released => player.release(action),
            }
        }

        handled
    }

    /// Release every key and drop pending presses.
    ///
    /// Used on focus loss, pause and restart so no press carries over.
    pub fn release_all(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
    }

    /// Get input state for a player
    pub fn player(&self, slot: PlayerSlot) -> &PlayerInput {
        &self.players[slot.index()]
    }

    /// Get a player's bindings
    pub fn config(&self, slot: PlayerSlot) -> &InputConfig {
        &self.configs[slot.index()]
    }

    /// Get a player's bindings for remapping
    pub fn config_mut(&mut self, slot: PlayerSlot) -> &mut InputConfig {
        &mut self.configs[slot.index()]
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSampler for InputManager {
    fn sample(&mut self, slot: PlayerSlot) -> FrameInput {
        self.players[slot.index()].sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::action::Action;

    #[test]
    fn test_keys_route_to_their_player() {
        let mut manager = InputManager::new();
        assert!(manager.process_key(KeyCode::KeyD, ElementState::Pressed, false));
        assert!(manager.process_key(KeyCode::ArrowLeft, ElementState::Pressed, false));

        let p1 = manager.sample(PlayerSlot::One);
        let p2 = manager.sample(PlayerSlot::Two);
        assert!(p1.right && !p1.left);
        assert!(p2.left && !p2.right);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut manager = InputManager::new();
        assert!(!manager.process_key(KeyCode::F5, ElementState::Pressed, false));
        assert_eq!(manager.sample(PlayerSlot::One), FrameInput::idle());
        assert_eq!(manager.sample(PlayerSlot::Two), FrameInput::idle());
    }

    #[test]
    fn test_key_repeat_does_not_press() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::KeyS, ElementState::Pressed, true);
        assert!(!manager.sample(PlayerSlot::One).attack_just_pressed);
    }

    #[test]
    fn test_attack_edge() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::ArrowDown, ElementState::Pressed, false);
        assert!(manager.sample(PlayerSlot::Two).attack_just_pressed);

        manager.process_key(KeyCode::ArrowDown, ElementState::Pressed, true);
        assert!(!manager.sample(PlayerSlot::Two).attack_just_pressed);
        assert!(manager.player(PlayerSlot::Two).is_pressed(Action::Attack));
    }

    #[test]
    fn test_release_all() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::KeyA, ElementState::Pressed, false);
        manager.process_key(KeyCode::ArrowUp, ElementState::Pressed, false);
        manager.release_all();

        assert_eq!(manager.sample(PlayerSlot::One), FrameInput::idle());
        assert_eq!(manager.sample(PlayerSlot::Two), FrameInput::idle());
    }

    #[test]
    fn test_release_all_drops_unsampled_attack() {
        let mut manager = InputManager::new();
        // Pressed while no tick runs, e.g. during a pause
        manager.process_key(KeyCode::KeyS, ElementState::Pressed, false);
        manager.process_key(KeyCode::KeyS, ElementState::Released, false);
        manager.release_all();

        assert!(!manager.sample(PlayerSlot::One).attack_just_pressed);
    }

    #[test]
    fn test_remap() {
        let mut manager = InputManager::new();
        manager
            .config_mut(PlayerSlot::One)
            .bind(InputSource::key(KeyCode::Space), Action::Jump);
        manager.process_key(KeyCode::Space, ElementState::Pressed, false);
        assert!(manager.sample(PlayerSlot::One).jump_held);
        assert!(manager.config(PlayerSlot::One).has_binding(Action::Jump));
    }
}
