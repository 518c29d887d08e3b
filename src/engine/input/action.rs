// Fighter action definitions and default key bindings

use winit::keyboard::KeyCode;

use super::player::PlayerSlot;

/// Represents all in-match actions a player can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Attack,
}

impl Action {
    /// Every action, in binding order
    pub const ALL: [Action; 4] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::Jump,
        Action::Attack,
    ];
}

/// Represents an input source a player action can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    // Future: Add controller support
    // GamepadButton(gilrs::Button),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }
}

/// Default keyboard bindings for Player 1 (WASD, S attacks)
pub fn default_p1_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
        (InputSource::key(KeyCode::KeyD), Action::MoveRight),
        (InputSource::key(KeyCode::KeyW), Action::Jump),
        (InputSource::key(KeyCode::KeyS), Action::Attack),
    ]
}

/// Default keyboard bindings for Player 2 (arrows, Down attacks)
pub fn default_p2_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        (InputSource::key(KeyCode::ArrowUp), Action::Jump),
        (InputSource::key(KeyCode::ArrowDown), Action::Attack),
    ]
}

/// Default bindings for a player slot
pub fn default_bindings(slot: PlayerSlot) -> Vec<(InputSource, Action)> {
    match slot {
        PlayerSlot::One => default_p1_bindings(),
        PlayerSlot::Two => default_p2_bindings(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_action_equality() {
        assert_eq!(Action::Jump, Action::Jump);
        assert_ne!(Action::Jump, Action::Attack);
    }

    #[test]
    fn test_input_source_keyboard_creation() {
        let source = InputSource::key(KeyCode::KeyA);
        assert_eq!(source, InputSource::Keyboard(KeyCode::KeyA));
    }

    #[test]
    fn test_default_bindings_cover_every_action() {
        for slot in PlayerSlot::ALL {
            let bindings = default_bindings(slot);
            for action in Action::ALL {
                assert!(
                    bindings.iter().any(|(_, a)| *a == action),
                    "{:?} has no binding for {:?}",
                    slot,
                    action
                );
            }
        }
    }

    #[test]
    fn test_players_do_not_share_keys() {
        let p1: HashSet<_> = default_p1_bindings().into_iter().map(|(s, _)| s).collect();
        let p2: HashSet<_> = default_p2_bindings().into_iter().map(|(s, _)| s).collect();
        assert!(p1.is_disjoint(&p2));
    }

    #[test]
    fn test_attack_keys() {
        assert!(default_p1_bindings().contains(&(InputSource::key(KeyCode::KeyS), Action::Attack)));
        assert!(default_p2_bindings()
            .contains(&(InputSource::key(KeyCode::ArrowDown), Action::Attack)));
    }
}
