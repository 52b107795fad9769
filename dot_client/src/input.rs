//! Keyboard input handling

use dot_core::Key;
use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

/// A key event worth forwarding to the handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press(Key),
    Release(Key),
}

/// Translate a keyboard event. OS auto-repeats are dropped so a held key
/// is a single press.
pub fn key_action(key: PhysicalKey, state: ElementState, repeat: bool) -> Option<KeyAction> {
    if repeat {
        return None;
    }
    let key = key_from_physical(key);
    Some(match state {
        ElementState::Pressed => KeyAction::Press(key),
        ElementState::Released => KeyAction::Release(key),
    })
}

/// Map a physical key to a dot key.
/// Physical codes keep WASD on the same keys for every layout.
pub fn key_from_physical(key: PhysicalKey) -> Key {
    match key {
        PhysicalKey::Code(code) => key_from_code(code),
        PhysicalKey::Unidentified(_) => Key::Other,
    }
}

pub fn key_from_code(code: KeyCode) -> Key {
    match code {
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowDown => Key::Down,
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowRight => Key::Right,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyD => Key::D,
        KeyCode::Escape => Key::Escape,
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NativeKeyCode;

    #[test]
    fn test_bound_keys() {
        assert_eq!(key_from_code(KeyCode::ArrowUp), Key::Up);
        assert_eq!(key_from_code(KeyCode::ArrowDown), Key::Down);
        assert_eq!(key_from_code(KeyCode::ArrowLeft), Key::Left);
        assert_eq!(key_from_code(KeyCode::ArrowRight), Key::Right);
        assert_eq!(key_from_code(KeyCode::KeyW), Key::W);
        assert_eq!(key_from_code(KeyCode::KeyA), Key::A);
        assert_eq!(key_from_code(KeyCode::KeyS), Key::S);
        assert_eq!(key_from_code(KeyCode::KeyD), Key::D);
        assert_eq!(key_from_code(KeyCode::Escape), Key::Escape);
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(key_from_code(KeyCode::Space), Key::Other);
        assert_eq!(key_from_code(KeyCode::KeyQ), Key::Other);
        assert_eq!(
            key_from_physical(PhysicalKey::Unidentified(NativeKeyCode::Unidentified)),
            Key::Other
        );
    }

    #[test]
    fn test_key_action_press_and_release() {
        let right = PhysicalKey::Code(KeyCode::ArrowRight);
        assert_eq!(
            key_action(right, ElementState::Pressed, false),
            Some(KeyAction::Press(Key::Right))
        );
        assert_eq!(
            key_action(right, ElementState::Released, false),
            Some(KeyAction::Release(Key::Right))
        );
    }

    #[test]
    fn test_key_action_drops_repeats() {
        let w = PhysicalKey::Code(KeyCode::KeyW);
        assert_eq!(key_action(w, ElementState::Pressed, true), None);
        let escape = PhysicalKey::Code(KeyCode::Escape);
        assert_eq!(key_action(escape, ElementState::Pressed, true), None);
    }

    #[test]
    fn test_key_action_forwards_unbound_keys() {
        let space = PhysicalKey::Code(KeyCode::Space);
        assert_eq!(
            key_action(space, ElementState::Pressed, false),
            Some(KeyAction::Press(Key::Other))
        );
    }

    #[test]
    fn test_physical_code() {
        assert_eq!(key_from_physical(PhysicalKey::Code(KeyCode::KeyD)), Key::D);
    }
}
