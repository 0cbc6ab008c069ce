//! Per-frame input resource.
//!
//! Captures the subset of keyboard and pointer state the game cares about
//! and exposes it to systems via the [`InputState`] resource. Movement uses
//! WASD; F11 toggles the debug overlay.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

impl BoolState {
    pub fn bound_to(key: KeyboardKey) -> Self {
        Self {
            key_binding: key,
            ..Self::default()
        }
    }

    /// Feed this frame's held state, deriving the press edge.
    pub fn set(&mut self, held: bool) {
        self.just_pressed = held && !self.active;
        self.active = held;
    }
}

/// Pointer state in window pixels.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    pub position: Vector2,
    /// Left button went down this frame.
    pub left_pressed: bool,
}

/// Resource capturing the per-frame input relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub move_up: BoolState,
    pub move_left: BoolState,
    pub move_down: BoolState,
    pub move_right: BoolState,
    pub mode_debug: BoolState,
    pub pointer: PointerState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            move_up: BoolState::bound_to(KeyboardKey::KEY_W),
            move_left: BoolState::bound_to(KeyboardKey::KEY_A),
            move_down: BoolState::bound_to(KeyboardKey::KEY_S),
            move_right: BoolState::bound_to(KeyboardKey::KEY_D),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
            pointer: PointerState::default(),
        }
    }
}

impl InputState {
    /// Raw direction from the held movement keys, not normalized.
    pub fn direction(&self) -> Vector2 {
        let mut dir = Vector2::zero();
        if self.move_up.active {
            dir.y -= 1.0;
        }
        if self.move_down.active {
            dir.y += 1.0;
        }
        if self.move_left.active {
            dir.x -= 1.0;
        }
        if self.move_right.active {
            dir.x += 1.0;
        }
        dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.move_up.key_binding, KeyboardKey::KEY_W);
        assert_eq!(input.move_left.key_binding, KeyboardKey::KEY_A);
        assert_eq!(input.move_down.key_binding, KeyboardKey::KEY_S);
        assert_eq!(input.move_right.key_binding, KeyboardKey::KEY_D);
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F11);
        assert!(!input.pointer.left_pressed);
    }

    #[test]
    fn test_boolstate_edges() {
        let mut bs = BoolState::bound_to(KeyboardKey::KEY_W);
        bs.set(true);
        assert!(bs.active && bs.just_pressed);
        bs.set(true);
        assert!(bs.active && !bs.just_pressed);
        bs.set(false);
        assert!(!bs.active && !bs.just_pressed);
        bs.set(true);
        assert!(bs.just_pressed);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut input = InputState::default();
        input.move_left.set(true);
        input.move_right.set(true);
        input.move_up.set(true);
        let dir = input.direction();
        assert_eq!(dir.x, 0.0);
        assert_eq!(dir.y, -1.0);
    }
}
