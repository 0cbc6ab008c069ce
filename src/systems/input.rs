//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`].
//! - Toggling the debug overlay emits
//!   [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
use bevy_ecs::prelude::*;
use raylib::ffi::{KeyboardKey, MouseButton};

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;

/// Poll Raylib for keyboard and pointer input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let is_key_down = |key: KeyboardKey| rl.is_key_down(key);

    let up = is_key_down(input.move_up.key_binding);
    let left = is_key_down(input.move_left.key_binding);
    let down = is_key_down(input.move_down.key_binding);
    let right = is_key_down(input.move_right.key_binding);
    let debug = is_key_down(input.mode_debug.key_binding);
    input.move_up.set(up);
    input.move_left.set(left);
    input.move_down.set(down);
    input.move_right.set(right);
    input.mode_debug.set(debug);

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }

    input.pointer.position = rl.get_mouse_position();
    input.pointer.left_pressed = rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);
}
