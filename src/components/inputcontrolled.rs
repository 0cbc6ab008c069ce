//! Input-controlled movement component.
//!
//! [`InputControlled`] marks the entity that follows the WASD keys. The
//! controller in [`crate::systems::playercontroller`] reads it together with
//! the shared [`InputState`](crate::resources::input::InputState).

use bevy_ecs::prelude::Component;

/// Movement intent derived from player keyboard input.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    /// Distance moved per frame at full input.
    pub speed: f32,
    /// Whether `w`/`s` move the entity. Side-scrolling maps only walk left and right.
    pub vertical: bool,
}

impl InputControlled {
    pub fn new(speed: f32, vertical: bool) -> Self {
        Self { speed, vertical }
    }
}
