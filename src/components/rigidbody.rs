//! Kinematic body component.
//!
//! [`RigidBody`] holds the displacement an entity wants to make this frame.
//! Input controllers write it, the movement system consumes it and resolves
//! it against static colliders.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Per-frame velocity in map units per frame.
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    pub velocity: Vector2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    pub fn new() -> Self {
        Self {
            velocity: Vector2::zero(),
        }
    }
}
