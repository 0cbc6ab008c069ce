//! World-space position component.
//!
//! [`MapPosition`] stores an entity's pivot in the current map's own
//! coordinate space. The pivot meaning depends on the entity: the player is
//! positioned by the centre of its sprite, NPCs, colliders and trigger zones
//! by their top-left corner.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Position of an entity in map units.
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    pub fn from_vec(pos: Vector2) -> Self {
        Self { pos }
    }
}
