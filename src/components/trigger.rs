//! Trigger zones tested against the player's hitbox every frame.
//!
//! A trigger entity carries a [`TriggerZone`], a
//! [`BoxCollider`](super::boxcollider::BoxCollider) and a
//! [`MapPosition`](super::mapposition::MapPosition) at the zone's top-left.

use bevy_ecs::prelude::Component;

use crate::resources::scene::Scene;

/// What happens while the player overlaps the zone.
#[derive(Debug, Clone, PartialEq)]
pub enum TriggerAction {
    /// Show the overlay image with this texture key.
    Dialogue(String),
    /// Move to another scene.
    Door(Scene),
}

#[derive(Component, Debug, Clone)]
pub struct TriggerZone {
    pub name: String,
    pub action: TriggerAction,
    /// Declaration order; overlays are drawn in this order.
    pub order: usize,
}

impl TriggerZone {
    pub fn dialogue(name: impl Into<String>, tex_key: impl Into<String>, order: usize) -> Self {
        Self {
            name: name.into(),
            action: TriggerAction::Dialogue(tex_key.into()),
            order,
        }
    }

    pub fn door(name: impl Into<String>, target: Scene, order: usize) -> Self {
        Self {
            name: name.into(),
            action: TriggerAction::Door(target),
            order,
        }
    }
}
