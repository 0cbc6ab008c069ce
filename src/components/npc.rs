//! Non-player characters.

use bevy_ecs::prelude::Component;

/// Static NPC drawn among the actors.
#[derive(Component, Clone, Debug)]
pub struct Npc {
    pub name: String,
}

/// Map y-coordinate separating "player behind" from "player in front".
///
/// The player is drawn before (behind) this actor while its centre is above
/// the baseline, and after it otherwise.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct DepthBaseline(pub f32);
