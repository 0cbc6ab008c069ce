//! Z-index component for render ordering.
//!
//! Actors are drawn between the map background and the map overlays (tree
//! tops, plants). Within one [`ZIndex`] value they are depth-sorted.

use bevy_ecs::prelude::Component;

/// Rendering order hint for 2D drawing.
///
/// Higher values are drawn later (on top).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);

impl ZIndex {
    pub const ACTORS: ZIndex = ZIndex(0);
}
