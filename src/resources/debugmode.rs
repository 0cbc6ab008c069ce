//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that the debug overlay
//! (collider outlines, hitbox, camera and position readout) should be drawn.
//! Remove it to disable debug behavior.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the render pass draws the debug overlay.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
