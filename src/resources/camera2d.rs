//! Shared 2D camera resource.
//!
//! Wraps raylib's [`raylib::prelude::Camera2D`] so that systems can agree on
//! a single world/screen transform. The camera system rewrites it every
//! frame from the player position; the render pass only reads it.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

/// ECS resource that holds the active 2D camera parameters.
///
/// `target` is the top-left map coordinate shown at the window origin and
/// `offset` stays at zero.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Camera2DRes(pub Camera2D);

impl Default for Camera2DRes {
    fn default() -> Self {
        Camera2DRes(Camera2D {
            offset: Vector2::zero(),
            target: Vector2::zero(),
            rotation: 0.0,
            zoom: 1.0,
        })
    }
}

/// Top-left map coordinate of the view, kept inside `[0, map - viewport]`.
///
/// A viewport larger than the map pins that axis to 0.
pub fn follow(player: Vector2, screen: Vector2, map: Vector2, scale: f32) -> Vector2 {
    let view = Vector2::new(screen.x / scale, screen.y / scale);
    let axis = |p: f32, v: f32, m: f32| (p - v / 2.0).min(m - v).max(0.0);
    Vector2::new(axis(player.x, view.x, map.x), axis(player.y, view.y, map.y))
}
