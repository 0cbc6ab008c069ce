//! Camera follow system.
//!
//! Rewrites [`Camera2DRes`] every gameplay frame so the player is centred
//! while the view stays inside the map.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::activescreen::ActiveScreen;
use crate::resources::camera2d::{Camera2DRes, follow};
use crate::resources::screensize::ScreenSize;

pub fn camera_follow(
    players: Query<&MapPosition, With<Player>>,
    screen: Res<ActiveScreen>,
    size: Res<ScreenSize>,
    mut camera: ResMut<Camera2DRes>,
) {
    let Some(player) = players.iter().next() else {
        return;
    };
    let def = &screen.0;
    let scale = def.camera.scale(size.h as f32, def.map_size.y);
    camera.0.target = follow(player.pos, size.as_vec(), def.map_size, scale);
    camera.0.zoom = scale;
}
