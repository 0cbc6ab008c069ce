//! Input-to-velocity controller for the player.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! sets the per-frame step of entities with an
//! [`InputControlled`](crate::components::inputcontrolled::InputControlled)
//! component. Diagonal movement is normalized to keep the step length equal
//! to the speed. Also advances the facing and walk cycle of the
//! [`Player`](crate::components::player::Player).
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::inputcontrolled::InputControlled;
use crate::components::player::{Facing, Player, WALK_STEP};
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::resources::input::InputState;

/// Unit direction from raw key input. Zero stays zero.
pub fn movement_direction(raw: Vector2, vertical: bool) -> Vector2 {
    let dir = Vector2 {
        x: raw.x,
        y: if vertical { raw.y } else { 0.0 },
    };
    let len = (dir.x * dir.x + dir.y * dir.y).sqrt();
    if len > 0.0 {
        Vector2 {
            x: dir.x / len,
            y: dir.y / len,
        }
    } else {
        dir
    }
}

/// Facing only changes on horizontal input.
pub fn next_facing(current: Facing, dir_x: f32) -> Facing {
    if dir_x < 0.0 {
        Facing::Left
    } else if dir_x > 0.0 {
        Facing::Right
    } else {
        current
    }
}

/// Walk phase advances while moving horizontally and snaps back to 0 otherwise.
pub fn next_walk_time(current: f32, dir_x: f32) -> f32 {
    if dir_x != 0.0 { current + WALK_STEP } else { 0.0 }
}

/// Update each controlled entity's `RigidBody` velocity and walk state.
pub fn player_controller(
    mut query: Query<(
        &InputControlled,
        &mut RigidBody,
        &mut Player,
        Option<&mut Sprite>,
    )>,
    input_state: Res<InputState>,
) {
    let raw = input_state.direction();
    for (controlled, mut rigidbody, mut player, sprite) in query.iter_mut() {
        let dir = movement_direction(raw, controlled.vertical);
        rigidbody.velocity = Vector2 {
            x: dir.x * controlled.speed,
            y: dir.y * controlled.speed,
        };

        player.facing = next_facing(player.facing, dir.x);
        player.walk_time = next_walk_time(player.walk_time, dir.x);
        if let Some(mut sprite) = sprite {
            sprite.flip_h = player.facing == Facing::Left;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_is_normalized() {
        let dir = movement_direction(Vector2::new(1.0, -1.0), true);
        let len = (dir.x * dir.x + dir.y * dir.y).sqrt();
        assert!((len - 1.0).abs() < 1e-6);
        assert!((dir.x - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn test_side_screens_drop_vertical_input() {
        let dir = movement_direction(Vector2::new(0.0, 1.0), false);
        assert_eq!(dir, Vector2::zero());
        let dir = movement_direction(Vector2::new(1.0, 1.0), false);
        assert_eq!(dir, Vector2::new(1.0, 0.0));
    }

    #[test]
    fn test_facing_keeps_last_horizontal_direction() {
        let f = next_facing(Facing::Right, -1.0);
        assert_eq!(f, Facing::Left);
        assert_eq!(next_facing(f, 0.0), Facing::Left);
        assert_eq!(next_facing(f, 0.7), Facing::Right);
    }

    #[test]
    fn test_walk_time_resets_without_horizontal_input() {
        let t = next_walk_time(0.0, 1.0);
        let t = next_walk_time(t, -1.0);
        assert!((t - 0.3).abs() < 1e-6);
        assert_eq!(next_walk_time(t, 0.0), 0.0);
    }
}
