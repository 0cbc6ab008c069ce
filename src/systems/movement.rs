//! Player movement with per-axis collision and map bounds.
//!
//! Each frame the step in [`RigidBody::velocity`] is tried on the X axis
//! first and then on the Y axis from the (possibly moved) X position. An axis
//! move is kept only if the hitbox does not overlap any [`Solid`] collider
//! at the new position, so pressing diagonally into a wall slides along it.
//! Finally the centre is clamped so the sprite stays inside the map.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;
use smallvec::SmallVec;

use crate::components::boxcollider::{BoxCollider, Solid};
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::resources::activescreen::ActiveScreen;

/// `max(lo, min(hi, v))`. Inverted bounds resolve to `lo`.
pub fn clamp_axis(v: f32, lo: f32, hi: f32) -> f32 {
    v.min(hi).max(lo)
}

/// Keep a centre `half` away from every map edge.
pub fn clamp_to_map(pos: Vector2, half: f32, map: Vector2) -> Vector2 {
    Vector2 {
        x: clamp_axis(pos.x, half, map.x - half),
        y: clamp_axis(pos.y, half, map.y - half),
    }
}

fn blocked(hitbox: &BoxCollider, at: Vector2, solids: &[(Vector2, BoxCollider)]) -> bool {
    solids
        .iter()
        .any(|(pos, solid)| hitbox.overlaps(at, solid, *pos))
}

/// Apply one step with X-then-Y trials against `solids` and clamp to the map.
pub fn resolve_move(
    pos: Vector2,
    delta: Vector2,
    hitbox: &BoxCollider,
    solids: &[(Vector2, BoxCollider)],
    half: f32,
    map: Vector2,
) -> Vector2 {
    let mut next = pos;

    let trial_x = Vector2 {
        x: next.x + delta.x,
        y: next.y,
    };
    if !blocked(hitbox, trial_x, solids) {
        next.x = trial_x.x;
    }

    let trial_y = Vector2 {
        x: next.x,
        y: next.y + delta.y,
    };
    if !blocked(hitbox, trial_y, solids) {
        next.y = trial_y.y;
    }

    clamp_to_map(next, half, map)
}

pub fn movement(
    mut players: Query<(&mut MapPosition, &RigidBody, &BoxCollider, &Player)>,
    solids: Query<(&MapPosition, &BoxCollider), (With<Solid>, Without<Player>)>,
    screen: Res<ActiveScreen>,
) {
    let walls: SmallVec<[(Vector2, BoxCollider); 16]> =
        solids.iter().map(|(p, c)| (p.pos, *c)).collect();
    for (mut position, rigidbody, hitbox, player) in players.iter_mut() {
        position.pos = resolve_move(
            position.pos,
            rigidbody.velocity,
            hitbox,
            &walls,
            player.half(),
            screen.0.map_size,
        );
    }
}
