//! Trigger zone detection.
//!
//! Tests the player hitbox against every [`TriggerZone`] each gameplay frame.
//! Dialogue zones are collected into
//! [`ActiveDialogues`](crate::resources::dialogue::ActiveDialogues) in
//! declaration order. Door zones and the screen's edge exit request a scene
//! change through [`NextScene`]; the request is ignored while one is already
//! pending, so a long overlap still navigates once.
use bevy_ecs::prelude::*;
use log::info;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::trigger::{TriggerAction, TriggerZone};
use crate::resources::activescreen::ActiveScreen;
use crate::resources::dialogue::ActiveDialogues;
use crate::resources::scene::NextScene;
use crate::screens::EdgeExit;

/// Whether a centre at `x` has reached the right edge exit of a `map_w` wide map.
pub fn reached_edge(x: f32, half: f32, map_w: f32, exit: &EdgeExit) -> bool {
    x >= map_w - half - exit.margin
}

pub fn trigger_zones(
    players: Query<(&MapPosition, &BoxCollider, &Player)>,
    zones: Query<(&MapPosition, &BoxCollider, &TriggerZone), Without<Player>>,
    screen: Res<ActiveScreen>,
    mut dialogues: ResMut<ActiveDialogues>,
    mut next_scene: ResMut<NextScene>,
) {
    dialogues.clear();
    let Some((player_pos, hitbox, player)) = players.iter().next() else {
        return;
    };

    let mut hits: Vec<&TriggerZone> = zones
        .iter()
        .filter(|(pos, zone_box, _)| hitbox.overlaps(player_pos.pos, zone_box, pos.pos))
        .map(|(_, _, zone)| zone)
        .collect();
    hits.sort_by_key(|zone| zone.order);

    for zone in hits {
        match &zone.action {
            TriggerAction::Dialogue(key) => dialogues.push(key),
            TriggerAction::Door(target) => {
                if next_scene.request(*target) {
                    info!("Entered {}, going to {}", zone.name, target);
                }
            }
        }
    }

    if let Some(exit) = &screen.0.edge_exit {
        if reached_edge(player_pos.pos.x, player.half(), screen.0.map_size.x, exit)
            && next_scene.request(exit.target)
        {
            info!("Reached the map edge, going to {}", exit.target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::scene::Scene;

    #[test]
    fn test_edge_exit_threshold() {
        let exit = EdgeExit {
            target: Scene::Lobby,
            margin: 2.0,
        };
        // Clamp keeps x <= 9000 - 337.5.
        assert!(reached_edge(8662.5, 337.5, 9000.0, &exit));
        assert!(reached_edge(8660.5, 337.5, 9000.0, &exit));
        assert!(!reached_edge(8660.0, 337.5, 9000.0, &exit));
    }
}
