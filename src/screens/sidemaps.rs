//! Side-scrolling maps reached from the hub.
//!
//! Both maps are wide strips scaled so their full height fits the window.
//! The player walks left and right only and leaves through the right edge.

use raylib::prelude::Vector2;

use super::{
    CHARACTER_ART_SIZE, CameraMode, DialogueDef, EdgeExit, HitboxShape, MusicDef, NpcDef,
    PlayerDef, ScreenDef, UiStyle,
};
use crate::resources::scene::Scene;

const SIDE_SPEED: f32 = 2.5;
const EXIT_MARGIN: f32 = 2.0;

fn npc(name: &'static str, tex_key: &'static str, x: f32, y: f32, size: f32) -> NpcDef {
    NpcDef {
        name,
        tex_key,
        pos: Vector2::new(x, y),
        size,
        // Always behind the player.
        depth_baseline: Some(f32::MIN),
    }
}

/// Every NPC on a side map talks while the player overlaps its sprite.
fn dialogues_for(npcs: &[NpcDef], dialogue_keys: &[&'static str]) -> Vec<DialogueDef> {
    npcs.iter()
        .zip(dialogue_keys)
        .map(|(n, key)| DialogueDef {
            name: n.name,
            rect: n.rect(),
            tex_key: key,
        })
        .collect()
}

pub fn aero_map() -> ScreenDef {
    let map_h = 1440.0;
    let size = CHARACTER_ART_SIZE * 0.27;
    let npcs = vec![
        npc("AeroBot", "AeroBot.png", 2026.0, 650.0, size),
        npc("Mist", "Mist.png", 6175.0, 600.0, size),
    ];
    let dialogues = dialogues_for(&npcs, &["AeroBot_Dialogue.png", "Mist_Dialogue.png"]);
    ScreenDef {
        scene: Scene::AeroMap,
        map_size: Vector2::new(9000.0, map_h),
        camera: CameraMode::FitHeight,
        background: "FrutigerAero.png",
        overlays: Vec::new(),
        player: PlayerDef {
            spawn: Vector2::new(size / 2.0, map_h - size / 2.0),
            speed: SIDE_SPEED,
            size,
            hitbox: HitboxShape::BODY,
            vertical: false,
        },
        colliders: Vec::new(),
        npcs,
        dialogues,
        doors: Vec::new(),
        edge_exit: Some(EdgeExit {
            target: Scene::Lobby,
            margin: EXIT_MARGIN,
        }),
        music: MusicDef {
            id: "crystal_settings",
            file: "alyzea_crystal_settings.mp3",
            title: "alyzea - crystal settings",
        },
        ui: UiStyle::white(),
    }
}

pub fn metro_map() -> ScreenDef {
    let map_h = 960.0;
    let size = CHARACTER_ART_SIZE * 0.18;
    let npcs = vec![
        npc("MetroBot", "MetroBot.png", 1199.0, 460.0, size),
        npc("Melody", "Melody.png", 3379.0, 460.0, size),
    ];
    let dialogues = dialogues_for(&npcs, &["MetroBot_Dialogue.png", "Melody_Dialogue.png"]);
    ScreenDef {
        scene: Scene::MetroMap,
        map_size: Vector2::new(9600.0, map_h),
        camera: CameraMode::FitHeight,
        background: "FrutigerMetro.png",
        overlays: Vec::new(),
        player: PlayerDef {
            spawn: Vector2::new(size / 2.0, map_h - size / 2.0 - 10.0),
            speed: SIDE_SPEED,
            size,
            hitbox: HitboxShape::BODY,
            vertical: false,
        },
        colliders: Vec::new(),
        npcs,
        dialogues,
        doors: Vec::new(),
        edge_exit: Some(EdgeExit {
            target: Scene::AeroMap,
            margin: EXIT_MARGIN,
        }),
        music: MusicDef {
            id: "point",
            file: "perfume_point.mp3",
            title: "Perfume - Point (Instrumental)",
        },
        ui: UiStyle::white(),
    }
}
