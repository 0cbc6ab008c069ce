//! The hub map, in its two variants.
//!
//! [`menu_hub`] is the map the character-select menu fades into: only the
//! metro door is open. [`lobby`] is the same map when coming back from the
//! aero side: the blue door on the right now leads to the aero map.

use raylib::prelude::{Rectangle, Vector2};

use super::{
    CHARACTER_ART_SIZE, CameraMode, DialogueDef, DoorDef, HitboxShape, MusicDef, NpcDef,
    PlayerDef, RectDef, ScreenDef, UiStyle,
};
use crate::resources::scene::Scene;

pub const HUB_WIDTH: f32 = 5000.0;
pub const HUB_HEIGHT: f32 = 2500.0;
pub const HUB_ZOOM: f32 = 0.65;
pub const HUB_PLAYER_SIZE: f32 = CHARACTER_ART_SIZE * 0.3;

const CLOVER_SIZE: f32 = CHARACTER_ART_SIZE * 0.3;
const CLOVER_X: f32 = 894.0;
const CLOVER_Y: f32 = 750.0;
/// The player walks behind Clover while above this line.
const CLOVER_BASELINE: f32 = 1125.0;

fn rect(name: &'static str, x: f32, y: f32, w: f32, h: f32) -> RectDef {
    RectDef {
        name,
        rect: Rectangle::new(x, y, w, h),
    }
}

fn colliders() -> Vec<RectDef> {
    vec![
        rect("tree", 1978.0, 1625.0, 1025.0, 575.0),
        rect("help desk", 4300.0, 1700.0, 600.0, 625.0),
        rect("right sofa", 3691.0, 288.0, 740.0, 490.0),
        rect("middle sofa", 2142.0, 274.0, 740.0, 490.0),
        rect("left sofa", 544.0, 274.0, 740.0, 490.0),
        rect("left wall top", 110.0, 75.0, 450.0, 900.0),
        rect("left wall bottom", 0.0, 675.0, 448.0, 1000.0),
        rect("right wall top", 4425.0, 150.0, 500.0, 900.0),
        rect("right wall bottom", 4552.0, 775.0, 448.0, 816.0),
    ]
}

fn clover() -> NpcDef {
    NpcDef {
        name: "Clover",
        tex_key: "Clover.png",
        pos: Vector2::new(CLOVER_X, CLOVER_Y),
        size: CLOVER_SIZE,
        depth_baseline: Some(CLOVER_BASELINE),
    }
}

/// Proximity zone in front of Clover's feet.
fn clover_zone() -> Rectangle {
    Rectangle::new(
        CLOVER_X + CLOVER_SIZE * 0.38,
        CLOVER_Y + CLOVER_SIZE * 0.8,
        CLOVER_SIZE * 0.6,
        CLOVER_SIZE * 0.3,
    )
}

fn helper_bot_zone() -> Rectangle {
    Rectangle::new(4200.0, 1750.0, 200.0, 550.0)
}

fn orange_door() -> Rectangle {
    Rectangle::new(325.0, 1100.0, 275.0, 450.0)
}

fn blue_door() -> Rectangle {
    Rectangle::new(4400.0, 1100.0, 275.0, 450.0)
}

fn green_door() -> Rectangle {
    Rectangle::new(1498.0, 200.0, 375.0, 525.0)
}

fn metro_door() -> DoorDef {
    DoorDef {
        name: "metro door",
        rect: Rectangle::new(3124.0, 170.0, 375.0, 525.0),
        target: Scene::MetroMap,
    }
}

fn base(scene: Scene, player: PlayerDef, music: MusicDef) -> ScreenDef {
    ScreenDef {
        scene,
        map_size: Vector2::new(HUB_WIDTH, HUB_HEIGHT),
        camera: CameraMode::Zoom(HUB_ZOOM),
        background: "Lobby.png",
        overlays: vec!["tree_top.png", "Plant.png"],
        player,
        colliders: colliders(),
        npcs: vec![clover()],
        dialogues: Vec::new(),
        doors: Vec::new(),
        edge_exit: None,
        music,
        ui: UiStyle::teal(),
    }
}

pub fn menu_hub() -> ScreenDef {
    let player = PlayerDef {
        spawn: Vector2::new(HUB_WIDTH / 2.0, HUB_HEIGHT - HUB_PLAYER_SIZE / 2.0 - 10.0),
        speed: 6.0,
        size: HUB_PLAYER_SIZE,
        hitbox: HitboxShape::FEET,
        vertical: true,
    };
    let music = MusicDef {
        id: "home_menu",
        file: "alyzea_home_menu.mp3",
        title: "alyzea - home menu",
    };
    let mut def = base(Scene::Menu, player, music);
    def.dialogues = vec![
        DialogueDef {
            name: "helper bot",
            rect: helper_bot_zone(),
            tex_key: "HelperBot_Dialogue.png",
        },
        DialogueDef {
            name: "clover",
            rect: clover_zone(),
            tex_key: "Clover_Dialogue.png",
        },
        DialogueDef {
            name: "orange door",
            rect: orange_door(),
            tex_key: "LockedDoor.png",
        },
        DialogueDef {
            name: "blue door",
            rect: blue_door(),
            tex_key: "LockedDoor.png",
        },
        DialogueDef {
            name: "green door",
            rect: green_door(),
            tex_key: "LockedDoor.png",
        },
    ];
    def.doors = vec![metro_door()];
    def
}

pub fn lobby() -> ScreenDef {
    let player = PlayerDef {
        spawn: Vector2::new(4200.0, 1200.0),
        speed: 5.0,
        size: HUB_PLAYER_SIZE,
        hitbox: HitboxShape::FEET,
        vertical: true,
    };
    let music = MusicDef {
        id: "dream_os",
        file: "alyzea_dream_os.mp3",
        title: "alyzea - dream OS",
    };
    let mut def = base(Scene::Lobby, player, music);
    def.dialogues = vec![
        DialogueDef {
            name: "helper bot",
            rect: helper_bot_zone(),
            tex_key: "HelperBot_Dialogue_2.png",
        },
        DialogueDef {
            name: "clover",
            rect: clover_zone(),
            tex_key: "Clover_Dialogue_2.png",
        },
        DialogueDef {
            name: "orange door",
            rect: orange_door(),
            tex_key: "LockedDoor.png",
        },
        DialogueDef {
            name: "green door",
            rect: green_door(),
            tex_key: "LockedDoor.png",
        },
    ];
    def.doors = vec![
        metro_door(),
        DoorDef {
            name: "aero door",
            rect: Rectangle::new(4496.0, 1060.0, 275.0, 450.0),
            target: Scene::AeroMap,
        },
    ];
    def
}
