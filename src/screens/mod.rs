//! Screen definitions.
//!
//! Every playable screen is one [`ScreenDef`]: map size and layers, camera
//! mode, player parameters, colliders, NPCs, trigger zones and exits, music
//! and UI style. The enter hook in [`crate::game`] spawns a definition
//! into the world; systems read the active one from the
//! [`ActiveScreen`](crate::resources::activescreen::ActiveScreen) resource.
//!
//! - [`hub`] – the menu hub and the lobby, two variants of the same map
//! - [`sidemaps`] – the horizontally scrolling aero and metro maps

pub mod hub;
pub mod sidemaps;

use raylib::prelude::{Color, Rectangle, Vector2};

use crate::components::boxcollider::BoxCollider;
use crate::resources::scene::Scene;

/// Size of the square source art all characters are authored at.
pub const CHARACTER_ART_SIZE: f32 = 2500.0;

/// How the world is scaled onto the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraMode {
    /// Fixed zoom factor.
    Zoom(f32),
    /// Scale so the whole map height fills the window height.
    FitHeight,
}

impl CameraMode {
    /// World-to-screen scale for a window of `screen_h` pixels showing a map `map_h` tall.
    pub fn scale(&self, screen_h: f32, map_h: f32) -> f32 {
        match *self {
            CameraMode::Zoom(z) => z,
            CameraMode::FitHeight => screen_h / map_h,
        }
    }
}

/// Player hitbox as fractions of the sprite size, relative to the sprite centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitboxShape {
    pub offset_x: f32,
    pub offset_y: f32,
    pub width: f32,
    pub height: f32,
}

impl HitboxShape {
    /// Feet-contact box used on the hub maps.
    pub const FEET: HitboxShape = HitboxShape {
        offset_x: -0.1,
        offset_y: 0.4,
        width: 0.2,
        height: 0.15,
    };

    /// Tall body box used on the side maps.
    pub const BODY: HitboxShape = HitboxShape {
        offset_x: -0.2,
        offset_y: -0.1,
        width: 0.4,
        height: 0.9,
    };

    pub fn collider(&self, sprite_size: f32) -> BoxCollider {
        BoxCollider::new(self.width * sprite_size, self.height * sprite_size).with_offset(
            Vector2 {
                x: self.offset_x * sprite_size,
                y: self.offset_y * sprite_size,
            },
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PlayerDef {
    pub spawn: Vector2,
    pub speed: f32,
    pub size: f32,
    pub hitbox: HitboxShape,
    pub vertical: bool,
}

#[derive(Debug, Clone)]
pub struct NpcDef {
    pub name: &'static str,
    pub tex_key: &'static str,
    /// Top-left corner.
    pub pos: Vector2,
    pub size: f32,
    pub depth_baseline: Option<f32>,
}

impl NpcDef {
    pub fn rect(&self) -> Rectangle {
        Rectangle::new(self.pos.x, self.pos.y, self.size, self.size)
    }
}

#[derive(Debug, Clone)]
pub struct RectDef {
    pub name: &'static str,
    pub rect: Rectangle,
}

#[derive(Debug, Clone)]
pub struct DialogueDef {
    pub name: &'static str,
    pub rect: Rectangle,
    pub tex_key: &'static str,
}

#[derive(Debug, Clone)]
pub struct DoorDef {
    pub name: &'static str,
    pub rect: Rectangle,
    pub target: Scene,
}

/// Leaving through the right edge of the map.
#[derive(Debug, Clone, Copy)]
pub struct EdgeExit {
    pub target: Scene,
    /// Distance from the clamped maximum at which the exit fires.
    pub margin: f32,
}

#[derive(Debug, Clone)]
pub struct MusicDef {
    pub id: &'static str,
    pub file: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone)]
pub struct UiStyle {
    pub text_color: Color,
    pub audio_on: &'static str,
    pub audio_off: &'static str,
    /// Dialogue overlays cover the speaker icon instead of sitting under it.
    pub dialogues_over_audio: bool,
}

impl UiStyle {
    pub fn teal() -> Self {
        Self {
            text_color: Color::new(0x1d, 0xb8, 0xc7, 255),
            audio_on: "audio_on.png",
            audio_off: "audio_off.png",
            dialogues_over_audio: false,
        }
    }

    pub fn white() -> Self {
        Self {
            text_color: Color::WHITE,
            audio_on: "audio_on_white.png",
            audio_off: "audio_off_white.png",
            dialogues_over_audio: true,
        }
    }
}

/// Everything that distinguishes one screen from another.
#[derive(Debug, Clone)]
pub struct ScreenDef {
    pub scene: Scene,
    pub map_size: Vector2,
    pub camera: CameraMode,
    pub background: &'static str,
    /// Map-sized layers drawn over the actors.
    pub overlays: Vec<&'static str>,
    pub player: PlayerDef,
    pub colliders: Vec<RectDef>,
    pub npcs: Vec<NpcDef>,
    /// Declaration order is the overlay draw order.
    pub dialogues: Vec<DialogueDef>,
    pub doors: Vec<DoorDef>,
    pub edge_exit: Option<EdgeExit>,
    pub music: MusicDef,
    pub ui: UiStyle,
}

impl ScreenDef {
    pub fn for_scene(scene: Scene) -> Self {
        match scene {
            Scene::Menu => hub::menu_hub(),
            Scene::Lobby => hub::lobby(),
            Scene::AeroMap => sidemaps::aero_map(),
            Scene::MetroMap => sidemaps::metro_map(),
        }
    }

    /// Every texture key the screen may draw, including the player choices.
    pub fn texture_keys(&self) -> Vec<&'static str> {
        let mut keys = vec![self.background, self.ui.audio_on, self.ui.audio_off];
        keys.extend(self.overlays.iter().copied());
        keys.extend(self.npcs.iter().map(|n| n.tex_key));
        keys.extend(self.dialogues.iter().map(|d| d.tex_key));
        keys.sort_unstable();
        keys.dedup();
        keys
    }
}
