//! Drawing.
//!
//! [`render_system`] runs last in the frame. It takes the raylib handle and
//! thread out of the world for the duration of the frame, then draws either
//! the menu or the world pass followed by the screen-space UI.
//!
//! Textures that failed to load are simply not drawn.
use std::ffi::CString;

use bevy_ecs::prelude::*;
use raylib::ffi;
use raylib::prelude::*;

use crate::components::boxcollider::{BoxCollider, Solid};
use crate::components::mapposition::MapPosition;
use crate::components::npc::{DepthBaseline, Npc};
use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::components::trigger::{TriggerAction, TriggerZone};
use crate::components::zindex::ZIndex;
use crate::resources::activescreen::ActiveScreen;
use crate::resources::audio::{
    AUDIO_ICON_SIZE, AUDIO_ICON_X, AUDIO_ICON_Y, AudioState, SONG_TITLE_X, SONG_TITLE_Y,
};
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::dialogue::ActiveDialogues;
use crate::resources::input::InputState;
use crate::resources::menustate::{FOOTER_FONT_SIZE, FOOTER_X, FooterLink, MenuState, ScreenMode};
use crate::resources::scene::ActiveScene;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::systems::menu::{character_grid, hovered_tile};

pub const MENU_BACKGROUND: &str = "LoadingScreen_FrutigerAero.png";
pub const MENU_LOGO: &str = "Aeroscape_Logo.png";
const MENU_WASH: Color = Color::new(230, 244, 255, 229);
const MENU_TEXT: Color = Color::new(0x1d, 0xb8, 0xc7, 255);
const LOGO_WIDTH: f32 = 600.0;

/// Pixel width of `text` in the default font. Needs an open window.
pub fn text_width(text: &str, font_size: i32) -> i32 {
    match CString::new(text) {
        Ok(c_text) => unsafe { ffi::MeasureText(c_text.as_ptr(), font_size) },
        Err(_) => 0,
    }
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(
        color.r,
        color.g,
        color.b,
        (alpha.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

fn full_source(tex: &Texture2D) -> Rectangle {
    Rectangle::new(0.0, 0.0, tex.width as f32, tex.height as f32)
}

/// Something drawn in the actor layer.
#[derive(Debug, Clone)]
pub struct ActorDraw {
    pub z: ZIndex,
    /// Larger is nearer the viewer.
    pub depth: f32,
    pub is_player: bool,
    pub sprite: Sprite,
    pub pos: Vector2,
    pub lift: f32,
}

/// Back to front. On equal depth an NPC is drawn before the player.
pub fn sort_actors(actors: &mut [ActorDraw]) {
    actors.sort_by(|a, b| {
        a.z.cmp(&b.z)
            .then(a.depth.total_cmp(&b.depth))
            .then(a.is_player.cmp(&b.is_player))
    });
}

fn collect_actors(world: &mut World) -> Vec<ActorDraw> {
    let player_y = {
        let mut q = world.query_filtered::<&MapPosition, With<Player>>();
        q.iter(world).next().map(|p| p.pos.y).unwrap_or(0.0)
    };
    let mut q = world.query::<(
        &Sprite,
        &MapPosition,
        &ZIndex,
        Option<&Player>,
        Option<&DepthBaseline>,
    )>();
    q.iter(world)
        .map(|(sprite, pos, z, player, baseline)| ActorDraw {
            z: *z,
            depth: match (player, baseline) {
                (Some(_), _) => player_y,
                (None, Some(b)) => b.0,
                (None, None) => f32::MIN,
            },
            is_player: player.is_some(),
            sprite: sprite.clone(),
            pos: pos.pos,
            lift: player.map(|p| p.hop()).unwrap_or(0.0),
        })
        .collect()
}

fn draw_map_layer(d: &mut impl RaylibDraw, textures: &TextureStore, key: &str, map: Vector2) {
    if let Some(tex) = textures.get(key) {
        d.draw_texture_pro(
            tex,
            full_source(tex),
            Rectangle::new(0.0, 0.0, map.x, map.y),
            Vector2::zero(),
            0.0,
            Color::WHITE,
        );
    }
}

fn draw_actor(d: &mut impl RaylibDraw, textures: &TextureStore, actor: &ActorDraw) {
    let Some(tex) = textures.get(&actor.sprite.tex_key) else {
        return;
    };
    let mut src = full_source(tex);
    if actor.sprite.flip_h {
        src.width = -src.width;
    }
    let dest = Rectangle::new(
        actor.pos.x,
        actor.pos.y - actor.lift,
        actor.sprite.width,
        actor.sprite.height,
    );
    d.draw_texture_pro(tex, src, dest, actor.sprite.origin, 0.0, Color::WHITE);
}

/// Map layers and actors, in map coordinates.
pub fn render_world(world: &mut World, d2: &mut RaylibMode2D<RaylibDrawHandle>) {
    let mut actors = collect_actors(world);
    sort_actors(&mut actors);

    let screen = &world.resource::<ActiveScreen>().0;
    let textures = world.resource::<TextureStore>();

    draw_map_layer(d2, textures, screen.background, screen.map_size);
    for actor in &actors {
        draw_actor(d2, textures, actor);
    }
    for overlay in &screen.overlays {
        draw_map_layer(d2, textures, overlay, screen.map_size);
    }

    if world.contains_resource::<DebugMode>() {
        render_debug_world(world, d2);
    }
}

fn outline(d: &mut impl RaylibDraw, collider: &BoxCollider, pos: Vector2, color: Color) {
    let (x, y, w, h) = collider.get_aabb(pos);
    d.draw_rectangle_lines(x as i32, y as i32, w as i32, h as i32, color);
}

fn render_debug_world(world: &mut World, d2: &mut RaylibMode2D<RaylibDrawHandle>) {
    let mut solids = world.query_filtered::<(&BoxCollider, &MapPosition), With<Solid>>();
    for (collider, pos) in solids.iter(world) {
        outline(d2, collider, pos.pos, Color::RED);
    }
    let mut zones = world.query::<(&BoxCollider, &MapPosition, &TriggerZone)>();
    for (collider, pos, zone) in zones.iter(world) {
        let color = match zone.action {
            TriggerAction::Dialogue(_) => Color::YELLOW,
            TriggerAction::Door(_) => Color::GREEN,
        };
        outline(d2, collider, pos.pos, color);
    }
    let mut players = world.query_filtered::<(&BoxCollider, &MapPosition), With<Player>>();
    for (collider, pos) in players.iter(world) {
        outline(d2, collider, pos.pos, Color::BLUE);
    }
    let mut npcs = world.query::<(&Npc, &MapPosition)>();
    for (npc, pos) in npcs.iter(world) {
        d2.draw_text(&npc.name, pos.pos.x as i32, pos.pos.y as i32 - 40, 32, Color::YELLOW);
    }
}

/// Active dialogue overlays, full window width and bottom-anchored.
pub fn render_dialogues(world: &mut World, d: &mut RaylibDrawHandle) {
    let screen = *world.resource::<ScreenSize>();
    let textures = world.resource::<TextureStore>();
    for key in &world.resource::<ActiveDialogues>().keys {
        let Some(tex) = textures.get(key) else {
            continue;
        };
        if tex.width <= 0 {
            continue;
        }
        let w = screen.w as f32;
        let h = w * tex.height as f32 / tex.width as f32;
        d.draw_texture_pro(
            tex,
            full_source(tex),
            Rectangle::new(0.0, screen.h as f32 - h, w, h),
            Vector2::zero(),
            0.0,
            Color::WHITE,
        );
    }
}

/// Speaker icon and, while music is on, the track title.
pub fn render_audio_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    let screen = &world.resource::<ActiveScreen>().0;
    let audio = world.resource::<AudioState>();
    let textures = world.resource::<TextureStore>();

    let icon = if audio.enabled {
        screen.ui.audio_on
    } else {
        screen.ui.audio_off
    };
    if let Some(tex) = textures.get(icon) {
        d.draw_texture_pro(
            tex,
            full_source(tex),
            Rectangle::new(AUDIO_ICON_X, AUDIO_ICON_Y, AUDIO_ICON_SIZE, AUDIO_ICON_SIZE),
            Vector2::zero(),
            0.0,
            Color::WHITE,
        );
    }
    if audio.enabled {
        d.draw_text(
            screen.music.title,
            SONG_TITLE_X,
            SONG_TITLE_Y,
            14,
            screen.ui.text_color,
        );
    }
}

/// Character select, with the fade to black on top while transitioning.
pub fn render_menu(world: &mut World, d: &mut RaylibDrawHandle) {
    let screen = *world.resource::<ScreenSize>();
    let menu = *world.resource::<MenuState>();
    let mode = *world.resource::<ScreenMode>();
    let pointer = world.resource::<InputState>().pointer.position;
    let footer = world.resource::<FooterLink>();
    let textures = world.resource::<TextureStore>();
    let (w, h) = (screen.w as f32, screen.h as f32);

    if let Some(tex) = textures.get(MENU_BACKGROUND) {
        d.draw_texture_pro(
            tex,
            full_source(tex),
            Rectangle::new(0.0, 0.0, w, h),
            Vector2::zero(),
            0.0,
            Color::WHITE,
        );
    }
    d.draw_rectangle(0, 0, screen.w, screen.h, MENU_WASH);

    if let Some(tex) = textures.get(MENU_LOGO) {
        if tex.width > 0 {
            let logo_h = tex.height as f32 / tex.width as f32 * LOGO_WIDTH;
            let y = 18.0 + menu.logo_float_time.sin() * 10.0;
            d.draw_texture_pro(
                tex,
                full_source(tex),
                Rectangle::new(w / 2.0 - LOGO_WIDTH / 2.0, y, LOGO_WIDTH, logo_h),
                Vector2::zero(),
                0.0,
                with_alpha(Color::WHITE, menu.logo_fade),
            );
        }
    }

    let title = "Select Your Character";
    d.draw_text(
        title,
        screen.w / 2 - text_width(title, 20) / 2,
        314,
        20,
        MENU_TEXT,
    );

    let tiles = character_grid(w, h);
    let hovered = hovered_tile(&tiles, pointer);
    for tile in &tiles {
        if let Some(tex) = textures.get(&tile.sprite) {
            d.draw_texture_pro(
                tex,
                full_source(tex),
                tile.draw_rect(hovered == Some(tile.index)),
                Vector2::zero(),
                0.0,
                Color::WHITE,
            );
        }
    }

    let hint = "Controls: WASD to move";
    d.draw_text(hint, screen.w - 18 - text_width(hint, 14), 21, 14, MENU_TEXT);

    d.draw_text(
        &footer.text,
        FOOTER_X as i32,
        screen.h - 32,
        FOOTER_FONT_SIZE,
        with_alpha(MENU_TEXT, menu.footer_fade),
    );

    if mode == ScreenMode::Transition {
        d.draw_rectangle(
            0,
            0,
            screen.w,
            screen.h,
            with_alpha(Color::BLACK, menu.transition_alpha),
        );
    }
}

/// FPS, scene, camera and player readout while [`DebugMode`] is present.
pub fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if !world.contains_resource::<DebugMode>() {
        return;
    }
    let screen = *world.resource::<ScreenSize>();
    let cam = world.resource::<Camera2DRes>().0;
    let scene = world.resource::<ActiveScene>().get();
    let mode = *world.resource::<ScreenMode>();
    let player = {
        let mut q = world.query_filtered::<&MapPosition, With<Player>>();
        q.iter(world).next().map(|p| p.pos)
    };

    let text = format!("DEBUG (F11) | FPS: {}", d.get_fps());
    d.draw_text(&text, 10, 50, 10, Color::BLACK);
    let text = format!(
        "Scene: {} | Mode: {:?}",
        scene.map(|s| s.name()).unwrap_or("none"),
        mode
    );
    d.draw_text(&text, 10, 64, 10, Color::BLACK);
    if let Some(p) = player {
        let text = format!("Player: ({:.1}, {:.1})", p.x, p.y);
        d.draw_text(&text, 10, 78, 10, Color::BLACK);
    }
    let text = format!(
        "Camera: ({:.1}, {:.1}) Zoom: {:.3}",
        cam.target.x, cam.target.y, cam.zoom
    );
    d.draw_text(&text, 10, screen.h - 20, 10, Color::BLACK);
}

/// Draw one frame.
pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return;
    };

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        if *world.resource::<ScreenMode>() == ScreenMode::Game {
            let cam = world.resource::<Camera2DRes>().0;
            {
                let mut d2 = d.begin_mode2D(cam);
                render_world(world, &mut d2);
            }
            if world.resource::<ActiveScreen>().0.ui.dialogues_over_audio {
                render_audio_ui(world, &mut d);
                render_dialogues(world, &mut d);
            } else {
                render_dialogues(world, &mut d);
                render_audio_ui(world, &mut d);
            }
        } else {
            render_menu(world, &mut d);
            render_audio_ui(world, &mut d);
        }
        render_debug_ui(world, &mut d);
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}
