//! Character-select menu systems.
//!
//! - [`menu_animation_system`] – logo float, fades and the fade to black
//! - [`menu_click_system`] – tile and footer clicks
//! - [`character_selected_observer`] – stores the choice and starts the fade
//! - [`open_link_observer`] – opens the footer link in the system browser
//!
//! The menu is screen-space only. Its layout is recomputed from the window
//! size every frame by [`character_grid`].

use arrayvec::ArrayVec;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};
use raylib::prelude::{Rectangle, Vector2};

use crate::components::boxcollider::rect_contains;
use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::events::menu::{CharacterSelectedEvent, OpenLinkEvent};
use crate::resources::input::InputState;
use crate::resources::menustate::{FooterLink, MenuState, ScreenMode};
use crate::resources::profile::{CHARACTER_COUNT, PlayerProfile, sprite_for_index};
use crate::resources::screensize::ScreenSize;

pub const GRID_COLUMNS: usize = 3;
pub const TILE_SIZE: f32 = 200.0;
pub const TILE_SPACING: f32 = 40.0;
pub const HOVER_SCALE: f32 = 1.06;

#[derive(Debug, Clone)]
pub struct CharacterTile {
    pub index: usize,
    pub rect: Rectangle,
    pub sprite: String,
}

impl CharacterTile {
    /// Inclusive on every edge.
    pub fn contains(&self, p: Vector2) -> bool {
        rect_contains(self.rect, p)
    }

    /// Rectangle to draw, enlarged about the centre when hovered.
    pub fn draw_rect(&self, hovered: bool) -> Rectangle {
        if !hovered {
            return self.rect;
        }
        let w = self.rect.width * HOVER_SCALE;
        let h = self.rect.height * HOVER_SCALE;
        Rectangle::new(
            self.rect.x - (w - self.rect.width) / 2.0,
            self.rect.y - (h - self.rect.height) / 2.0,
            w,
            h,
        )
    }
}

/// Lay out the 3×2 character grid centred for a `w`×`h` window.
pub fn character_grid(w: f32, h: f32) -> ArrayVec<CharacterTile, CHARACTER_COUNT> {
    let total_w = GRID_COLUMNS as f32 * TILE_SIZE + (GRID_COLUMNS - 1) as f32 * TILE_SPACING;
    let start_x = w / 2.0 - total_w / 2.0;
    let start_y = h / 2.0 - 65.0;
    (0..CHARACTER_COUNT)
        .map(|index| {
            let col = (index % GRID_COLUMNS) as f32;
            let row = (index / GRID_COLUMNS) as f32;
            CharacterTile {
                index,
                rect: Rectangle::new(
                    start_x + col * (TILE_SIZE + TILE_SPACING),
                    start_y + row * (TILE_SIZE + TILE_SPACING),
                    TILE_SIZE,
                    TILE_SIZE,
                ),
                sprite: sprite_for_index(index),
            }
        })
        .collect()
}

/// Tile under the pointer, if any.
pub fn hovered_tile(tiles: &[CharacterTile], p: Vector2) -> Option<usize> {
    tiles.iter().find(|t| t.contains(p)).map(|t| t.index)
}

/// Advance the menu animation, or the fade to black once a character is chosen.
pub fn menu_animation_system(mut menu: ResMut<MenuState>, mut mode: ResMut<ScreenMode>) {
    match *mode {
        ScreenMode::Menu => menu.animate(),
        ScreenMode::Transition => {
            if menu.advance_transition() {
                info!("Menu faded out, entering the hub");
                *mode = ScreenMode::Game;
            }
        }
        ScreenMode::Game => {}
    }
}

/// Route a click on the menu to a character tile or the footer link.
///
/// Runs after the audio toggle, which clears the click when it hits the icon.
pub fn menu_click_system(
    input: Res<InputState>,
    mode: Res<ScreenMode>,
    size: Res<ScreenSize>,
    footer: Res<FooterLink>,
    mut commands: Commands,
) {
    if *mode != ScreenMode::Menu || !input.pointer.left_pressed {
        return;
    }
    let p = input.pointer.position;
    let tiles = character_grid(size.w as f32, size.h as f32);
    if let Some(index) = hovered_tile(&tiles, p) {
        commands.trigger(CharacterSelectedEvent { index });
    } else if footer.contains(p.x, p.y, size.h as f32) {
        commands.trigger(OpenLinkEvent {
            url: footer.url.clone(),
        });
    }
}

/// Store the chosen sprite, show it on the player and start the fade.
pub fn character_selected_observer(
    trigger: On<CharacterSelectedEvent>,
    mut profile: ResMut<PlayerProfile>,
    mut mode: ResMut<ScreenMode>,
    mut players: Query<&mut Sprite, With<Player>>,
) {
    let event = trigger.event();
    if *mode != ScreenMode::Menu {
        debug!("Ignoring character selection outside the menu");
        return;
    }
    profile.select(event.index);
    info!("Selected character {}", profile.sprite);
    if let Err(e) = profile.save_to_file() {
        warn!("{}", e);
    }
    for mut sprite in players.iter_mut() {
        sprite.tex_key = profile.sprite.clone();
    }
    *mode = ScreenMode::Transition;
}

/// Open a link in the default browser. Failures are only logged.
pub fn open_link_observer(trigger: On<OpenLinkEvent>) {
    let url = &trigger.event().url;
    info!("Opening {}", url);
    if let Err(e) = webbrowser::open(url) {
        warn!("Could not open {}: {}", url, e);
    }
}
