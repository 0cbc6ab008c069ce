//! Menu screen state.
//!
//! [`ScreenMode`] says whether the character-select menu, the fade out of it,
//! or the map is on screen. [`MenuState`] holds the menu animation counters.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Rectangle, Vector2};

use crate::components::boxcollider::rect_contains;

pub const LOGO_FLOAT_STEP: f32 = 0.02;
pub const FADE_STEP: f32 = 0.02;
pub const TRANSITION_STEP: f32 = 0.05;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenMode {
    /// Character select; the map is not drawn or updated.
    #[default]
    Menu,
    /// Fading the menu out to black. Cannot be cancelled.
    Transition,
    Game,
}

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct MenuState {
    pub logo_float_time: f32,
    pub logo_fade: f32,
    pub footer_fade: f32,
    pub transition_alpha: f32,
}

impl MenuState {
    /// Idle animation while the menu waits for a selection.
    pub fn animate(&mut self) {
        self.logo_float_time += LOGO_FLOAT_STEP;
        self.logo_fade = (self.logo_fade + FADE_STEP).min(1.0);
        self.footer_fade = (self.footer_fade + FADE_STEP).min(1.0);
    }

    /// Advance the fade to black. Returns true once it is complete.
    pub fn advance_transition(&mut self) -> bool {
        self.transition_alpha = (self.transition_alpha + TRANSITION_STEP).min(1.0);
        self.transition_alpha >= 1.0
    }
}

/// Author credit at the bottom left of the menu.
#[derive(Resource, Debug, Clone)]
pub struct FooterLink {
    pub text: String,
    pub url: String,
    /// Rendered text width in pixels, measured once the window exists.
    pub width: f32,
}

pub const FOOTER_TEXT: &str = "Created by Cindy Hoang Nguyen in 2025. www.cindyhoangdesign.com";
pub const FOOTER_URL: &str = "https://cindyhoangdesign.com/";
/// Size the footer is drawn at.
pub const FOOTER_FONT_SIZE: i32 = 11;
/// Size the footer is measured at for its hit box, wider than the drawn text.
pub const FOOTER_HIT_FONT_SIZE: i32 = 14;
pub const FOOTER_X: f32 = 20.0;

impl Default for FooterLink {
    fn default() -> Self {
        // Rough width until the real one is measured.
        let width = FOOTER_TEXT.len() as f32 * FOOTER_HIT_FONT_SIZE as f32 * 0.5;
        FooterLink {
            text: FOOTER_TEXT.to_string(),
            url: FOOTER_URL.to_string(),
            width,
        }
    }
}

impl FooterLink {
    /// Clickable box for a window `screen_h` tall.
    pub fn hit_rect(&self, screen_h: f32) -> Rectangle {
        Rectangle::new(FOOTER_X, screen_h - 34.0, self.width, 14.0)
    }

    /// Inclusive hit test against [`FooterLink::hit_rect`].
    pub fn contains(&self, x: f32, y: f32, screen_h: f32) -> bool {
        rect_contains(self.hit_rect(screen_h), Vector2::new(x, y))
    }
}
