//! Screen size resource.
//!
//! Stores the current framebuffer dimensions in pixels. The camera, the menu
//! layout and the overlay sizing read it; the main loop refreshes it every
//! frame so window resizes are picked up.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Current screen size in pixels.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    pub fn as_vec(&self) -> Vector2 {
        Vector2::new(self.w as f32, self.h as f32)
    }
}
