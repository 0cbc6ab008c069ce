use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Sprite is identified by a texture key and its size in map units.
/// The whole texture is stretched over `width × height`, whatever its pixel size.
/// The origin selects the pivot point (in map units) relative to the sprite's
/// top-left used for placement: `(0,0)` for map layers and NPCs, the centre
/// for the player.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub origin: Vector2,
    pub flip_h: bool,
}

impl Sprite {
    /// Sprite pivoted at its top-left corner.
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            origin: Vector2::zero(),
            flip_h: false,
        }
    }

    /// Sprite pivoted at its centre.
    pub fn centered(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            origin: Vector2 {
                x: width * 0.5,
                y: height * 0.5,
            },
            ..Self::new(tex_key, width, height)
        }
    }
}
