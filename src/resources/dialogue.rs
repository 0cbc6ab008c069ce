//! Dialogue overlays the player is currently standing in.

use bevy_ecs::prelude::Resource;
use smallvec::SmallVec;

/// Texture keys of the active overlays, in zone declaration order.
///
/// Rebuilt from scratch every gameplay frame.
#[derive(Resource, Debug, Clone, Default)]
pub struct ActiveDialogues {
    pub keys: SmallVec<[String; 4]>,
}

impl ActiveDialogues {
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Several locked doors share one overlay; it is listed once.
    pub fn push(&mut self, key: &str) {
        if !self.is_active(key) {
            self.keys.push(key.to_string());
        }
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
