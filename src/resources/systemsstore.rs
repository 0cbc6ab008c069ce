//! Registry for dynamically addressable systems.
//!
//! Systems are registered under string keys and looked up later to run via
//! their [`bevy_ecs::system::SystemId`]. The scene change observer uses it to
//! run the despawn and enter hooks without depending on them directly.

use bevy_ecs::prelude::Resource;
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

/// Name of the hook that despawns the previous screen.
pub const CLEAN_SCENE: &str = "clean_scene_entities";
/// Name of the hook that spawns the active screen.
pub const ENTER_SCENE: &str = "enter_scene";

/// Map of string names to system IDs.
#[derive(Resource, Default)]
pub struct SystemsStore {
    pub map: FxHashMap<String, SystemId>,
}

impl SystemsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a system ID under a human-readable name.
    pub fn insert(&mut self, name: impl Into<String>, id: SystemId) {
        self.map.insert(name.into(), id);
    }

    /// Retrieve a system ID by name, if present.
    pub fn get(&self, name: impl AsRef<str>) -> Option<&SystemId> {
        self.map.get(name.as_ref())
    }
}
