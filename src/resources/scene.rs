//! Scene state resources.
//!
//! [`ActiveScene`] is the authoritative current screen and [`NextScene`] a
//! pending switch requested by a system (a door, a map edge, the command
//! line). See [`crate::events::scene::observe_scene_change_event`] for how a
//! switch is applied.

use std::fmt;
use std::str::FromStr;

use bevy_ecs::prelude::Resource;

/// The four screens of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scene {
    /// Character select, then the hub map it opens onto.
    #[default]
    Menu,
    Lobby,
    AeroMap,
    MetroMap,
}

impl Scene {
    pub const ALL: [Scene; 4] = [Scene::Menu, Scene::Lobby, Scene::AeroMap, Scene::MetroMap];

    pub fn name(&self) -> &'static str {
        match self {
            Scene::Menu => "menu",
            Scene::Lobby => "lobby",
            Scene::AeroMap => "aero",
            Scene::MetroMap => "metro",
        }
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scene {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scene::ALL
            .into_iter()
            .find(|scene| scene.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown scene '{}' (expected menu, lobby, aero or metro)", s))
    }
}

/// Representation of a requested next scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NextScenes {
    #[default]
    Unchanged,
    Pending(Scene),
}

/// Authoritative current scene.
#[derive(Resource, Debug, Clone, Default)]
pub struct ActiveScene {
    current: Option<Scene>,
    transitions: u32,
}

impl ActiveScene {
    /// No scene entered yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<Scene> {
        self.current
    }

    /// Number of scene switches applied so far.
    pub fn transitions(&self) -> u32 {
        self.transitions
    }

    /// Update the current scene immediately.
    ///
    /// Prefer requesting a switch via [`NextScene`] so that the old scene is
    /// torn down and the new one spawned.
    pub fn set(&mut self, scene: Scene) {
        self.current = Some(scene);
        self.transitions += 1;
    }
}

/// Intent to change to a new scene.
#[derive(Resource, Debug, Clone, Default)]
pub struct NextScene {
    next: NextScenes,
}

impl NextScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &NextScenes {
        &self.next
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.next, NextScenes::Pending(_))
    }

    /// Request a switch to `next`.
    ///
    /// The first request wins until it is applied; later requests in the
    /// meantime are ignored. Returns whether this call registered the request.
    pub fn request(&mut self, next: Scene) -> bool {
        if self.is_pending() {
            return false;
        }
        self.next = NextScenes::Pending(next);
        true
    }

    /// Reset to [`NextScenes::Unchanged`].
    pub fn reset(&mut self) {
        self.next = NextScenes::Unchanged;
    }
}
