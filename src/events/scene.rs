//! Scene change event and observer.
//!
//! Systems request a change of screen by calling [`NextScene::request`].
//! Emitting a [`SceneChangedEvent`] then triggers the observer in this
//! module, which applies the request to [`ActiveScene`], despawns the old
//! screen and spawns the new one through the hooks stored in
//! [`SystemsStore`].
//!
//! This decouples the intent to change scene from the mechanics of running
//! teardown/setup systems and avoids borrowing conflicts.
use crate::resources::scene::NextScenes::{Pending, Unchanged};
use crate::resources::scene::{ActiveScene, NextScene, Scene};
use crate::resources::systemsstore::{CLEAN_SCENE, ENTER_SCENE, SystemsStore};
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending scene change should be applied.
///
/// Emitting this event causes [`observe_scene_change_event`] to read
/// [`NextScene`]. If it contains [`Pending`], the observer switches scenes
/// and clears the pending value; if it is [`Unchanged`], nothing happens.
#[derive(Event, Debug, Clone, Copy)]
pub struct SceneChangedEvent {}

/// Observer that applies a pending scene change.
///
/// Contract
/// - Reads the intention from [`NextScene`].
/// - If pending, sets [`ActiveScene`], resets [`NextScene`] to
///   [`Unchanged`], then queues the `clean_scene_entities` and
///   `enter_scene` hooks, in that order.
/// - If any required resource is missing, logs a diagnostic and returns.
pub fn observe_scene_change_event(
    _trigger: On<SceneChangedEvent>,
    mut commands: Commands,
    mut next_scene: Option<ResMut<NextScene>>,
    mut active_scene: Option<ResMut<ActiveScene>>,
    systems_store: Res<SystemsStore>,
) {
    debug!("SceneChangedEvent triggered");

    let (Some(next_scene), Some(active_scene)) =
        (next_scene.as_deref_mut(), active_scene.as_deref_mut())
    else {
        warn!(
            "One or more resources missing in observe_scene_change_event. next_scene: {:?}, active_scene: {:?}",
            next_scene.is_some(),
            active_scene.is_some()
        );
        return;
    };

    match *next_scene.get() {
        Pending(new_scene) => {
            info!(
                "Switching scene from {} to {}",
                active_scene
                    .get()
                    .map(|s: Scene| s.name())
                    .unwrap_or("nothing"),
                new_scene
            );
            active_scene.set(new_scene);
            next_scene.reset();
            run_hook(CLEAN_SCENE, &mut commands, &systems_store);
            run_hook(ENTER_SCENE, &mut commands, &systems_store);
        }
        Unchanged => {
            debug!("No scene change pending.");
        }
    }
}

fn run_hook(name: &str, commands: &mut Commands, systems_store: &SystemsStore) {
    match systems_store.get(name) {
        Some(id) => commands.run_system(*id),
        None => warn!("Scene hook '{}' not found in SystemsStore", name),
    }
}
