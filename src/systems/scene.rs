use crate::events::scene::SceneChangedEvent;
use crate::resources::menustate::ScreenMode;
use crate::resources::scene::NextScene;
use bevy_ecs::prelude::*;

pub fn check_pending_scene(mut commands: Commands, next_scene: Res<NextScene>) {
    if next_scene.is_pending() {
        commands.trigger(SceneChangedEvent {});
    }
}

pub fn screen_is_playing(mode: Res<ScreenMode>) -> bool {
    matches!(*mode, ScreenMode::Game)
}

/// Menu or the fade out of it.
pub fn screen_is_menu(mode: Res<ScreenMode>) -> bool {
    !matches!(*mode, ScreenMode::Game)
}
