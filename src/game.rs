//! Game setup and scene hooks.
//!
//! - [`load_textures`] loads every image the screens and menu use.
//! - [`register_scene_hooks`] registers the scene change observer and the
//!   hooks it runs, marking them [`Persistent`].
//! - [`enter_scene`] spawns the active scene's [`ScreenDef`] and switches
//!   the music.
//! - [`clean_scene_entities`] despawns the previous screen.
//! - [`insert_game_resources`] and [`add_gameplay_systems`] set up the world
//!   and the per-frame schedule shared by the executable and the tests.

use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::*;

use crate::components::boxcollider::{BoxCollider, Solid};
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::npc::{DepthBaseline, Npc};
use crate::components::persistent::Persistent;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::trigger::TriggerZone;
use crate::components::zindex::ZIndex;
use crate::events::audio::AudioCmd;
use crate::events::scene::{SceneChangedEvent, observe_scene_change_event};
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::activescreen::ActiveScreen;
use crate::resources::audio::AudioState;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::dialogue::ActiveDialogues;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::menustate::{FooterLink, MenuState, ScreenMode};
use crate::resources::profile::{CHARACTER_COUNT, PlayerProfile, sprite_for_index};
use crate::resources::scene::{ActiveScene, NextScene, Scene};
use crate::resources::screensize::ScreenSize;
use crate::resources::systemsstore::{CLEAN_SCENE, ENTER_SCENE, SystemsStore};
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;
use crate::screens::ScreenDef;
use crate::systems::audio::{audio_toggle_system, switch_music_cmds};
use crate::systems::camera::camera_follow;
use crate::systems::menu::{character_selected_observer, menu_animation_system, menu_click_system};
use crate::systems::movement::movement;
use crate::systems::playercontroller::player_controller;
use crate::systems::render::{MENU_BACKGROUND, MENU_LOGO};
use crate::systems::scene::{check_pending_scene, screen_is_menu, screen_is_playing};
use crate::systems::triggers::trigger_zones;

/// Every texture key used anywhere in the game, without duplicates.
pub fn all_texture_keys() -> Vec<String> {
    let mut keys: Vec<String> = Scene::ALL
        .into_iter()
        .flat_map(|scene| ScreenDef::for_scene(scene).texture_keys())
        .map(str::to_string)
        .collect();
    keys.push(MENU_BACKGROUND.to_string());
    keys.push(MENU_LOGO.to_string());
    keys.extend((0..CHARACTER_COUNT).map(sprite_for_index));
    keys.sort_unstable();
    keys.dedup();
    keys
}

/// Load all textures from the assets directory.
///
/// A texture that fails to load is logged and left out; drawing code skips
/// missing keys.
pub fn load_textures(rl: &mut RaylibHandle, thread: &RaylibThread, config: &GameConfig) -> TextureStore {
    let mut store = TextureStore::new();
    for key in all_texture_keys() {
        let path = config.asset_path(&key);
        match rl.load_texture(thread, &path.to_string_lossy()) {
            Ok(tex) => store.insert(key, tex),
            Err(e) => warn!("Texture {:?} not loaded: {}", path, e),
        }
    }
    info!("Loaded {} textures", store.map.len());
    store
}

/// Insert every resource the gameplay systems read.
///
/// The audio message queues are inserted separately, by
/// [`setup_audio`](crate::resources::audio::setup_audio) or
/// [`init_audio_messages`](crate::resources::audio::init_audio_messages).
pub fn insert_game_resources(
    world: &mut World,
    config: GameConfig,
    profile: PlayerProfile,
    screen: ScreenSize,
) {
    world.insert_resource(AudioState::new(config.audio_enabled, config.music_volume));
    world.insert_resource(config);
    world.insert_resource(profile);
    world.insert_resource(screen);
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(ActiveScene::new());
    world.insert_resource(NextScene::new());
    world.insert_resource(ActiveScreen(ScreenDef::for_scene(Scene::Menu)));
    world.insert_resource(ScreenMode::default());
    world.insert_resource(MenuState::default());
    world.insert_resource(FooterLink::default());
    world.insert_resource(ActiveDialogues::default());
    world.insert_resource(Camera2DRes::default());
}

/// Switch to `scene` right away, outside the schedule.
pub fn start_scene(world: &mut World, scene: Scene) {
    world.resource_mut::<NextScene>().request(scene);
    world.trigger(SceneChangedEvent {});
    world.flush();
}

/// Menu and gameplay systems, in frame order.
///
/// Hardware input, the audio bridge and rendering are added by `main`.
pub fn add_gameplay_systems(schedule: &mut Schedule) {
    schedule.add_systems(audio_toggle_system);
    // The fade may hand over to the map this frame; gameplay must see it.
    schedule.add_systems(
        menu_animation_system
            .run_if(screen_is_menu)
            .before(player_controller),
    );
    schedule.add_systems(
        menu_click_system
            .run_if(screen_is_menu)
            .after(audio_toggle_system),
    );
    schedule.add_systems(
        (player_controller, movement, trigger_zones)
            .chain()
            .run_if(screen_is_playing),
    );
    schedule.add_systems(check_pending_scene.after(trigger_zones));
    schedule.add_systems(
        camera_follow
            .run_if(screen_is_playing)
            .after(check_pending_scene),
    );
}

/// Register the scene observer, the game observers and the scene hooks.
///
/// Registered systems and observers are entities, so they are marked
/// [`Persistent`] to survive [`clean_scene_entities`].
pub fn register_scene_hooks(world: &mut World) {
    world.spawn((Observer::new(observe_scene_change_event), Persistent));
    world.spawn((Observer::new(switch_debug_observer), Persistent));
    world.spawn((Observer::new(character_selected_observer), Persistent));

    let mut systems_store = SystemsStore::new();

    let clean_id = world.register_system(clean_scene_entities);
    world.entity_mut(clean_id.entity()).insert(Persistent);
    systems_store.insert(CLEAN_SCENE, clean_id);

    let enter_id = world.register_system(enter_scene);
    world.entity_mut(enter_id.entity()).insert(Persistent);
    systems_store.insert(ENTER_SCENE, enter_id);

    world.insert_resource(systems_store);
    world.flush();
}

/// Spawn the entities of one screen. The player wears `player_sprite`.
pub fn spawn_screen(commands: &mut Commands, def: &ScreenDef, player_sprite: &str) {
    let p = &def.player;
    commands.spawn((
        Player::new(p.size),
        MapPosition::from_vec(p.spawn),
        RigidBody::new(),
        InputControlled::new(p.speed, p.vertical),
        p.hitbox.collider(p.size),
        Sprite::centered(player_sprite, p.size, p.size),
        ZIndex::ACTORS,
    ));

    for c in &def.colliders {
        commands.spawn((
            Solid,
            MapPosition::new(c.rect.x, c.rect.y),
            BoxCollider::new(c.rect.width, c.rect.height),
        ));
    }

    for npc in &def.npcs {
        let mut e = commands.spawn((
            Npc {
                name: npc.name.to_string(),
            },
            MapPosition::from_vec(npc.pos),
            Sprite::new(npc.tex_key, npc.size, npc.size),
            ZIndex::ACTORS,
        ));
        if let Some(baseline) = npc.depth_baseline {
            e.insert(DepthBaseline(baseline));
        }
    }

    let mut order = 0;
    for d in &def.dialogues {
        commands.spawn((
            TriggerZone::dialogue(d.name, d.tex_key, order),
            MapPosition::new(d.rect.x, d.rect.y),
            BoxCollider::new(d.rect.width, d.rect.height),
        ));
        order += 1;
    }
    for door in &def.doors {
        commands.spawn((
            TriggerZone::door(door.name, door.target, order),
            MapPosition::new(door.rect.x, door.rect.y),
            BoxCollider::new(door.rect.width, door.rect.height),
        ));
        order += 1;
    }
}

/// Enter hook: build the active scene and reset per-screen state.
#[allow(clippy::too_many_arguments)]
pub fn enter_scene(
    mut commands: Commands,
    active_scene: Res<ActiveScene>,
    profile: Res<PlayerProfile>,
    config: Res<GameConfig>,
    mut mode: ResMut<ScreenMode>,
    mut menu: ResMut<MenuState>,
    mut dialogues: ResMut<ActiveDialogues>,
    mut camera: ResMut<Camera2DRes>,
    mut audio: ResMut<AudioState>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    let Some(scene) = active_scene.get() else {
        warn!("enter_scene without an active scene");
        return;
    };
    let def = ScreenDef::for_scene(scene);
    spawn_screen(&mut commands, &def, &profile.sprite);

    *mode = if scene == Scene::Menu {
        ScreenMode::Menu
    } else {
        ScreenMode::Game
    };
    *menu = MenuState::default();
    dialogues.clear();
    *camera = Camera2DRes::default();

    let path = config.asset_path(def.music.file).to_string_lossy().into_owned();
    audio_cmd_writer.write_batch(switch_music_cmds(&mut audio, &def.music, path));

    info!(
        "Entered {} ({} colliders, {} npcs, {} zones)",
        scene,
        def.colliders.len(),
        def.npcs.len(),
        def.dialogues.len() + def.doors.len()
    );
    commands.insert_resource(ActiveScreen(def));
}

/// Teardown hook: despawn everything the previous screen spawned.
pub fn clean_scene_entities(
    mut commands: Commands,
    query: Query<Entity, (With<MapPosition>, Without<Persistent>)>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_texture_keys_cover_menu_and_players() {
        let keys = all_texture_keys();
        for key in [
            "Lobby.png",
            "FrutigerAero.png",
            "FrutigerMetro.png",
            "Aeroscape_Logo.png",
            "Player_1.png",
            "Player_6.png",
            "audio_on_white.png",
        ] {
            assert!(keys.iter().any(|k| k == key), "missing {}", key);
        }
        let mut deduped = keys.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), keys.len());
    }
}
