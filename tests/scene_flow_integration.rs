//! Scene flow integration tests: doors, edge exits, dialogues, the menu and
//! the camera, running the real gameplay schedule on a headless world.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use aeroscape::components::boxcollider::Solid;
use aeroscape::components::mapposition::MapPosition;
use aeroscape::components::npc::Npc;
use aeroscape::events::menu::OpenLinkEvent;
use aeroscape::components::player::Player;
use aeroscape::components::sprite::Sprite;
use aeroscape::components::trigger::TriggerZone;
use aeroscape::game::{add_gameplay_systems, insert_game_resources, register_scene_hooks, start_scene};
use aeroscape::resources::activescreen::ActiveScreen;
use aeroscape::resources::audio::{AudioState, init_audio_messages};
use aeroscape::resources::camera2d::{Camera2DRes, follow};
use aeroscape::resources::dialogue::ActiveDialogues;
use aeroscape::resources::gameconfig::GameConfig;
use aeroscape::resources::input::InputState;
use aeroscape::resources::menustate::{FOOTER_URL, MenuState, ScreenMode};
use aeroscape::resources::profile::PlayerProfile;
use aeroscape::resources::scene::{ActiveScene, NextScene, NextScenes, Scene};
use aeroscape::resources::screensize::ScreenSize;
use aeroscape::systems::menu::character_grid;
use aeroscape::systems::triggers::trigger_zones;

const SCREEN: ScreenSize = ScreenSize { w: 1280, h: 720 };

fn make_world(profile: PlayerProfile) -> World {
    let mut world = World::new();
    insert_game_resources(&mut world, GameConfig::new(), profile, SCREEN);
    init_audio_messages(&mut world);
    register_scene_hooks(&mut world);
    world
}

fn make_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    add_gameplay_systems(&mut schedule);
    schedule
}

fn player(world: &mut World) -> Entity {
    let mut q = world.query_filtered::<Entity, With<Player>>();
    q.single(world).unwrap()
}

fn place_player(world: &mut World, pos: Vector2) {
    let e = player(world);
    world.get_mut::<MapPosition>(e).unwrap().pos = pos;
}

fn player_pos(world: &mut World) -> Vector2 {
    let e = player(world);
    world.get::<MapPosition>(e).unwrap().pos
}

fn scene(world: &World) -> Option<Scene> {
    world.resource::<ActiveScene>().get()
}

fn transitions(world: &World) -> u32 {
    world.resource::<ActiveScene>().transitions()
}

fn click(world: &mut World, at: Vector2) {
    let mut input = world.resource_mut::<InputState>();
    input.pointer.position = at;
    input.pointer.left_pressed = true;
}

fn release(world: &mut World) {
    world.resource_mut::<InputState>().pointer.left_pressed = false;
}

#[derive(Resource, Default)]
struct OpenedLinks(Vec<String>);

fn record_link(trigger: On<OpenLinkEvent>, mut links: ResMut<OpenedLinks>) {
    links.0.push(trigger.event().url.clone());
}

fn count<F: bevy_ecs::query::QueryFilter>(world: &mut World) -> usize {
    let mut q = world.query_filtered::<Entity, F>();
    q.iter(world).count()
}

#[test]
fn lobby_spawns_its_definition() {
    let mut world = make_world(PlayerProfile::default());
    start_scene(&mut world, Scene::Lobby);

    assert_eq!(scene(&world), Some(Scene::Lobby));
    assert_eq!(*world.resource::<ScreenMode>(), ScreenMode::Game);
    assert_eq!(count::<With<Player>>(&mut world), 1);
    assert_eq!(count::<With<Solid>>(&mut world), 9);
    assert_eq!(count::<With<Npc>>(&mut world), 1);
    assert_eq!(count::<With<TriggerZone>>(&mut world), 6);
    assert_eq!(player_pos(&mut world), Vector2::new(4200.0, 1200.0));
    assert_eq!(world.resource::<ActiveScreen>().0.scene, Scene::Lobby);
}

#[test]
fn switching_scene_replaces_entities() {
    let mut world = make_world(PlayerProfile::default());
    start_scene(&mut world, Scene::Lobby);
    start_scene(&mut world, Scene::MetroMap);

    assert_eq!(scene(&world), Some(Scene::MetroMap));
    assert_eq!(count::<With<Player>>(&mut world), 1);
    assert_eq!(count::<With<Solid>>(&mut world), 0);
    assert_eq!(count::<With<Npc>>(&mut world), 2);
    assert_eq!(player_pos(&mut world), Vector2::new(225.0, 725.0));

    let mut q = world.query::<&Npc>();
    let mut names: Vec<String> = q.iter(&world).map(|n| n.name.clone()).collect();
    names.sort();
    assert_eq!(names, ["Melody", "MetroBot"]);
}

#[test]
fn door_overlap_requests_one_scene_however_long_it_lasts() {
    let mut world = make_world(PlayerProfile::default());
    start_scene(&mut world, Scene::Lobby);
    // Feet hitbox inside the aero door.
    place_player(&mut world, Vector2::new(4600.0, 860.0));

    let mut detect = Schedule::default();
    detect.add_systems(trigger_zones);
    for _ in 0..5 {
        detect.run(&mut world);
    }
    assert_eq!(
        world.resource::<NextScene>().get(),
        &NextScenes::Pending(Scene::AeroMap)
    );
    assert_eq!(transitions(&world), 1);
}

#[test]
fn door_navigates_exactly_once() {
    let mut world = make_world(PlayerProfile::default());
    start_scene(&mut world, Scene::Lobby);
    place_player(&mut world, Vector2::new(4600.0, 860.0));

    let mut schedule = make_schedule();
    for _ in 0..10 {
        schedule.run(&mut world);
    }
    assert_eq!(scene(&world), Some(Scene::AeroMap));
    assert_eq!(transitions(&world), 2);
    assert!(!world.resource::<NextScene>().is_pending());
}

#[test]
fn menu_hub_metro_door_leads_to_metro() {
    let mut world = make_world(PlayerProfile::default());
    start_scene(&mut world, Scene::Menu);
    *world.resource_mut::<ScreenMode>() = ScreenMode::Game;
    // Feet hitbox inside the metro door (3124, 170, 375, 525).
    place_player(&mut world, Vector2::new(3300.0, 380.0));

    let mut schedule = make_schedule();
    schedule.run(&mut world);
    assert_eq!(scene(&world), Some(Scene::MetroMap));
}

#[test]
fn dialogue_zone_shows_overlay_while_overlapping() {
    let mut world = make_world(PlayerProfile::default());
    start_scene(&mut world, Scene::Lobby);
    let mut schedule = make_schedule();

    // Feet hitbox inside the helper bot area.
    place_player(&mut world, Vector2::new(4300.0, 1500.0));
    schedule.run(&mut world);
    assert!(
        world
            .resource::<ActiveDialogues>()
            .is_active("HelperBot_Dialogue_2.png")
    );

    place_player(&mut world, Vector2::new(2500.0, 1200.0));
    schedule.run(&mut world);
    assert!(world.resource::<ActiveDialogues>().is_empty());
}

#[test]
fn locked_door_overlay_listed_once() {
    let mut world = make_world(PlayerProfile::default());
    start_scene(&mut world, Scene::Menu);
    *world.resource_mut::<ScreenMode>() = ScreenMode::Game;
    // Orange door (325, 1100, 275, 450).
    place_player(&mut world, Vector2::new(460.0, 1000.0));

    let mut schedule = make_schedule();
    schedule.run(&mut world);
    let dialogues = world.resource::<ActiveDialogues>();
    assert_eq!(dialogues.keys.len(), 1);
    assert_eq!(dialogues.keys[0], "LockedDoor.png");
    assert_eq!(scene(&world), Some(Scene::Menu));
}

#[test]
fn aero_right_edge_returns_to_lobby() {
    let mut world = make_world(PlayerProfile::default());
    start_scene(&mut world, Scene::AeroMap);
    place_player(&mut world, Vector2::new(8650.0, 1000.0));
    world.resource_mut::<InputState>().move_right.set(true);

    let mut schedule = make_schedule();
    for _ in 0..10 {
        schedule.run(&mut world);
        if scene(&world) == Some(Scene::Lobby) {
            break;
        }
    }
    assert_eq!(scene(&world), Some(Scene::Lobby));
    assert_eq!(transitions(&world), 2);
}

#[test]
fn metro_right_edge_leads_to_aero() {
    let mut world = make_world(PlayerProfile::default());
    start_scene(&mut world, Scene::MetroMap);
    place_player(&mut world, Vector2::new(9600.0, 725.0));

    let mut schedule = make_schedule();
    schedule.run(&mut world);
    assert_eq!(scene(&world), Some(Scene::AeroMap));
}

#[test]
fn selecting_fourth_character_persists_and_carries_over() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.ini");
    let mut world = make_world(PlayerProfile::with_path(&path));
    start_scene(&mut world, Scene::Menu);
    assert_eq!(*world.resource::<ScreenMode>(), ScreenMode::Menu);

    let tiles = character_grid(SCREEN.w as f32, SCREEN.h as f32);
    let r = tiles[3].rect;
    click(&mut world, Vector2::new(r.x + r.width / 2.0, r.y + r.height / 2.0));

    let mut schedule = make_schedule();
    schedule.run(&mut world);
    release(&mut world);

    assert_eq!(world.resource::<PlayerProfile>().sprite, "Player_4.png");
    assert_eq!(*world.resource::<ScreenMode>(), ScreenMode::Transition);
    let e = player(&mut world);
    assert_eq!(world.get::<Sprite>(e).unwrap().tex_key, "Player_4.png");

    let mut stored = PlayerProfile::with_path(&path);
    stored.load_from_file().unwrap();
    assert_eq!(stored.sprite, "Player_4.png");

    for _ in 0..25 {
        schedule.run(&mut world);
    }
    assert_eq!(*world.resource::<ScreenMode>(), ScreenMode::Game);
    assert!(world.resource::<MenuState>().transition_alpha >= 1.0);

    start_scene(&mut world, Scene::MetroMap);
    let e = player(&mut world);
    assert_eq!(world.get::<Sprite>(e).unwrap().tex_key, "Player_4.png");
}

#[test]
fn first_map_frame_after_fade_is_framed_by_the_camera() {
    let mut world = make_world(PlayerProfile::default());
    start_scene(&mut world, Scene::Menu);
    let def = world.resource::<ActiveScreen>().0.clone();
    let tiles = character_grid(SCREEN.w as f32, SCREEN.h as f32);
    let r = tiles[0].rect;
    click(&mut world, Vector2::new(r.x + 10.0, r.y + 10.0));

    let mut schedule = make_schedule();
    schedule.run(&mut world);
    release(&mut world);
    assert_eq!(*world.resource::<ScreenMode>(), ScreenMode::Transition);

    let mut frames = 0;
    while *world.resource::<ScreenMode>() != ScreenMode::Game {
        schedule.run(&mut world);
        frames += 1;
        assert!(frames < 100);
    }

    let cam = world.resource::<Camera2DRes>().0;
    assert_eq!(cam.zoom, 0.65);
    let expected = follow(def.player.spawn, SCREEN.as_vec(), def.map_size, 0.65);
    assert_eq!(cam.target, expected);
}

#[test]
fn footer_click_opens_the_credit_link() {
    let mut world = make_world(PlayerProfile::default());
    world.init_resource::<OpenedLinks>();
    world.spawn(Observer::new(record_link));
    start_scene(&mut world, Scene::Menu);
    let h = SCREEN.h as f32;
    let mut schedule = make_schedule();

    click(&mut world, Vector2::new(25.0, h - 40.0));
    schedule.run(&mut world);
    assert!(world.resource::<OpenedLinks>().0.is_empty());

    click(&mut world, Vector2::new(25.0, h - 25.0));
    schedule.run(&mut world);
    assert_eq!(world.resource::<OpenedLinks>().0, [FOOTER_URL]);
    assert_eq!(FOOTER_URL, "https://cindyhoangdesign.com/");
    assert_eq!(*world.resource::<ScreenMode>(), ScreenMode::Menu);
}

#[test]
fn clicks_during_transition_are_ignored() {
    let mut world = make_world(PlayerProfile::default());
    start_scene(&mut world, Scene::Menu);
    let tiles = character_grid(SCREEN.w as f32, SCREEN.h as f32);
    let mut schedule = make_schedule();

    let r = tiles[1].rect;
    click(&mut world, Vector2::new(r.x + 5.0, r.y + 5.0));
    schedule.run(&mut world);

    let r = tiles[5].rect;
    click(&mut world, Vector2::new(r.x + 5.0, r.y + 5.0));
    schedule.run(&mut world);
    assert_eq!(world.resource::<PlayerProfile>().sprite, "Player_2.png");
}

#[test]
fn audio_icon_click_is_consumed() {
    let mut world = make_world(PlayerProfile::default());
    start_scene(&mut world, Scene::Menu);
    let was_enabled = world.resource::<AudioState>().enabled;

    click(&mut world, Vector2::new(25.0, 25.0));
    let mut schedule = make_schedule();
    schedule.run(&mut world);

    assert_eq!(world.resource::<AudioState>().enabled, !was_enabled);
    assert!(!world.resource::<InputState>().pointer.left_pressed);
    assert_eq!(*world.resource::<ScreenMode>(), ScreenMode::Menu);
    assert_eq!(world.resource::<PlayerProfile>().sprite, "Player_1.png");
}

#[test]
fn music_track_follows_scene() {
    let mut world = make_world(PlayerProfile::default());
    start_scene(&mut world, Scene::Lobby);
    assert_eq!(
        world.resource::<AudioState>().current.as_deref(),
        Some("dream_os")
    );
    start_scene(&mut world, Scene::AeroMap);
    assert_eq!(
        world.resource::<AudioState>().current.as_deref(),
        Some("crystal_settings")
    );
}

#[test]
fn camera_stays_inside_map() {
    let mut world = make_world(PlayerProfile::default());
    start_scene(&mut world, Scene::Lobby);
    let def = world.resource::<ActiveScreen>().0.clone();
    let scale = def.camera.scale(SCREEN.h as f32, def.map_size.y);
    let view = Vector2::new(SCREEN.w as f32 / scale, SCREEN.h as f32 / scale);
    let mut schedule = make_schedule();

    for pos in [
        Vector2::new(375.0, 375.0),
        Vector2::new(4625.0, 2125.0),
        Vector2::new(2500.0, 1250.0),
        Vector2::new(400.0, 2100.0),
    ] {
        place_player(&mut world, pos);
        schedule.run(&mut world);
        let cam = world.resource::<Camera2DRes>().0;
        assert!(cam.target.x >= 0.0 && cam.target.x <= def.map_size.x - view.x + 1e-3);
        assert!(cam.target.y >= 0.0 && cam.target.y <= def.map_size.y - view.y + 1e-3);
        assert_eq!(cam.zoom, 0.65);
    }
}

#[test]
fn side_map_camera_never_scrolls_vertically() {
    let mut world = make_world(PlayerProfile::default());
    start_scene(&mut world, Scene::AeroMap);
    let mut schedule = make_schedule();
    for x in [337.5, 4500.0, 8600.0] {
        place_player(&mut world, Vector2::new(x, 1100.0));
        schedule.run(&mut world);
        let cam = world.resource::<Camera2DRes>().0;
        assert_eq!(cam.target.y, 0.0);
        assert!((cam.zoom - 720.0 / 1440.0).abs() < 1e-6);
    }
}
