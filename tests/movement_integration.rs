//! Movement tick integration tests: normalization, sliding, map bounds.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use aeroscape::components::boxcollider::{BoxCollider, Solid};
use aeroscape::components::inputcontrolled::InputControlled;
use aeroscape::components::mapposition::MapPosition;
use aeroscape::components::player::{Facing, Player};
use aeroscape::components::rigidbody::RigidBody;
use aeroscape::components::sprite::Sprite;
use aeroscape::game::{insert_game_resources, spawn_screen};
use aeroscape::resources::activescreen::ActiveScreen;
use aeroscape::resources::audio::init_audio_messages;
use aeroscape::resources::gameconfig::GameConfig;
use aeroscape::resources::input::InputState;
use aeroscape::resources::profile::PlayerProfile;
use aeroscape::resources::scene::Scene;
use aeroscape::resources::screensize::ScreenSize;
use aeroscape::screens::{HitboxShape, ScreenDef};
use aeroscape::systems::movement::movement;
use aeroscape::systems::playercontroller::player_controller;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(scene: Scene) -> World {
    let mut world = World::new();
    insert_game_resources(
        &mut world,
        GameConfig::new(),
        PlayerProfile::default(),
        ScreenSize { w: 1280, h: 720 },
    );
    init_audio_messages(&mut world);
    world.insert_resource(ActiveScreen(ScreenDef::for_scene(scene)));
    world
}

/// An open map with nothing on it.
fn make_empty_world(w: f32, h: f32) -> World {
    let mut world = make_world(Scene::Lobby);
    let mut def = ScreenDef::for_scene(Scene::Lobby);
    def.map_size = Vector2::new(w, h);
    def.colliders.clear();
    world.insert_resource(ActiveScreen(def));
    world
}

fn spawn_player(world: &mut World, pos: Vector2, speed: f32, size: f32, vertical: bool) -> Entity {
    world
        .spawn((
            Player::new(size),
            MapPosition::from_vec(pos),
            RigidBody::new(),
            InputControlled::new(speed, vertical),
            HitboxShape::FEET.collider(size),
            Sprite::centered("Player_1.png", size, size),
        ))
        .id()
}

fn spawn_solid(world: &mut World, x: f32, y: f32, w: f32, h: f32) {
    world.spawn((Solid, MapPosition::new(x, y), BoxCollider::new(w, h)));
}

fn hold(world: &mut World, up: bool, left: bool, down: bool, right: bool) {
    let mut input = world.resource_mut::<InputState>();
    input.move_up.set(up);
    input.move_left.set(left);
    input.move_down.set(down);
    input.move_right.set(right);
}

fn tick(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((player_controller, movement).chain());
    schedule.run(world);
}

fn position(world: &World, e: Entity) -> Vector2 {
    world.get::<MapPosition>(e).unwrap().pos
}

#[test]
fn diagonal_step_has_length_of_speed() {
    let mut world = make_empty_world(5000.0, 5000.0);
    let start = Vector2::new(2500.0, 2500.0);
    let e = spawn_player(&mut world, start, 5.0, 100.0, true);
    hold(&mut world, true, false, false, true);
    tick(&mut world);

    let p = position(&world, e);
    let (dx, dy) = (p.x - start.x, p.y - start.y);
    assert!(approx_eq((dx * dx + dy * dy).sqrt(), 5.0));
    assert!(dx > 0.0 && dy < 0.0);
}

#[test]
fn side_screens_ignore_vertical_keys() {
    let mut world = make_empty_world(9000.0, 1440.0);
    let start = Vector2::new(1000.0, 1000.0);
    let e = spawn_player(&mut world, start, 2.5, 100.0, false);
    hold(&mut world, true, false, false, false);
    tick(&mut world);
    assert_eq!(position(&world, e), start);

    hold(&mut world, true, false, false, true);
    tick(&mut world);
    let p = position(&world, e);
    assert!(approx_eq(p.x, 1002.5));
    assert_eq!(p.y, 1000.0);
}

#[test]
fn blocked_x_still_slides_on_y() {
    let mut world = make_empty_world(5000.0, 5000.0);
    let size = 100.0;
    // Feet hitbox: x in [pos.x - 10, pos.x + 10], y in [pos.y + 40, pos.y + 55].
    let start = Vector2::new(1000.0, 1000.0);
    let e = spawn_player(&mut world, start, 5.0, size, true);
    spawn_solid(&mut world, 1011.0, 0.0, 200.0, 3000.0);

    hold(&mut world, false, false, true, true);
    tick(&mut world);

    let p = position(&world, e);
    assert_eq!(p.x, 1000.0);
    assert!(p.y > 1000.0);
    assert!(approx_eq(p.y - 1000.0, 5.0 * std::f32::consts::FRAC_1_SQRT_2));
}

#[test]
fn walls_stop_straight_movement() {
    let mut world = make_empty_world(5000.0, 5000.0);
    let e = spawn_player(&mut world, Vector2::new(1000.0, 1000.0), 5.0, 100.0, true);
    spawn_solid(&mut world, 1011.0, 0.0, 200.0, 3000.0);
    hold(&mut world, false, false, false, true);
    for _ in 0..10 {
        tick(&mut world);
    }
    assert_eq!(position(&world, e).x, 1000.0);
}

#[test]
fn position_always_inside_map() {
    let mut world = make_world(Scene::Lobby);
    let def = world.resource::<ActiveScreen>().0.clone();
    {
        let mut commands = world.commands();
        spawn_screen(&mut commands, &def, "Player_1.png");
    }
    world.flush();
    let e = {
        let mut q = world.query_filtered::<Entity, With<Player>>();
        q.single(&world).unwrap()
    };
    // Keep the player moving along a fixed pattern of directions.
    let pattern = [
        (true, true, false, false),
        (false, false, true, true),
        (true, false, false, true),
        (false, true, true, false),
        (false, true, false, false),
        (false, false, false, true),
    ];
    let half = def.player.size / 2.0;
    for frame in 0..3000 {
        let (u, l, d, r) = pattern[(frame / 97) % pattern.len()];
        hold(&mut world, u, l, d, r);
        tick(&mut world);
        let p = position(&world, e);
        assert!(p.x >= half && p.x <= def.map_size.x - half, "x={} frame {}", p.x, frame);
        assert!(p.y >= half && p.y <= def.map_size.y - half, "y={} frame {}", p.y, frame);
    }
}

#[test]
fn facing_and_walk_cycle_follow_horizontal_input() {
    let mut world = make_empty_world(5000.0, 5000.0);
    let e = spawn_player(&mut world, Vector2::new(2000.0, 2000.0), 5.0, 100.0, true);

    hold(&mut world, false, true, false, false);
    tick(&mut world);
    tick(&mut world);
    let player = *world.get::<Player>(e).unwrap();
    assert_eq!(player.facing, Facing::Left);
    assert!(approx_eq(player.walk_time, 0.3));
    assert!(world.get::<Sprite>(e).unwrap().flip_h);

    // Vertical only: facing kept, walk cycle reset.
    hold(&mut world, true, false, false, false);
    tick(&mut world);
    let player = *world.get::<Player>(e).unwrap();
    assert_eq!(player.facing, Facing::Left);
    assert_eq!(player.walk_time, 0.0);
}
