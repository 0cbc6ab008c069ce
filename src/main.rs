//! Aeroscape main entry point.
//!
//! A small top-down exploration game written in Rust using:
//! - **raylib** for windowing, graphics, and audio
//! - **bevy_ecs** for entity-component-system architecture
//!
//! The player picks a character on the menu, walks around the hub, and
//! travels through doors and map edges to the aero and metro side maps.
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (position, sprite, collider, trigger, player)
//! - [`events`] – Event types (scene change, menu selection, debug toggle, audio)
//! - [`game`] – World setup, scene hooks and the gameplay schedule
//! - [`resources`] – ECS resources (input, scene, camera, profile, audio, config)
//! - [`screens`] – The four screen definitions
//! - [`systems`] – ECS systems (input, movement, triggers, camera, menu, render)
//!
//! # Main Loop
//!
//! 1. Parse the command line, load `config.ini` and the player profile
//! 2. Open the window, load textures, start the audio thread
//! 3. Register observers and scene hooks, enter the start scene
//! 4. Run the main loop: input, menu or gameplay, scene change, render
//! 5. Stop the audio thread on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --scene lobby --debug
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod screens;
mod systems;

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{info, warn};

use crate::components::persistent::Persistent;
use crate::resources::audio::{AudioBridge, setup_audio, shutdown_audio};
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::{DEFAULT_CONFIG_PATH, GameConfig};
use crate::resources::menustate::{FOOTER_HIT_FONT_SIZE, FooterLink};
use crate::resources::profile::PlayerProfile;
use crate::resources::scene::Scene;
use crate::resources::screensize::ScreenSize;
use crate::systems::audio::{
    audio_toggle_system, forward_audio_cmds, log_audio_messages, poll_audio_messages,
    update_bevy_audio_cmds, update_bevy_audio_messages,
};
use crate::systems::input::update_input_state;
use crate::systems::menu::open_link_observer;
use crate::systems::render::{render_system, text_width};
use crate::systems::time::update_world_time;

#[derive(Parser, Debug)]
#[command(name = "aeroscape", version, about = "A top-down walk through the Frutiger Aero hub")]
struct Cli {
    /// Configuration file.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Scene to start in: menu, lobby, aero or metro.
    #[arg(long, default_value = "menu")]
    scene: Scene,

    /// Start with the debug overlay on (toggle with F11).
    #[arg(long)]
    debug: bool,

    /// Ignore the stored character choice.
    #[arg(long)]
    reset_profile: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    // --------------- Configuration ---------------
    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }

    let mut profile = PlayerProfile::with_path(config.profile_path.clone());
    if cli.reset_profile {
        info!("Profile reset, using {}", profile.sprite);
    } else if let Err(e) = profile.load_from_file() {
        info!("{}; using {}", e, profile.sprite);
    }

    // --------------- Window ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Aeroscape")
        .build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC to exit
    rl.set_exit_key(None);
    if config.fullscreen {
        rl.toggle_fullscreen();
    }

    let textures = game::load_textures(&mut rl, &thread, &config);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    let screen = ScreenSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    };
    game::insert_game_resources(&mut world, config, profile, screen);
    {
        let mut footer = world.resource_mut::<FooterLink>();
        footer.width = text_width(&footer.text, FOOTER_HIT_FONT_SIZE) as f32;
    }
    world.insert_resource(textures);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }

    // Init audio
    setup_audio(&mut world); // must go before the first scene is entered

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    game::register_scene_hooks(&mut world);
    world.spawn((Observer::new(open_link_observer), Persistent));
    world.flush();

    game::start_scene(&mut world, cli.scene);

    let mut update = Schedule::default();
    update.add_systems(update_input_state.before(audio_toggle_system));
    game::add_gameplay_systems(&mut update);
    update.add_systems(
        // audio systems must be together
        (
            // First, advance AudioCmd messages and forward them to the audio thread
            update_bevy_audio_cmds,
            forward_audio_cmds,
            // Then, pull audio thread messages and advance them
            poll_audio_messages,
            update_bevy_audio_messages,
            log_audio_messages,
        )
            .chain()
            .run_if(resource_exists::<AudioBridge>),
    );

    let mut render = Schedule::default();
    render.add_systems(render_system);

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);
        render.run(&mut world);

        world.clear_trackers();

        // Window may have been resized
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut screen_size = world.resource_mut::<ScreenSize>();
            screen_size.w = new_w;
            screen_size.h = new_h;
        }
    }
    shutdown_audio(&mut world);
}
