//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `activescreen` – definition of the screen being played
//! - `audio` – bridge to the background audio thread and the music toggle
//! - `camera2d` – shared 2D camera used for world/screen transforms
//! - `debugmode` – presence toggles the debug overlay
//! - `dialogue` – dialogue overlays active this frame
//! - `gameconfig` – settings loaded from `config.ini`
//! - `input` – per-frame keyboard and pointer state
//! - `menustate` – menu/transition/game mode and menu animation counters
//! - `profile` – selected character, persisted between runs
//! - `scene` – authoritative and pending scene
//! - `screensize` – current framebuffer dimensions in pixels
//! - `systemsstore` – registry of dynamically-lookup-able systems by name
//! - `texturestore` – loaded textures keyed by file name
//! - `worldtime` – wall-clock time and frame count
pub mod activescreen;
pub mod audio;
pub mod camera2d;
pub mod debugmode;
pub mod dialogue;
pub mod gameconfig;
pub mod input;
pub mod menustate;
pub mod profile;
pub mod scene;
pub mod screensize;
pub mod systemsstore;
pub mod texturestore;
pub mod worldtime;
