//! Game systems.
//!
//! This module groups all ECS systems that advance input, gameplay, menu and
//! rendering.
//!
//! Submodules overview
//! - [`audio`] – bridge with the audio thread and the music toggle
//! - [`camera`] – keep the camera on the player inside the map
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`menu`] – character-select layout, clicks and fade out
//! - [`movement`] – per-axis collision and map clamping
//! - [`playercontroller`] – translate input into the player's step and walk cycle
//! - [`render`] – draw the menu, the world and the UI using Raylib
//! - [`scene`] – check for pending scene changes and mode run conditions
//! - [`time`] – update wall-clock time
//! - [`triggers`] – dialogue zones, doors and edge exits

pub mod audio;
pub mod camera;
pub mod input;
pub mod menu;
pub mod movement;
pub mod playercontroller;
pub mod render;
pub mod scene;
pub mod time;
pub mod triggers;
