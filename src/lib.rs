//! Aeroscape library.
//!
//! This module exposes the game's ECS components, resources, systems, events
//! and screen definitions for use in integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod screens;
pub mod systems;
