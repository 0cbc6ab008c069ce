//! Event types and observers used by the game.
//!
//! Events provide a decoupled way for systems to communicate without direct
//! dependencies between them.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`menu`] – character selection and the footer link
//! - [`scene`] – applies a pending scene change
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod audio;
pub mod menu;
pub mod scene;
pub mod switchdebug;
