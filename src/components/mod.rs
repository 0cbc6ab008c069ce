//! ECS components for entities.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned rectangle for collisions, triggers and hitboxes
//! - [`inputcontrolled`] – keyboard-driven movement parameters
//! - [`mapposition`] – map-space position (pivot) for an entity
//! - [`npc`] – static characters and their depth baseline
//! - [`persistent`] – marker for entities that persist across scene changes
//! - [`player`] – the player avatar: size, facing and walk cycle
//! - [`rigidbody`] – per-frame velocity
//! - [`sprite`] – 2D sprite rendering component
//! - [`trigger`] – dialogue and door zones
//! - [`zindex`] – rendering layer for 2D drawing

pub mod boxcollider;
pub mod inputcontrolled;
pub mod mapposition;
pub mod npc;
pub mod persistent;
pub mod player;
pub mod rigidbody;
pub mod sprite;
pub mod trigger;
pub mod zindex;
