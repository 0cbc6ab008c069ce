//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component are not despawned when the
//! active scene changes. Observers and registered systems are entities too,
//! so they carry this marker.

use bevy_ecs::prelude::Component;

/// Tag component used to mark entities that should persist across scene changes.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
