//! The screen definition currently being played.

use bevy_ecs::prelude::Resource;

use crate::screens::ScreenDef;

/// Replaced by the enter hook on every scene change.
#[derive(Resource, Debug, Clone)]
pub struct ActiveScreen(pub ScreenDef);
