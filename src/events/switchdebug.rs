//! F11 debug overlay toggle.
//!
//! The overlay (collider outlines, hitbox, camera and position readout) is
//! drawn while the [`DebugMode`] resource exists.
use crate::resources::debugmode::DebugMode;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

/// Insert [`DebugMode`] when absent, remove it when present.
pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
) {
    match debug_mode {
        Some(_) => {
            commands.remove_resource::<DebugMode>();
        }
        None => {
            commands.insert_resource(DebugMode {});
        }
    }
    info!(
        "Debug overlay {}",
        if debug_mode.is_some() { "off" } else { "on" }
    );
}
