//! ECS resources that bridge the main thread with the background audio thread.
//!
//! Use [`setup_audio`] once during initialization to spawn the audio thread
//! and insert the [`AudioBridge`] and message resources. Call
//! [`shutdown_audio`] during teardown to stop the thread.
//!
//! [`AudioState`] is the music on/off toggle shown by the speaker icon. It
//! carries over between screens.

use crate::components::boxcollider::rect_contains;
use crate::events::audio::{AudioCmd, AudioMessage};
use crate::systems::audio::audio_thread;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::warn;
use raylib::prelude::{Rectangle, Vector2};

/// Speaker icon placement in window pixels.
pub const AUDIO_ICON_X: f32 = 18.0;
pub const AUDIO_ICON_Y: f32 = 18.0;
pub const AUDIO_ICON_SIZE: f32 = 20.0;
/// Where the track title is drawn.
pub const SONG_TITLE_X: i32 = 58;
pub const SONG_TITLE_Y: i32 = 22;

/// Shared bridge between the ECS world and the audio thread.
///
/// Created by [`setup_audio`]. Systems send commands via
/// [`AudioBridge::tx_cmd`] and poll for events via [`AudioBridge::rx_msg`].
#[derive(Resource)]
pub struct AudioBridge {
    /// Sender for [`AudioCmd`] messages (ECS -> audio thread).
    pub tx_cmd: Sender<AudioCmd>,
    /// Receiver for [`AudioMessage`] messages (audio thread -> ECS).
    pub rx_msg: Receiver<AudioMessage>,
    /// Join handle for the background audio thread.
    pub handle: std::thread::JoinHandle<()>,
}

/// Music toggle and the track of the current screen.
#[derive(Resource, Debug, Clone)]
pub struct AudioState {
    pub enabled: bool,
    pub volume: f32,
    /// Music id of the current screen.
    pub current: Option<String>,
    /// Whether `current` was started since it was loaded. Resume needs a
    /// started track; otherwise it is played from the top.
    pub started: bool,
}

impl AudioState {
    pub fn new(enabled: bool, volume: f32) -> Self {
        Self {
            enabled,
            volume,
            current: None,
            started: false,
        }
    }
}

/// Inclusive hit test against the speaker icon.
pub fn audio_icon_hit(x: f32, y: f32) -> bool {
    rect_contains(
        Rectangle::new(AUDIO_ICON_X, AUDIO_ICON_Y, AUDIO_ICON_SIZE, AUDIO_ICON_SIZE),
        Vector2::new(x, y),
    )
}

/// Insert the message queues used by the audio systems.
///
/// Split out so tests can observe the commands without an audio thread.
pub fn init_audio_messages(world: &mut World) {
    world.insert_resource(Messages::<AudioMessage>::default());
    world.insert_resource(Messages::<AudioCmd>::default());
}

/// Spawn the audio thread and register bridge resources.
///
/// This function:
/// - Creates command/event channels.
/// - Spawns the background thread running [`audio_thread`].
/// - Inserts [`AudioBridge`] and the message queues so that systems can
///   send commands and poll for events.
pub fn setup_audio(world: &mut World) {
    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    let (tx_msg, rx_msg) = unbounded::<AudioMessage>();

    let spawned = std::thread::Builder::new()
        .name("audio".into())
        .spawn(move || audio_thread(rx_cmd, tx_msg));
    match spawned {
        Ok(handle) => world.insert_resource(AudioBridge {
            tx_cmd,
            rx_msg,
            handle,
        }),
        Err(e) => warn!("Audio thread could not be started: {}", e),
    }
    init_audio_messages(world);
}

/// Gracefully request shutdown of the audio thread and join it.
///
/// If the bridge resource exists, sends [`AudioCmd::Shutdown`], waits for the
/// thread to exit, and removes the resource from the world.
pub fn shutdown_audio(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<AudioBridge>() {
        let _ = bridge.tx_cmd.send(AudioCmd::Shutdown);
        let _ = bridge.handle.join();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_hit_is_inclusive() {
        assert!(audio_icon_hit(18.0, 18.0));
        assert!(audio_icon_hit(38.0, 38.0));
        assert!(audio_icon_hit(28.0, 25.0));
        assert!(!audio_icon_hit(38.5, 20.0));
        assert!(!audio_icon_hit(17.9, 20.0));
    }

    #[test]
    fn test_new_state_has_no_track() {
        let state = AudioState::new(true, 0.6);
        assert!(state.current.is_none());
        assert!(!state.started);
    }
}
