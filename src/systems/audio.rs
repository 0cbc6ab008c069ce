//! Music playback backed by a dedicated thread and Raylib.
//!
//! This module hosts the background audio thread and the systems that bridge
//! it with the ECS world:
//! - [`audio_thread`] runs on its own OS thread, owns the Raylib audio device,
//!   and processes [`AudioCmd`] messages, emitting [`AudioMessage`] responses.
//! - [`forward_audio_cmds`] sends the ECS command queue to the thread.
//! - [`poll_audio_messages`] drains the thread's responses into the ECS
//!   message queue each frame.
//! - [`audio_toggle_system`] handles clicks on the speaker icon.
//!
//! Each screen plays one looping track. Failures never reach the player:
//! they come back as messages and are logged by [`log_audio_messages`].
//!
//! The audio thread is created once via
//! [`crate::resources::audio::setup_audio`] and joined via
//! [`crate::resources::audio::shutdown_audio`].

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::{AudioBridge, AudioState, audio_icon_hit};
use crate::resources::input::InputState;
use crate::screens::MusicDef;
use bevy_ecs::prelude::Messages;
use bevy_ecs::prelude::{MessageReader, MessageWriter, Res, ResMut};
use crossbeam_channel::{Receiver, Sender};
use log::{debug, info, warn};
use raylib::core::audio::{Music, RaylibAudio};
use rustc_hash::FxHashMap;

/// Drain any pending events from the audio thread and enqueue them into the
/// ECS [`Messages<AudioMessage>`] mailbox.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
///
/// Run this after [`poll_audio_messages`] in the schedule.
pub fn update_bevy_audio_messages(mut events: ResMut<Messages<AudioMessage>>) {
    events.update();
}

/// Forward ECS AudioCmd messages to the audio thread via the AudioBridge sender.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for AudioCmd so same-frame readers can observe writes.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Report what the audio thread did.
pub fn log_audio_messages(mut reader: MessageReader<AudioMessage>) {
    for msg in reader.read() {
        match msg {
            AudioMessage::MusicLoadFailed { id, error } => {
                warn!("Music '{}' failed to load: {}", id, error)
            }
            AudioMessage::MusicMissing { id } => warn!("Music '{}' is not loaded", id),
            AudioMessage::DeviceUnavailable { error } => {
                warn!("Audio device unavailable, music disabled: {}", error)
            }
            other => debug!("audio: {:?}", other),
        }
    }
}

/// Commands that swap the playing track for `music`.
///
/// The previous track, if any, is stopped and unloaded. The new one is
/// loaded and, when music is enabled, started looping.
pub fn switch_music_cmds(
    state: &mut AudioState,
    music: &MusicDef,
    path: String,
) -> Vec<AudioCmd> {
    let mut cmds = Vec::new();
    if let Some(old) = state.current.take() {
        cmds.push(AudioCmd::StopMusic { id: old.clone() });
        cmds.push(AudioCmd::UnloadMusic { id: old });
    }
    let id = music.id.to_string();
    cmds.push(AudioCmd::LoadMusic {
        id: id.clone(),
        path,
    });
    cmds.push(AudioCmd::VolumeMusic {
        id: id.clone(),
        vol: state.volume,
    });
    state.started = false;
    if state.enabled {
        cmds.push(AudioCmd::PlayMusic {
            id: id.clone(),
            looped: true,
        });
        state.started = true;
    }
    state.current = Some(id);
    cmds
}

/// Command for flipping the music toggle, if there is a track to act on.
pub fn toggle_music_cmd(state: &mut AudioState) -> Option<AudioCmd> {
    state.enabled = !state.enabled;
    let id = state.current.clone()?;
    if !state.enabled {
        return Some(AudioCmd::PauseMusic { id });
    }
    if state.started {
        Some(AudioCmd::ResumeMusic { id })
    } else {
        state.started = true;
        Some(AudioCmd::PlayMusic { id, looped: true })
    }
}

/// Toggle music when the speaker icon is clicked.
///
/// The click is consumed so nothing under the icon also reacts to it.
pub fn audio_toggle_system(
    mut input: ResMut<InputState>,
    mut state: ResMut<AudioState>,
    mut writer: MessageWriter<AudioCmd>,
) {
    if !input.pointer.left_pressed {
        return;
    }
    let p = input.pointer.position;
    if !audio_icon_hit(p.x, p.y) {
        return;
    }
    input.pointer.left_pressed = false;
    if let Some(cmd) = toggle_music_cmd(&mut state) {
        writer.write(cmd);
    }
    info!("Music {}", if state.enabled { "on" } else { "off" });
}

/// A loaded track and its playback flags.
struct Track<'a> {
    music: Music<'a>,
    playing: bool,
    looped: bool,
}

/// Every track the audio thread has loaded, keyed by id.
struct Jukebox<'a> {
    audio: &'a RaylibAudio,
    tracks: FxHashMap<String, Track<'a>>,
}

impl<'a> Jukebox<'a> {
    fn new(audio: &'a RaylibAudio) -> Self {
        Self {
            audio,
            tracks: FxHashMap::default(),
        }
    }

    /// Apply one command. `Shutdown` is handled by the caller.
    fn apply(&mut self, cmd: AudioCmd) -> Option<AudioMessage> {
        match cmd {
            AudioCmd::LoadMusic { id, path } => Some(match self.audio.new_music(&path) {
                Ok(music) => {
                    debug!("audio: loaded '{}' from '{}'", id, path);
                    self.tracks.insert(
                        id.clone(),
                        Track {
                            music,
                            playing: false,
                            looped: false,
                        },
                    );
                    AudioMessage::MusicLoaded { id }
                }
                Err(e) => AudioMessage::MusicLoadFailed {
                    id,
                    error: format!("{} ({})", e, path),
                },
            }),
            AudioCmd::UnloadMusic { id } => self
                .tracks
                .remove(&id)
                .map(|_| AudioMessage::MusicUnloaded { id }),
            AudioCmd::PlayMusic { id, looped } => {
                let Some(track) = self.tracks.get_mut(&id) else {
                    return Some(AudioMessage::MusicMissing { id });
                };
                track.music.seek_stream(0.0);
                track.music.play_stream();
                track.playing = true;
                track.looped = looped;
                Some(AudioMessage::MusicPlayStarted { id })
            }
            AudioCmd::ResumeMusic { id } => {
                let Some(track) = self.tracks.get_mut(&id) else {
                    return Some(AudioMessage::MusicMissing { id });
                };
                track.music.resume_stream();
                track.playing = true;
                Some(AudioMessage::MusicPlayStarted { id })
            }
            AudioCmd::StopMusic { id } => {
                let track = self.tracks.get_mut(&id)?;
                track.music.stop_stream();
                track.playing = false;
                track.looped = false;
                Some(AudioMessage::MusicStopped { id })
            }
            AudioCmd::PauseMusic { id } => {
                let track = self.tracks.get_mut(&id)?;
                track.music.pause_stream();
                track.playing = false;
                Some(AudioMessage::MusicStopped { id })
            }
            AudioCmd::VolumeMusic { id, vol } => {
                let track = self.tracks.get_mut(&id)?;
                track.music.set_volume(vol);
                Some(AudioMessage::MusicVolumeChanged { id, vol })
            }
            AudioCmd::Shutdown => None,
        }
    }

    /// Feed the streams. A looped track that reached its end starts over.
    fn pump(&mut self) {
        for track in self.tracks.values_mut().filter(|t| t.playing) {
            if track.music.is_stream_playing() {
                track.music.update_stream();
                continue;
            }
            if track.music.get_time_played() < track.music.get_time_length() - 0.01 {
                continue;
            }
            if track.looped {
                track.music.seek_stream(0.0);
                track.music.play_stream();
            } else {
                track.playing = false;
            }
        }
    }
}

/// Entry point of the dedicated audio thread.
///
/// Owns the Raylib audio device and every `Music` handle for the life of the
/// thread. If the device cannot be opened the thread reports it once and then
/// drains commands until [`AudioCmd::Shutdown`].
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_evt: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            let _ = tx_evt.send(AudioMessage::DeviceUnavailable {
                error: e.to_string(),
            });
            let _ = rx_cmd.iter().find(|cmd| matches!(cmd, AudioCmd::Shutdown));
            return;
        }
    };
    debug!("audio thread starting (id={:?})", std::thread::current().id());

    let mut jukebox = Jukebox::new(&audio);
    'run: loop {
        for cmd in rx_cmd.try_iter() {
            if matches!(cmd, AudioCmd::Shutdown) {
                break 'run;
            }
            if let Some(msg) = jukebox.apply(cmd) {
                let _ = tx_evt.send(msg);
            }
        }
        jukebox.pump();
        std::thread::sleep(std::time::Duration::from_millis(10));
    }

    // Tracks must be dropped before the device closes.
    drop(jukebox);
    debug!("audio thread exiting");
}
