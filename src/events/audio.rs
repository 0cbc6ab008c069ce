use bevy_ecs::message::Message;

/// Commands sent *to* the audio thread
#[derive(Message, Debug, Clone)]
pub enum AudioCmd {
    LoadMusic { id: String, path: String },
    UnloadMusic { id: String },
    PlayMusic { id: String, looped: bool },
    StopMusic { id: String },
    PauseMusic { id: String },
    ResumeMusic { id: String },
    VolumeMusic { id: String, vol: f32 },
    Shutdown,
}

/// Events sent *back* from the audio thread
#[derive(Message, Debug, Clone)]
pub enum AudioMessage {
    MusicLoaded { id: String },
    MusicUnloaded { id: String },
    MusicLoadFailed { id: String, error: String },
    MusicPlayStarted { id: String },
    MusicStopped { id: String },
    MusicVolumeChanged { id: String, vol: f32 },
    /// The command referred to a track that is not loaded.
    MusicMissing { id: String },
    /// No audio device; every later command is dropped.
    DeviceUnavailable { error: String },
}
