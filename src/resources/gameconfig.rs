//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//! fullscreen = false
//!
//! [audio]
//! enabled = true
//! music_volume = 0.6
//!
//! [paths]
//! assets = ./assets
//! profile = ./profile.ini
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_FULLSCREEN: bool = false;
const DEFAULT_AUDIO_ENABLED: bool = true;
const DEFAULT_MUSIC_VOLUME: f32 = 0.6;
const DEFAULT_ASSETS_DIR: &str = "./assets";
const DEFAULT_PROFILE_PATH: &str = "./profile.ini";
pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores window settings, audio defaults and file locations. `main` loads
/// it once before the window opens.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second. Movement speeds are per frame.
    pub target_fps: u32,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    /// Music starts enabled.
    pub audio_enabled: bool,
    /// Music volume in `[0, 1]`.
    pub music_volume: f32,
    /// Directory holding images and music.
    pub assets_dir: PathBuf,
    /// Player profile file.
    pub profile_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            fullscreen: DEFAULT_FULLSCREEN,
            audio_enabled: DEFAULT_AUDIO_ENABLED,
            music_volume: DEFAULT_MUSIC_VOLUME,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            profile_path: PathBuf::from(DEFAULT_PROFILE_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(fullscreen) = config.getbool("window", "fullscreen").ok().flatten() {
            self.fullscreen = fullscreen;
        }

        // [audio] section
        if let Some(enabled) = config.getbool("audio", "enabled").ok().flatten() {
            self.audio_enabled = enabled;
        }
        if let Some(vol) = config.getfloat("audio", "music_volume").ok().flatten() {
            self.music_volume = (vol as f32).clamp(0.0, 1.0);
        }

        // [paths] section
        if let Some(assets) = config.get("paths", "assets") {
            self.assets_dir = PathBuf::from(assets);
        }
        if let Some(profile) = config.get("paths", "profile") {
            self.profile_path = PathBuf::from(profile);
        }

        info!(
            "Loaded config: {}x{} window, fps={}, fullscreen={}, audio={}, volume={}, assets={:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.fullscreen,
            self.audio_enabled,
            self.music_volume,
            self.assets_dir
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "fullscreen", Some(self.fullscreen.to_string()));

        config.set("audio", "enabled", Some(self.audio_enabled.to_string()));
        config.set("audio", "music_volume", Some(self.music_volume.to_string()));

        config.set(
            "paths",
            "assets",
            Some(self.assets_dir.to_string_lossy().into_owned()),
        );
        config.set(
            "paths",
            "profile",
            Some(self.profile_path.to_string_lossy().into_owned()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Full path of an asset file.
    pub fn asset_path(&self, file: &str) -> PathBuf {
        self.assets_dir.join(file)
    }
}
