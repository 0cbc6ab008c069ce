//! Selected character, the only state kept between runs.
//!
//! # Profile File Format
//!
//! ```ini
//! [player]
//! sprite = Player_4.png
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

pub const DEFAULT_SPRITE: &str = "Player_1.png";
pub const CHARACTER_COUNT: usize = 6;

/// Sprite key for the character tile at `index` (0-based).
pub fn sprite_for_index(index: usize) -> String {
    format!("Player_{}.png", index + 1)
}

#[derive(Resource, Debug, Clone)]
pub struct PlayerProfile {
    pub sprite: String,
    /// Where the profile is persisted. `None` keeps it in memory only.
    pub path: Option<PathBuf>,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            sprite: DEFAULT_SPRITE.to_string(),
            path: None,
        }
    }
}

impl PlayerProfile {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Load the stored sprite. Unknown sprite names are ignored.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let mut ini = Ini::new();
        ini.load(path)
            .map_err(|e| format!("Failed to load profile file: {}", e))?;
        if let Some(sprite) = ini.get("player", "sprite") {
            let valid = (0..CHARACTER_COUNT).any(|i| sprite_for_index(i) == sprite);
            if !valid {
                return Err(format!("Unknown sprite '{}' in profile", sprite));
            }
            self.sprite = sprite;
        }
        info!("Loaded profile: sprite={}", self.sprite);
        Ok(())
    }

    pub fn save_to_file(&self) -> Result<(), String> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let mut ini = Ini::new();
        ini.set("player", "sprite", Some(self.sprite.clone()));
        ini.write(path)
            .map_err(|e| format!("Failed to save profile file: {}", e))?;
        info!("Saved profile to {:?}", path);
        Ok(())
    }

    pub fn select(&mut self, index: usize) {
        self.sprite = sprite_for_index(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sprite() {
        assert_eq!(PlayerProfile::default().sprite, "Player_1.png");
    }

    #[test]
    fn test_sprite_for_index_is_one_based() {
        assert_eq!(sprite_for_index(0), "Player_1.png");
        assert_eq!(sprite_for_index(3), "Player_4.png");
        assert_eq!(sprite_for_index(5), "Player_6.png");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.ini");
        let mut profile = PlayerProfile::with_path(&path);
        profile.select(3);
        profile.save_to_file().unwrap();

        let mut loaded = PlayerProfile::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded.sprite, "Player_4.png");
    }

    #[test]
    fn test_missing_file_is_an_error_and_keeps_default() {
        let dir = tempfile::tempdir().unwrap();
        let mut profile = PlayerProfile::with_path(dir.path().join("nope.ini"));
        assert!(profile.load_from_file().is_err());
        assert_eq!(profile.sprite, DEFAULT_SPRITE);
    }

    #[test]
    fn test_unknown_sprite_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.ini");
        std::fs::write(&path, "[player]\nsprite = ../../etc/passwd\n").unwrap();
        let mut profile = PlayerProfile::with_path(&path);
        assert!(profile.load_from_file().is_err());
        assert_eq!(profile.sprite, DEFAULT_SPRITE);
    }

    #[test]
    fn test_in_memory_profile_skips_disk() {
        let mut profile = PlayerProfile::default();
        profile.select(2);
        assert!(profile.save_to_file().is_ok());
        assert!(profile.load_from_file().is_ok());
        assert_eq!(profile.sprite, "Player_3.png");
    }
}
